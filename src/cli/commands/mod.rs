pub mod merge;
pub mod run;
pub mod stations;

pub use merge::*;
pub use run::*;
pub use stations::*;
