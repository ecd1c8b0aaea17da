// 結果出力機能

pub mod implementations;

pub use implementations::{ConsoleOrderSink, MemoryOrderSink};
