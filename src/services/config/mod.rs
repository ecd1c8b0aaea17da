// 設定管理機能

pub mod implementations;
pub mod settings;

pub use implementations::{DefaultPipelineConfig, DEFAULT_CAPACITY, DEFAULT_DELAY_MS};
pub use settings::PipelineSettings;
