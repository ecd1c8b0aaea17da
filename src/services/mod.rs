// サービス層 - 機能別の具象実装
// 設定・進捗報告・結果出力はそれぞれコア層のトレイトを実装する

pub mod config;
pub mod monitoring;
pub mod output;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultPipelineConfig, PipelineSettings};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use output::{ConsoleOrderSink, MemoryOrderSink};
