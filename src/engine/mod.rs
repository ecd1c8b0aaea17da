// エンジン層 - キューとタスクのオーケストレーション
// サービス層の実装を組み合わせて高レベルな処理を提供

pub mod api;
pub mod collector;
pub mod dispatcher;
pub mod merge;
mod pipeline;
pub mod pipeline_engine;
pub mod ticker;
pub mod watchdog;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use api::{create_default_engine, create_quiet_engine, run_orders_with_engine, DEFAULT_MENU};
pub use merge::spawn_fan_in;
pub use pipeline::{validate_config, OrderPipeline};
pub use pipeline_engine::PipelineEngine;
pub use ticker::{run_station_group, run_ticker, spawn_ticker, TickerConfig};
pub use watchdog::detect_deadlock;
