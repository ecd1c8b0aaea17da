// 高レベル公開API
// PipelineEngineを簡単に使用できるようにするための便利な関数

use super::PipelineEngine;
use crate::{
    core::{Order, OrderSink, PipelineConfig, PipelineResult, PipelineSummary, ProgressReporter},
    services::{
        ConsoleOrderSink, ConsoleProgressReporter, DefaultPipelineConfig, MemoryOrderSink,
        NoOpProgressReporter,
    },
};

/// 元の厨房で受け付けていた6注文
pub const DEFAULT_MENU: [&str; 6] = ["炒饭", "炒时蔬", "水煮肉片", "炒饭", "炒时蔬", "水煮肉片"];

/// 設定済みPipelineEngineで注文を処理
pub async fn run_orders_with_engine<C, R, S>(
    orders: Vec<Order>,
    engine: &PipelineEngine<C, R, S>,
) -> PipelineResult<PipelineSummary>
where
    C: PipelineConfig,
    R: ProgressReporter + 'static,
    S: OrderSink + 'static,
{
    engine.run(orders).await
}

/// コンソールに進捗と料理を出力するエンジン
pub fn create_default_engine(
    config: DefaultPipelineConfig,
) -> PipelineEngine<DefaultPipelineConfig, ConsoleProgressReporter, ConsoleOrderSink> {
    PipelineEngine::new(config, ConsoleProgressReporter::new(), ConsoleOrderSink::new())
}

/// 何も出力せず結果をメモリに保持するエンジン（テスト・バックグラウンド用）
pub fn create_quiet_engine(
    config: DefaultPipelineConfig,
) -> PipelineEngine<DefaultPipelineConfig, NoOpProgressReporter, MemoryOrderSink> {
    PipelineEngine::new(config, NoOpProgressReporter::new(), MemoryOrderSink::new())
}
