// PipelineEngine - 依存性注入によるパイプライン実行エンジン
// 設定・進捗報告・出力先をコンストラクタで受け取り、実行ごとにパイプラインを組み立てる

use super::pipeline::OrderPipeline;
use crate::core::{
    Order, OrderSink, PipelineConfig, PipelineResult, PipelineSummary, ProgressReporter,
};
use std::sync::Arc;

/// 依存関係を所有するパイプラインエンジン
///
/// 共有される依存関係は初期からArcで管理し、実行ごとのクローンを避ける。
pub struct PipelineEngine<C, R, S> {
    config: Arc<C>,
    reporter: Arc<R>,
    sink: Arc<S>,
}

impl<C, R, S> PipelineEngine<C, R, S>
where
    C: PipelineConfig,
    R: ProgressReporter + 'static,
    S: OrderSink + 'static,
{
    pub fn new(config: C, reporter: R, sink: S) -> Self {
        Self {
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            sink: Arc::new(sink),
        }
    }

    /// 注文リストを処理
    pub async fn run(&self, orders: Vec<Order>) -> PipelineResult<PipelineSummary> {
        let pipeline = OrderPipeline::new(Arc::clone(&self.reporter), Arc::clone(&self.sink));
        pipeline.execute(orders, self.config.as_ref()).await
    }

    /// ラベル列から注文を作って処理
    pub async fn run_labels(&self, labels: &[&str]) -> PipelineResult<PipelineSummary> {
        self.run(Order::from_labels(labels.iter().copied())).await
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
