// Pipeline - Dispatcher → Worker → Collector のオーケストレーション

use super::{
    collector::{collect_results, CollectOptions},
    dispatcher::dispatch_orders,
    worker::spawn_worker,
};
use crate::core::{
    Order, OrderSink, PipelineConfig, PipelineError, PipelineResult, PipelineSummary,
    ProgressReporter,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// 1回の実行ごとにキューを作り直す注文パイプライン
pub struct OrderPipeline<R, S> {
    reporter: Arc<R>,
    sink: Arc<S>,
}

/// 実行前の設定検証
///
/// クローズ閾値は入力数と一致し、受信タイムアウトは調理時間より長くなければならない。
/// 戻り値は閾値。
pub fn validate_config<C>(config: &C, input_len: usize) -> PipelineResult<usize>
where
    C: PipelineConfig + ?Sized,
{
    if config.request_capacity() == 0 {
        return Err(PipelineError::configuration(
            "注文キューの容量は1以上である必要があります",
        ));
    }
    if config.result_capacity() == 0 {
        return Err(PipelineError::configuration(
            "結果キューの容量は1以上である必要があります",
        ));
    }
    if let Some(timeout) = config.receive_timeout() {
        let delay = config.processing_delay();
        if timeout <= delay {
            return Err(PipelineError::configuration(format!(
                "受信タイムアウト ({}ms) は調理時間 ({}ms) より長い必要があります",
                timeout.as_millis(),
                delay.as_millis()
            )));
        }
    }

    let threshold = config.close_policy().threshold_for(input_len);
    if threshold != input_len {
        return Err(PipelineError::threshold_mismatch(threshold, input_len));
    }
    Ok(threshold)
}

impl<R, S> OrderPipeline<R, S>
where
    R: ProgressReporter + 'static,
    S: OrderSink + 'static,
{
    pub fn new(reporter: Arc<R>, sink: Arc<S>) -> Self {
        Self { reporter, sink }
    }

    /// 注文リストを処理
    pub async fn execute<C>(
        &self,
        orders: Vec<Order>,
        config: &C,
    ) -> PipelineResult<PipelineSummary>
    where
        C: PipelineConfig + ?Sized,
    {
        match self.run(orders, config).await {
            Ok(summary) => Ok(summary),
            Err(error) => {
                if config.enable_progress_reporting() {
                    self.reporter.report_error(&error.to_string()).await;
                }
                Err(error)
            }
        }
    }

    async fn run<C>(&self, orders: Vec<Order>, config: &C) -> PipelineResult<PipelineSummary>
    where
        C: PipelineConfig + ?Sized,
    {
        let started_at = Utc::now();
        let start_time = Instant::now();
        let total_orders = orders.len();
        let progress = config.enable_progress_reporting();

        let threshold = validate_config(config, total_orders)?;
        info!(
            total_orders,
            request_capacity = config.request_capacity(),
            result_capacity = config.result_capacity(),
            "パイプライン開始"
        );

        // 注文キューと結果キュー
        let (request_tx, request_rx) = mpsc::channel::<Order>(config.request_capacity());
        let (result_tx, mut result_rx) = mpsc::channel::<Order>(config.result_capacity());

        if progress {
            self.reporter.report_started(total_orders).await;
        }

        let worker_handle = spawn_worker(
            request_rx,
            result_tx,
            config.processing_delay(),
            threshold,
        );

        // Dispatcherは呼び出し側のコンテキストで実行
        // 失敗時もrequest_txはドロップ済みなのでワーカーはすぐに終了する
        if let Err(error) = dispatch_orders(orders, request_tx) {
            worker_handle.await??;
            return Err(error);
        }

        let options = CollectOptions::new(total_orders)
            .with_receive_timeout(config.receive_timeout())
            .with_progress(progress);
        let collected =
            collect_results(&mut result_rx, options, self.reporter.as_ref(), self.sink.as_ref())
                .await;
        let served = match collected {
            Ok(served) => served,
            Err(error) => {
                // 受信が止まったワーカーを残さない
                worker_handle.abort();
                return Err(error);
            }
        };
        drop(result_rx);

        let report = worker_handle.await??;
        debug!(processed = report.processed, stop = ?report.stop, "ワーカー終了");

        self.sink.finish().await.map_err(PipelineError::sink)?;

        if progress {
            self.reporter
                .report_completed(served.len(), total_orders)
                .await;
        }

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_order_ms = if total_orders > 0 {
            total_time_ms as f64 / total_orders as f64
        } else {
            0.0
        };

        info!(served = served.len(), total_time_ms, "パイプライン完了");
        Ok(PipelineSummary {
            total_orders,
            served: served.len(),
            started_at,
            total_time_ms,
            average_time_per_order_ms,
        })
    }
}
