// Collector - 提供された料理を受け取る呼び出し側
// 期待件数ちょうどを読み取り、出力先へ渡す

use super::watchdog::with_optional_deadline;
use crate::core::{Order, OrderSink, PipelineError, PipelineResult, ProgressReporter};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

/// 収集時のオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// 読み取る件数（これ以上は読まない）
    pub expected: usize,
    /// 1件あたりの受信タイムアウト
    pub receive_timeout: Option<Duration>,
    pub report_progress: bool,
}

impl CollectOptions {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            receive_timeout: None,
            report_progress: true,
        }
    }

    pub fn with_receive_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.receive_timeout = timeout;
        self
    }

    pub fn with_progress(mut self, enable: bool) -> Self {
        self.report_progress = enable;
        self
    }
}

/// 結果キューから期待件数を順番に読み取る
///
/// 期待件数に届く前にキューが閉じた場合は `ResultsExhausted`、
/// タイムアウト指定時に受信が止まった場合は `DeadlockDetected` を返す。
pub async fn collect_results<R, S>(
    result_rx: &mut mpsc::Receiver<Order>,
    options: CollectOptions,
    reporter: &R,
    sink: &S,
) -> PipelineResult<Vec<Order>>
where
    R: ProgressReporter + ?Sized,
    S: OrderSink + ?Sized,
{
    let mut served = Vec::with_capacity(options.expected);

    while served.len() < options.expected {
        let received =
            with_optional_deadline("receive_result", options.receive_timeout, result_rx.recv())
                .await?;

        let Some(order) = received else {
            warn!(
                expected = options.expected,
                received = served.len(),
                "期待件数に届く前に結果キューが閉じられました"
            );
            return Err(PipelineError::results_exhausted(
                options.expected,
                served.len(),
            ));
        };

        sink.deliver(&order).await.map_err(PipelineError::sink)?;
        if options.report_progress {
            reporter
                .report_served(served.len() + 1, options.expected, &order)
                .await;
        }
        served.push(order);
    }

    Ok(served)
}
