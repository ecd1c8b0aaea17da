// Worker - 調理担当（単一ワーカー）
// 注文キューから順に取り出し、一定時間待ってから同じ注文を結果キューへ流す

use crate::core::{Order, PipelineResult, WorkerReport, WorkerStop};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// ワーカーを起動
///
/// `close_after` 件処理した時点で結果キューを閉じて停止する。残りの注文は処理しない。
/// 注文キューが先に閉じて空になった場合もそこで結果キューを閉じる。
pub fn spawn_worker(
    request_rx: mpsc::Receiver<Order>,
    result_tx: mpsc::Sender<Order>,
    delay: Duration,
    close_after: usize,
) -> tokio::task::JoinHandle<PipelineResult<WorkerReport>> {
    tokio::spawn(run_worker(request_rx, result_tx, delay, close_after))
}

pub async fn run_worker(
    mut request_rx: mpsc::Receiver<Order>,
    result_tx: mpsc::Sender<Order>,
    delay: Duration,
    close_after: usize,
) -> PipelineResult<WorkerReport> {
    let mut processed = 0;

    let stop = if close_after == 0 {
        WorkerStop::ThresholdReached
    } else {
        loop {
            let Some(order) = request_rx.recv().await else {
                break WorkerStop::InputClosed;
            };

            // 調理時間（キャンセル不可）
            tokio::time::sleep(delay).await;

            if result_tx.send(order).await.is_err() {
                break WorkerStop::ResultReceiverGone;
            }
            processed += 1;
            debug!(processed, close_after, "注文を提供");

            if processed == close_after {
                break WorkerStop::ThresholdReached;
            }
        }
    };

    if stop == WorkerStop::ThresholdReached && !request_rx.is_empty() {
        warn!(processed, "閾値に到達したため残りの注文を破棄します");
    }

    // 結果キューを閉じる（以降の送信は発生しない）
    drop(result_tx);
    Ok(WorkerReport { processed, stop })
}
