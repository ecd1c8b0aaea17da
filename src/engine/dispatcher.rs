// Dispatcher - 注文受付機能
// 呼び出し側のコンテキストで全注文を投入し、送信側をドロップして入力終了を通知する

use crate::core::{Order, PipelineError, PipelineResult};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

/// 全注文を順番に注文キューへ投入する
///
/// 送信はブロックしない。空き容量が注文数に満たない場合は何も送らずに
/// `CapacityExceeded` を返す。戻り値は投入した件数。
pub fn dispatch_orders(
    orders: Vec<Order>,
    request_tx: mpsc::Sender<Order>,
) -> PipelineResult<usize> {
    let requested = orders.len();
    let available = request_tx.capacity();
    if available < requested {
        return Err(PipelineError::capacity_exceeded(available, requested));
    }

    for order in orders {
        debug!(order = %order, "注文を投入");
        request_tx.try_send(order).map_err(|e| match e {
            TrySendError::Full(_) => {
                PipelineError::capacity_exceeded(request_tx.max_capacity(), requested)
            }
            TrySendError::Closed(_) => PipelineError::channel_closed("request_queue"),
        })?;
    }

    // request_txはここでドロップされ、ワーカーに入力終了が伝わる
    Ok(requested)
}
