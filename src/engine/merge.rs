// Fan-in - 複数の有界キューを1本の出力へ合流させる
//
// 複数のソースが同時に準備できている場合はラウンドロビンで選ぶ。
// 直前に取り出したソースの次から順に調べるので、結果は実行タイミングに依存しない。

use crate::core::{MergedItem, PipelineError, PipelineResult};
use std::future::poll_fn;
use std::task::Poll;
use tokio::sync::mpsc;
use tracing::debug;

/// `start` から順に各ソースを調べ、最初に取り出せたアイテムを返す
///
/// 閉じたソースは `None` に置き換えてローテーションから外す。
/// 全ソースが閉じていれば `None`。
async fn next_ready<T>(
    sources: &mut [Option<mpsc::Receiver<T>>],
    start: usize,
) -> Option<(usize, T)> {
    poll_fn(|cx| {
        let count = sources.len();
        let mut open = 0;
        for offset in 0..count {
            let index = (start + offset) % count;
            let Some(rx) = sources[index].as_mut() else {
                continue;
            };
            match rx.poll_recv(cx) {
                Poll::Ready(Some(item)) => return Poll::Ready(Some((index, item))),
                Poll::Ready(None) => sources[index] = None,
                Poll::Pending => open += 1,
            }
        }
        if open == 0 {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    })
    .await
}

/// 合流タスクを起動
///
/// 出力キューは全ソースが閉じるか、出力の受信側がドロップされたときに閉じる。
/// JoinHandleは転送した件数を返す。
pub fn spawn_fan_in<T>(
    sources: Vec<mpsc::Receiver<T>>,
    capacity: usize,
) -> PipelineResult<(
    mpsc::Receiver<MergedItem<T>>,
    tokio::task::JoinHandle<usize>,
)>
where
    T: Send + 'static,
{
    if capacity == 0 {
        return Err(PipelineError::configuration(
            "合流キューの容量は1以上である必要があります",
        ));
    }

    let (output_tx, output_rx) = mpsc::channel(capacity);
    let mut sources: Vec<Option<mpsc::Receiver<T>>> = sources.into_iter().map(Some).collect();

    let handle = tokio::spawn(async move {
        let mut cursor = 0;
        let mut forwarded = 0;

        loop {
            let next = tokio::select! {
                biased;
                _ = output_tx.closed() => None,
                ready = next_ready(&mut sources, cursor) => ready,
            };
            let Some((source, item)) = next else {
                break;
            };

            cursor = (source + 1) % sources.len();
            if output_tx.send(MergedItem { source, item }).await.is_err() {
                break;
            }
            forwarded += 1;
        }

        debug!(forwarded, "合流終了");
        forwarded
    });

    Ok((output_rx, handle))
}
