// Watchdog - タイムアウトによるデッドロック検出
// 永久に待ち続ける操作を DeadlockDetected エラーとして報告する

use crate::core::{PipelineError, PipelineResult};
use std::future::Future;
use std::time::Duration;

/// `limit` 以内に完了しなければデッドロックとみなす
pub async fn detect_deadlock<F, T>(
    operation: &str,
    limit: Duration,
    future: F,
) -> PipelineResult<T>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(limit, future)
        .await
        .map_err(|_| PipelineError::deadlock(operation, limit.as_millis() as u64))
}

/// 制限時間が指定されている場合のみ監視する
pub async fn with_optional_deadline<F, T>(
    operation: &str,
    limit: Option<Duration>,
    future: F,
) -> PipelineResult<T>
where
    F: Future<Output = T>,
{
    match limit {
        Some(limit) => detect_deadlock(operation, limit, future).await,
        None => Ok(future.await),
    }
}
