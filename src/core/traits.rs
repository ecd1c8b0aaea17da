// パイプラインのトレイト定義
// 設定・進捗報告・結果出力の抽象化インターフェース

use super::types::{ClosePolicy, Order};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 注文キューの容量
    fn request_capacity(&self) -> usize;

    /// 結果キューの容量
    fn result_capacity(&self) -> usize;

    /// 1注文あたりの処理時間（調理時間）
    fn processing_delay(&self) -> Duration;

    /// 結果キューを閉じる条件
    fn close_policy(&self) -> ClosePolicy;

    /// 結果1件あたりの受信タイムアウト（Noneなら無制限に待つ）
    fn receive_timeout(&self) -> Option<Duration>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

impl PipelineConfig for Box<dyn PipelineConfig> {
    fn request_capacity(&self) -> usize {
        self.as_ref().request_capacity()
    }

    fn result_capacity(&self) -> usize {
        self.as_ref().result_capacity()
    }

    fn processing_delay(&self) -> Duration {
        self.as_ref().processing_delay()
    }

    fn close_policy(&self) -> ClosePolicy {
        self.as_ref().close_policy()
    }

    fn receive_timeout(&self) -> Option<Duration> {
        self.as_ref().receive_timeout()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_orders: usize);

    /// 1件提供されたときの報告
    async fn report_served(&self, served: usize, total: usize, order: &Order);

    /// エラー発生時の報告
    async fn report_error(&self, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, served: usize, total: usize);
}

#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_orders: usize) {
        self.as_ref().report_started(total_orders).await
    }

    async fn report_served(&self, served: usize, total: usize, order: &Order) {
        self.as_ref().report_served(served, total, order).await
    }

    async fn report_error(&self, error: &str) {
        self.as_ref().report_error(error).await
    }

    async fn report_completed(&self, served: usize, total: usize) {
        self.as_ref().report_completed(served, total).await
    }
}

/// 結果の出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// 提供された注文を1件出力
    async fn deliver(&self, order: &Order) -> Result<()>;

    /// 出力の完了処理
    async fn finish(&self) -> Result<()>;
}

#[async_trait]
impl OrderSink for Box<dyn OrderSink> {
    async fn deliver(&self, order: &Order) -> Result<()> {
        self.as_ref().deliver(order).await
    }

    async fn finish(&self) -> Result<()> {
        self.as_ref().finish().await
    }
}
