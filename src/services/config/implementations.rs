// 設定管理の具象実装

use crate::core::{ClosePolicy, PipelineConfig, PipelineError, PipelineResult};
use std::time::Duration;

/// 元の厨房と同じく6皿分のキュー
pub const DEFAULT_CAPACITY: usize = 6;
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPipelineConfig {
    request_capacity: usize,
    result_capacity: usize,
    delay: Duration,
    close_policy: ClosePolicy,
    receive_timeout: Option<Duration>,
    enable_progress: bool,
}

impl DefaultPipelineConfig {
    /// 両キューを同じ容量で作成
    pub fn new(capacity: usize) -> Self {
        Self {
            request_capacity: capacity,
            result_capacity: capacity,
            ..Self::default()
        }
    }

    /// 調理時間なし（テスト・ベンチマーク用）
    pub fn fast() -> Self {
        Self::default().with_delay(Duration::ZERO)
    }

    /// 調理時間なし、結果待ちは1秒で打ち切り
    pub fn testing() -> Self {
        Self::fast().with_receive_timeout(Some(Duration::from_secs(1)))
    }

    /// 名前付きプリセットから作成
    pub fn preset(name: &str) -> PipelineResult<Self> {
        match name {
            "default" => Ok(Self::default()),
            "fast" => Ok(Self::fast()),
            "testing" => Ok(Self::testing()),
            other => Err(PipelineError::configuration(format!(
                "不明なプリセット: {other} (default, fast, testing のいずれか)"
            ))),
        }
    }

    pub fn with_request_capacity(mut self, capacity: usize) -> Self {
        self.request_capacity = capacity;
        self
    }

    pub fn with_result_capacity(mut self, capacity: usize) -> Self {
        self.result_capacity = capacity;
        self
    }

    /// 両キューの容量をまとめて設定
    pub fn with_capacity(self, capacity: usize) -> Self {
        self.with_request_capacity(capacity)
            .with_result_capacity(capacity)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_close_policy(mut self, policy: ClosePolicy) -> Self {
        self.close_policy = policy;
        self
    }

    pub fn with_receive_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.receive_timeout = timeout;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            request_capacity: DEFAULT_CAPACITY,
            result_capacity: DEFAULT_CAPACITY,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            close_policy: ClosePolicy::MatchInput,
            receive_timeout: None,
            enable_progress: true,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn request_capacity(&self) -> usize {
        self.request_capacity
    }

    fn result_capacity(&self) -> usize {
        self.result_capacity
    }

    fn processing_delay(&self) -> Duration {
        self.delay
    }

    fn close_policy(&self) -> ClosePolicy {
        self.close_policy
    }

    fn receive_timeout(&self) -> Option<Duration> {
        self.receive_timeout
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
