// Custom error types for the order pipeline
// キューの誤用（容量超過・結果不足・閾値不一致）を明示的なエラーに変換する

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("容量超過エラー: 容量 {capacity} のキューに {requested} 件は投入できません")]
    CapacityExceeded { capacity: usize, requested: usize },

    #[error("結果不足エラー: {expected} 件を期待しましたが {received} 件でキューが閉じられました")]
    ResultsExhausted { expected: usize, received: usize },

    #[error("閾値不一致エラー: クローズ閾値 {threshold} が入力数 {input_len} と一致しません")]
    ThresholdMismatch { threshold: usize, input_len: usize },

    #[error("デッドロック検出: {operation} が {waited_ms}ms 以内に完了しませんでした")]
    DeadlockDetected { operation: String, waited_ms: u64 },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {queue} が閉じられています")]
    ChannelClosed { queue: String },

    #[error("出力エラー: {source}")]
    SinkError {
        #[source]
        source: anyhow::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn capacity_exceeded(capacity: usize, requested: usize) -> Self {
        Self::CapacityExceeded {
            capacity,
            requested,
        }
    }

    pub fn results_exhausted(expected: usize, received: usize) -> Self {
        Self::ResultsExhausted { expected, received }
    }

    pub fn threshold_mismatch(threshold: usize, input_len: usize) -> Self {
        Self::ThresholdMismatch {
            threshold,
            input_len,
        }
    }

    /// デッドロック検出エラーの作成
    pub fn deadlock(operation: impl Into<String>, waited_ms: u64) -> Self {
        Self::DeadlockDetected {
            operation: operation.into(),
            waited_ms,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel_closed(queue: impl Into<String>) -> Self {
        Self::ChannelClosed {
            queue: queue.into(),
        }
    }

    pub fn sink(source: anyhow::Error) -> Self {
        Self::SinkError { source }
    }

    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ThresholdMismatch { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::CapacityExceeded { .. } => ErrorSeverity::High,
            Self::ResultsExhausted { .. } | Self::ChannelClosed { .. } => ErrorSeverity::Medium,
            Self::SinkError { .. } => ErrorSeverity::Medium,
            Self::DeadlockDetected { .. } | Self::TaskError { .. } => ErrorSeverity::Critical,
            Self::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 設定を直せば再実行できるものは回復可能とみなさない（呼び出し側の修正が必要）
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ThresholdMismatch { .. }
            | Self::ConfigurationError { .. }
            | Self::CapacityExceeded { .. } => false,
            Self::ResultsExhausted { .. } => false,
            Self::DeadlockDetected { .. } => false,
            Self::ChannelClosed { .. } => true,
            Self::SinkError { .. } => true,
            Self::TaskError { .. } => true,
            Self::InternalError { .. } => false,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::CapacityExceeded { capacity, requested } => ErrorContext::new("dispatch")
                .with_resource("request_queue")
                .with_suggestion(format!(
                    "注文キューの容量を {requested} 以上にしてください（現在 {capacity}）"
                )),
            Self::ResultsExhausted { expected, .. } => ErrorContext::new("collect")
                .with_resource("result_queue")
                .with_suggestion(format!(
                    "クローズ閾値が入力数 {expected} と一致しているか確認してください"
                )),
            Self::ThresholdMismatch { input_len, .. } => ErrorContext::new("validate")
                .with_resource("close_policy")
                .with_suggestion(format!(
                    "close_after を {input_len} にするか match_input を使用してください"
                )),
            Self::DeadlockDetected { operation, .. } => ErrorContext::new("watchdog")
                .with_resource(operation.clone())
                .with_suggestion("送信と受信が別タスクで行われているか確認してください"),
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .with_suggestion(format!("設定を確認してください: {message}")),
            Self::ChannelClosed { queue } => {
                ErrorContext::new("channel").with_resource(queue.clone())
            }
            _ => ErrorContext::new("unknown"),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - ログ出力程度
    Low,
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的
    Critical,
}

impl ErrorSeverity {
    pub const fn as_level(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（キュー名等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// パイプラインの結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        PipelineError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}
