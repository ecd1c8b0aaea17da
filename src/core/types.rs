// パイプラインで扱うデータ型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 注文（ワークアイテム）
///
/// キュー内の位置以外に識別子を持たない不透明なラベル。
/// 一度キューに入れたら変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(String);

impl Order {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// ラベル列から注文リストを作成
    pub fn from_labels<I, S>(labels: I) -> Vec<Order>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Order::new).collect()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Order {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Order {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// ワーカーが結果キューを閉じる条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ClosePolicy {
    /// 実際の入力数を閾値として明示的に渡す
    #[default]
    MatchInput,
    /// 呼び出し側が指定する固定閾値（入力数と一致しなければ実行を拒否）
    Fixed(usize),
}

impl ClosePolicy {
    /// 入力数から閾値を決定
    pub fn threshold_for(&self, input_len: usize) -> usize {
        match self {
            Self::MatchInput => input_len,
            Self::Fixed(threshold) => *threshold,
        }
    }
}

/// パイプライン実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub total_orders: usize,
    pub served: usize,
    pub started_at: DateTime<Utc>,
    pub total_time_ms: u64,
    pub average_time_per_order_ms: f64,
}

/// ワーカーが停止した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStop {
    /// 閾値に到達して結果キューを閉じた
    ThresholdReached,
    /// 注文キューが閉じられ空になった
    InputClosed,
    /// 結果の受信側がいなくなった
    ResultReceiverGone,
}

/// ワーカー1回分の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub processed: usize,
    pub stop: WorkerStop,
}

/// ファンインで合流したアイテム（どのソースから来たかを保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedItem<T> {
    pub source: usize,
    pub item: T,
}

/// 周期タスクの1ティック
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub label: String,
    pub sequence: usize,
}

/// 周期タスクが停止した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerStop {
    Cancelled,
    Exhausted,
    /// ティックの受信側がいなくなった
    Disconnected,
}

/// 周期タスクの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerReport {
    pub label: String,
    pub ticks: usize,
    pub stop: TickerStop,
}
