//! 厨房を題材にした有界キューのパイプライン
//!
//! 注文受付（Dispatcher）→ 注文キュー → 調理担当（Worker）→ 結果キュー → 呼び出し側、
//! の単一ワーカー構成で、FIFO順を保ったまま注文を流す。
//! 周辺機能としてキャンセル可能な周期タスク、ラウンドロビンのファンイン、
//! タイムアウトによるデッドロック検出を持つ。

pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{
    ClosePolicy, Order, PipelineConfig, PipelineError, PipelineResult, PipelineSummary,
};
pub use engine::{create_default_engine, create_quiet_engine, PipelineEngine};
pub use services::{DefaultPipelineConfig, PipelineSettings};
