// 統合テスト共通のフィクスチャ
#![allow(dead_code)]
pub mod mocks;

use order_pipeline::{Order, DefaultPipelineConfig};

/// テスト用の6品メニュー
pub fn sample_orders() -> Vec<Order> {
    Order::from_labels(order_pipeline::engine::DEFAULT_MENU)
}

/// 調理時間なし、受信タイムアウト付きの設定
pub fn test_config() -> DefaultPipelineConfig {
    DefaultPipelineConfig::testing()
}
