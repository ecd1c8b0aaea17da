// 進捗監視の具象実装

use crate::core::{Order, ProgressReporter};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_orders: usize) {
        if !self.quiet {
            println!("🚀 Accepted {total_orders} orders, kitchen is cooking...");
        }
    }

    async fn report_served(&self, served: usize, total: usize, order: &Order) {
        if !self.quiet {
            let percentage = (served as f64 / total.max(1) as f64) * 100.0;
            println!("📊 Served {served}/{total} ({percentage:.1}%): {order}");
        }
    }

    async fn report_error(&self, error: &str) {
        if !self.quiet {
            eprintln!("❌ Kitchen error: {error}");
        }
    }

    async fn report_completed(&self, served: usize, total: usize) {
        if !self.quiet {
            println!("✅ Completed! Served: {served}/{total}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_orders: usize) {}

    async fn report_served(&self, _served: usize, _total: usize, _order: &Order) {}

    async fn report_error(&self, _error: &str) {}

    async fn report_completed(&self, _served: usize, _total: usize) {}
}
