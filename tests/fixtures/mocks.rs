// テスト用のトレイト実装
// 呼び出し順序を記録するレポーターと、指定件数で失敗するシンク

use anyhow::{bail, Result};
use async_trait::async_trait;
use order_pipeline::core::{OrderSink, ProgressReporter};
use order_pipeline::Order;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 受け取った報告を文字列として記録する
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, total_orders: usize) {
        self.push(format!("started:{total_orders}"));
    }

    async fn report_served(&self, served: usize, total: usize, order: &Order) {
        self.push(format!("served:{served}/{total}:{}", order.label()));
    }

    async fn report_error(&self, error: &str) {
        self.push(format!("error:{error}"));
    }

    async fn report_completed(&self, served: usize, total: usize) {
        self.push(format!("completed:{served}/{total}"));
    }
}

/// `fail_at` 件目の配達で失敗する
pub struct FailingSink {
    fail_at: usize,
    delivered: AtomicUsize,
}

impl FailingSink {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            delivered: AtomicUsize::new(0),
        }
    }

    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderSink for FailingSink {
    async fn deliver(&self, order: &Order) -> Result<()> {
        let attempt = self.delivered.load(Ordering::SeqCst) + 1;
        if attempt == self.fail_at {
            bail!("{} を配達できません", order.label());
        }
        self.delivered.store(attempt, Ordering::SeqCst);
        Ok(())
    }

    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}
