// 結果出力の具象実装

use crate::core::{Order, OrderSink};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// コンソールに1行1皿で出力する実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleOrderSink;

impl ConsoleOrderSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderSink for ConsoleOrderSink {
    async fn deliver(&self, order: &Order) -> Result<()> {
        println!("{order}");
        Ok(())
    }

    async fn finish(&self) -> Result<()> {
        Ok(())
    }
}

/// メモリ上に結果を保持する実装（テスト・静音実行用）
///
/// クローンは同じバッファを共有する。
#[derive(Debug, Clone)]
pub struct MemoryOrderSink {
    delivered: Arc<Mutex<Vec<Order>>>,
    finished: Arc<Mutex<bool>>,
}

impl Default for MemoryOrderSink {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryOrderSink {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            finished: Arc::new(Mutex::new(false)),
        }
    }

    /// 出力された注文を出力順で取得
    pub fn delivered(&self) -> Vec<Order> {
        lock(&self.delivered).clone()
    }

    /// 出力された注文のラベルを取得
    pub fn delivered_labels(&self) -> Vec<String> {
        lock(&self.delivered)
            .iter()
            .map(|order| order.label().to_string())
            .collect()
    }

    pub fn delivered_count(&self) -> usize {
        lock(&self.delivered).len()
    }

    pub fn is_finished(&self) -> bool {
        *lock(&self.finished)
    }

    pub fn clear(&self) {
        lock(&self.delivered).clear();
        *lock(&self.finished) = false;
    }
}

#[async_trait]
impl OrderSink for MemoryOrderSink {
    async fn deliver(&self, order: &Order) -> Result<()> {
        let mut delivered = lock(&self.delivered);
        if *lock(&self.finished) {
            anyhow::bail!("完了済みの出力先に {order} を出力しようとしました");
        }
        delivered.push(order.clone());
        Ok(())
    }

    async fn finish(&self) -> Result<()> {
        *lock(&self.finished) = true;
        Ok(())
    }
}
