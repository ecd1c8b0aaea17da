use crate::core::{MergedItem, Tick};
use crate::engine::{spawn_fan_in, spawn_ticker, TickerConfig};
use anyhow::{bail, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The three dishes the kitchen cooks on its own schedule
pub const DEFAULT_PRODUCERS: [&str; 3] = ["炒饭", "炒时蔬", "水煮肉片"];

pub struct MergeConfig {
    pub labels: Vec<String>,
    pub interval_ms: Vec<u64>,
    pub limit: usize,
}

fn producer_labels(labels: &[String]) -> Vec<String> {
    if labels.is_empty() {
        DEFAULT_PRODUCERS.iter().map(|s| s.to_string()).collect()
    } else {
        labels.to_vec()
    }
}

/// Execute merge command: one periodic producer per label, merged round-robin
pub async fn execute_merge(config: MergeConfig) -> Result<Vec<MergedItem<Tick>>> {
    let labels = producer_labels(&config.labels);
    if config.interval_ms.len() != labels.len() {
        bail!(
            "{} producers need {} intervals, got {}",
            labels.len(),
            labels.len(),
            config.interval_ms.len()
        );
    }

    let token = CancellationToken::new();
    let mut sources = Vec::with_capacity(labels.len());
    let mut producers = Vec::with_capacity(labels.len());
    for (label, interval_ms) in labels.iter().zip(&config.interval_ms) {
        let (tx, rx) = mpsc::channel::<Tick>(1);
        let ticker = TickerConfig::new(label.clone(), Duration::from_millis(*interval_ms));
        producers.push(spawn_ticker(ticker, token.clone(), Some(tx)));
        sources.push(rx);
    }

    let (mut merged_rx, merge_handle) = spawn_fan_in(sources, 1)?;
    let mut merged = Vec::with_capacity(config.limit);
    while merged.len() < config.limit {
        let Some(item) = merged_rx.recv().await else {
            break;
        };
        println!("{}", item.item.label);
        merged.push(item);
    }

    token.cancel();
    drop(merged_rx);
    for producer in producers {
        producer.await??;
    }
    merge_handle.await?;

    Ok(merged)
}
