use super::merge::DEFAULT_PRODUCERS;
use crate::core::{Tick, TickerReport};
use crate::engine::{run_station_group, run_ticker, TickerConfig};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn spawn_tick_printer(mut tick_rx: mpsc::Receiver<Tick>) -> tokio::task::JoinHandle<usize> {
    tokio::spawn(async move {
        let mut printed = 0;
        while let Some(tick) = tick_rx.recv().await {
            println!("{} {}", tick.sequence, tick.label);
            printed += 1;
        }
        printed
    })
}

/// Execute stations command: every station ticks `ticks` times, then all are joined
pub async fn execute_stations(
    labels: Vec<String>,
    interval_ms: u64,
    ticks: usize,
) -> Result<Vec<TickerReport>> {
    let labels = if labels.is_empty() {
        DEFAULT_PRODUCERS.iter().map(|s| s.to_string()).collect()
    } else {
        labels
    };

    let (tick_tx, tick_rx) = mpsc::channel(labels.len().max(1));
    let printer = spawn_tick_printer(tick_rx);

    let reports = run_station_group(
        &labels,
        Duration::from_millis(interval_ms),
        ticks,
        CancellationToken::new(),
        Some(tick_tx),
    )
    .await?;
    printer.await?;

    println!("✅ {} stations finished", reports.len());
    Ok(reports)
}

/// Execute ticker command: tick until the duration elapses or Ctrl-C
pub async fn execute_ticker(
    label: String,
    interval_ms: u64,
    duration_ms: Option<u64>,
) -> Result<TickerReport> {
    let token = CancellationToken::new();
    let (tick_tx, tick_rx) = mpsc::channel(1);
    let printer = spawn_tick_printer(tick_rx);

    let stopper = tokio::spawn({
        let token = token.clone();
        async move {
            match duration_ms {
                Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                None => {
                    // Ctrl-Cを受け取れない環境ではキャンセルしない
                    if tokio::signal::ctrl_c().await.is_err() {
                        return;
                    }
                }
            }
            token.cancel();
        }
    });

    let config = TickerConfig::new(label, Duration::from_millis(interval_ms));
    let report = run_ticker(config, token, Some(tick_tx)).await;
    stopper.abort();
    printer.await?;

    Ok(report?)
}
