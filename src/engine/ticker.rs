// Ticker - キャンセル可能な周期タスクと、その並行実行グループ

use crate::core::{PipelineError, PipelineResult, Tick, TickerReport, TickerStop};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// 周期タスクの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    pub label: String,
    pub interval: Duration,
    /// Noneならキャンセルされるまで続ける
    pub max_ticks: Option<usize>,
}

impl TickerConfig {
    pub fn new(label: impl Into<String>, interval: Duration) -> Self {
        Self {
            label: label.into(),
            interval,
            max_ticks: None,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}

/// 周期タスクを実行
///
/// 最初のティックは即座に発生する。トークンがキャンセルされるか `max_ticks` に
/// 達するまで `interval` ごとにティックを出す。`tick_tx` があれば各ティックを送る。
pub async fn run_ticker(
    config: TickerConfig,
    token: CancellationToken,
    tick_tx: Option<mpsc::Sender<Tick>>,
) -> PipelineResult<TickerReport> {
    if config.interval.is_zero() {
        return Err(PipelineError::configuration(format!(
            "{} の間隔は0より大きい必要があります",
            config.label
        )));
    }

    let mut interval = tokio::time::interval(config.interval);
    let mut ticks = 0;

    let stop = loop {
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            break TickerStop::Exhausted;
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => break TickerStop::Cancelled,
            _ = interval.tick() => {}
        }

        let tick = Tick {
            label: config.label.clone(),
            sequence: ticks + 1,
        };
        debug!(label = %tick.label, sequence = tick.sequence, "tick");

        if let Some(tx) = &tick_tx {
            tokio::select! {
                biased;
                _ = token.cancelled() => break TickerStop::Cancelled,
                sent = tx.send(tick) => {
                    if sent.is_err() {
                        break TickerStop::Disconnected;
                    }
                }
            }
        }
        ticks += 1;
    };

    info!(label = %config.label, ticks, stop = ?stop, "周期タスク終了");
    Ok(TickerReport {
        label: config.label,
        ticks,
        stop,
    })
}

/// 周期タスクを別タスクとして起動
pub fn spawn_ticker(
    config: TickerConfig,
    token: CancellationToken,
    tick_tx: Option<mpsc::Sender<Tick>>,
) -> tokio::task::JoinHandle<PipelineResult<TickerReport>> {
    tokio::spawn(run_ticker(config, token, tick_tx))
}

/// ラベルごとに回数制限付きの周期タスクを並行実行し、全員の終了を待つ
///
/// 結果はラベルの指定順で返す。`tick_tx` があれば全員のティックをそこへ送る。
pub async fn run_station_group(
    labels: &[String],
    interval: Duration,
    ticks_each: usize,
    token: CancellationToken,
    tick_tx: Option<mpsc::Sender<Tick>>,
) -> PipelineResult<Vec<TickerReport>> {
    let mut stations = JoinSet::new();
    for (index, label) in labels.iter().enumerate() {
        let config = TickerConfig::new(label.clone(), interval).with_max_ticks(ticks_each);
        let token = token.child_token();
        let tick_tx = tick_tx.clone();
        stations.spawn(async move { (index, run_ticker(config, token, tick_tx).await) });
    }
    drop(tick_tx);

    let mut reports: Vec<Option<TickerReport>> = vec![None; labels.len()];
    while let Some(joined) = stations.join_next().await {
        let (index, report) = joined?;
        reports[index] = Some(report?);
    }

    Ok(reports.into_iter().flatten().collect())
}
