use crate::core::{ClosePolicy, Order, PipelineSummary};
use crate::engine::{create_default_engine, PipelineEngine, DEFAULT_MENU};
use crate::services::{
    ConsoleOrderSink, DefaultPipelineConfig, NoOpProgressReporter, PipelineSettings,
};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Options of the run command, flattened from the CLI arguments
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub labels: Vec<String>,
    pub capacity: Option<usize>,
    pub delay_ms: Option<u64>,
    pub close_after: Option<usize>,
    pub timeout_ms: Option<u64>,
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub quiet: bool,
    pub json: bool,
}

/// Settings file first, then preset, then individual flags
///
/// The order queue is sized to the order count unless the settings file or
/// `--capacity` sets it.
pub fn build_pipeline_config(options: &RunConfig) -> Result<DefaultPipelineConfig> {
    let mut settings = match &options.config {
        Some(path) => PipelineSettings::from_json_file(path)?,
        None => PipelineSettings::default(),
    };
    if options.preset.is_some() {
        settings.preset = options.preset.clone();
    }
    if settings.request_capacity.is_none() {
        let order_count = orders_from_labels(&options.labels).len();
        settings.request_capacity = Some(order_count.max(1));
    }

    let mut config = settings.into_config()?;
    if let Some(capacity) = options.capacity {
        config = config.with_capacity(capacity);
    }
    if let Some(delay_ms) = options.delay_ms {
        config = config.with_delay(Duration::from_millis(delay_ms));
    }
    if let Some(close_after) = options.close_after {
        config = config.with_close_policy(ClosePolicy::Fixed(close_after));
    }
    if let Some(timeout_ms) = options.timeout_ms {
        config = config.with_receive_timeout(Some(Duration::from_millis(timeout_ms)));
    }
    if options.quiet {
        config = config.with_progress_reporting(false);
    }
    Ok(config)
}

pub fn orders_from_labels(labels: &[String]) -> Vec<Order> {
    if labels.is_empty() {
        Order::from_labels(DEFAULT_MENU)
    } else {
        Order::from_labels(labels.iter().cloned())
    }
}

/// Execute the run command
pub async fn execute_run(options: RunConfig) -> Result<PipelineSummary> {
    let orders = orders_from_labels(&options.labels);
    let config = build_pipeline_config(&options)?;
    info!(orders = orders.len(), config = ?config, "run command");

    let summary = if options.quiet {
        PipelineEngine::new(config, NoOpProgressReporter::new(), ConsoleOrderSink::new())
            .run(orders)
            .await?
    } else {
        create_default_engine(config).run(orders).await?
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !options.quiet {
        println!("📊 Summary:");
        println!("   - Orders: {}", summary.total_orders);
        println!("   - Served: {}", summary.served);
        println!("   - Total time: {}ms", summary.total_time_ms);
        println!(
            "   - Average: {:.2}ms/order",
            summary.average_time_per_order_ms
        );
    }

    Ok(summary)
}
