use clap::Parser;
use order_pipeline::cli::{
    execute_merge, execute_run, execute_stations, execute_ticker, init_tracing, Cli, Commands,
    MergeConfig, RunConfig,
};

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("⚠️  {e}");
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            labels,
            capacity,
            delay_ms,
            close_after,
            timeout_ms,
            config,
            preset,
            quiet,
            json,
        } => execute_run(RunConfig {
            labels,
            capacity,
            delay_ms,
            close_after,
            timeout_ms,
            config,
            preset,
            quiet,
            json,
        })
        .await
        .map(|_| ()),
        Commands::Merge {
            labels,
            interval_ms,
            limit,
        } => execute_merge(MergeConfig {
            labels,
            interval_ms,
            limit,
        })
        .await
        .map(|_| ()),
        Commands::Stations {
            labels,
            interval_ms,
            ticks,
        } => execute_stations(labels, interval_ms, ticks)
            .await
            .map(|_| ()),
        Commands::Ticker {
            label,
            interval_ms,
            duration_ms,
        } => execute_ticker(label, interval_ms, duration_ms)
            .await
            .map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("❌ エラー: {e:#}");
        std::process::exit(1);
    }
}
