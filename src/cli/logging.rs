// ログ初期化
// 標準出力は料理の出力に使うため、ログは標準エラーへ出す

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FORMAT_ENV: &str = "ORDER_PIPELINE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "order_pipeline=info";

/// `RUST_LOG` が無ければ `order_pipeline=info`、形式は `pretty`（既定）か `json`
pub fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| anyhow!("ログフィルタを作成できません: {e}"))?;

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    }
    .map_err(|e| anyhow!("ログを初期化できません: {e}"))
}
