// 設定ファイル（JSON）からの読み込み
// 指定されなかった項目はプリセットの値をそのまま使う

use super::implementations::DefaultPipelineConfig;
use crate::core::ClosePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSettings {
    pub preset: Option<String>,
    pub request_capacity: Option<usize>,
    pub result_capacity: Option<usize>,
    pub delay_ms: Option<u64>,
    pub close_policy: Option<ClosePolicy>,
    pub receive_timeout_ms: Option<u64>,
    pub progress: Option<bool>,
}

impl PipelineSettings {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("設定ファイルのJSONを解析できません")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// プリセットを起点に設定を組み立てる
    pub fn into_config(self) -> Result<DefaultPipelineConfig> {
        let base = match self.preset.as_deref() {
            Some(name) => DefaultPipelineConfig::preset(name)?,
            None => DefaultPipelineConfig::default(),
        };
        Ok(self.apply_to(base))
    }

    /// 指定された項目だけを上書き
    pub fn apply_to(&self, mut config: DefaultPipelineConfig) -> DefaultPipelineConfig {
        if let Some(capacity) = self.request_capacity {
            config = config.with_request_capacity(capacity);
        }
        if let Some(capacity) = self.result_capacity {
            config = config.with_result_capacity(capacity);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_delay(Duration::from_millis(delay_ms));
        }
        if let Some(policy) = self.close_policy {
            config = config.with_close_policy(policy);
        }
        if let Some(timeout_ms) = self.receive_timeout_ms {
            config = config.with_receive_timeout(Some(Duration::from_millis(timeout_ms)));
        }
        if let Some(progress) = self.progress {
            config = config.with_progress_reporting(progress);
        }
        config
    }
}
