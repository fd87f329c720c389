// crates/mh_config/src/sgs_config.rs

//! SgsConfig - 亚格子模型配置（全 f64）
//!
//! 求解器初始化时读取一次，之后不再修改。JSON 示例：
//!
//! ```json
//! {
//!   "model": "smagorinsky",
//!   "smagorinsky_constant": 0.1,
//!   "filter_width_multiplier": 2.0
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// 亚格子模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SgsModelKind {
    /// 无亚格子模型（涡粘性恒为 0）
    #[default]
    None,
    /// 常系数 Smagorinsky-Lilly 模型
    Smagorinsky,
    /// WALE 模型（占位，求值即终止）
    Wale,
}

impl SgsModelKind {
    /// 模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Smagorinsky => "smagorinsky",
            Self::Wale => "wale",
        }
    }

    /// 是否实际产生涡粘性
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for SgsModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SgsModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "smagorinsky" => Ok(Self::Smagorinsky),
            "wale" => Ok(Self::Wale),
            other => Err(ConfigError::invalid_value(
                "model",
                other,
                "可选值: none, smagorinsky, wale",
            )),
        }
    }
}

/// 亚格子模型配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgsConfig {
    /// 模型类型
    #[serde(default)]
    pub model: SgsModelKind,

    /// Smagorinsky 常数 C_s
    #[serde(default = "default_smagorinsky_constant")]
    pub smagorinsky_constant: f64,

    /// 滤波宽度倍数（Δ = C_s · mult · lenScale）
    #[serde(default = "default_filter_width_multiplier")]
    pub filter_width_multiplier: f64,
}

fn default_smagorinsky_constant() -> f64 { 0.1 }
fn default_filter_width_multiplier() -> f64 { 2.0 }

impl Default for SgsConfig {
    fn default() -> Self {
        Self {
            model: SgsModelKind::default(),
            smagorinsky_constant: default_smagorinsky_constant(),
            filter_width_multiplier: default_filter_width_multiplier(),
        }
    }
}

impl SgsConfig {
    /// 指定模型类型，其余取默认值
    pub fn with_model(model: SgsModelKind) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: SgsConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置有效性
    ///
    /// 常数只对 Smagorinsky 有意义，但无论选哪个模型都要求非负有限，
    /// 避免切换模型时才暴露坏值。
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("smagorinsky_constant", self.smagorinsky_constant)?;
        check_non_negative("filter_width_multiplier", self.filter_width_multiplier)?;
        Ok(())
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid_value(key, value, "必须为有限数"));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid_value(key, value, "不能为负"));
    }
    Ok(())
}
