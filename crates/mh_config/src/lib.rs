// crates/mh_config/src/lib.rs

//! MariHydro Config Layer
//!
//! 配置层，描述 LES 模式下亚格子 (SGS) 湍流闭合的选择与常数。
//! 本层只负责"选了什么"，具体模型的构建由 `mh_les::sgs::create_sgs_model` 完成。
//!
//! # 模块概览
//!
//! - [`sgs_config`]: SgsConfig / SgsModelKind
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! Layer 3: mh_les        ─> create_sgs_model(&SgsConfig)
//! Layer 2: mh_config     ─> SgsConfig, SgsModelKind (本层)
//! Layer 1: mh_foundation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sgs_config;

// 重导出核心类型
pub use error::ConfigError;
pub use sgs_config::{SgsConfig, SgsModelKind};
