// crates/mh_foundation/src/lib.rs

//! MariHydro Foundation Layer
//!
//! 基础层，为 LES 亚格子模型提供共享抽象。
//!
//! # 模块概览
//!
//! - [`scalar`]: 计算用标量类型与安全数值辅助
//! - [`error`]: 统一错误类型
//!
//! # 示例
//!
//! ```
//! use mh_foundation::error::{MhError, MhResult};
//!
//! fn check_density(rho: f64) -> MhResult<()> {
//!     MhError::check_finite("rho", rho)?;
//!     MhError::check_range("rho", rho, 0.0, f64::MAX)
//! }
//!
//! assert!(check_density(1.2).is_ok());
//! assert!(check_density(-1.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;

// 重导出常用类型
pub use error::{MhError, MhResult};
pub use scalar::Scalar;
