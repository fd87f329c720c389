// crates/mh_les/src/sgs/error.rs

//! 亚格子模型求值错误
//!
//! 只有一种：调用了尚无物理公式的操作。这不是普通的错误返回，
//! 调用方不得用任何数值替代结果继续计算。生产路径通过
//! [`OrAbort::or_abort`] 或 [`SgsError::abort`] 直接终止进程；
//! 测试中可以对 `Err` 断言而不终止测试进程。

use mh_foundation::MhError;
use thiserror::Error;

use super::traits::SgsOperation;

/// 求值结果类型
pub type SgsResult<T> = Result<T, SgsError>;

/// 亚格子模型求值错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgsError {
    /// 操作未实现
    #[error("{model}::{operation}: 尚未实现")]
    NotImplemented {
        /// 模型名称
        model: &'static str,
        /// 被调用的操作
        operation: SgsOperation,
    },
}

impl SgsError {
    /// 构造"未实现"错误
    #[inline]
    pub fn not_implemented(model: &'static str, operation: SgsOperation) -> Self {
        Self::NotImplemented { model, operation }
    }

    /// 出错的模型名称
    pub fn model(&self) -> &'static str {
        match self {
            Self::NotImplemented { model, .. } => model,
        }
    }

    /// 出错的操作
    pub fn operation(&self) -> SgsOperation {
        match self {
            Self::NotImplemented { operation, .. } => *operation,
        }
    }

    /// 报告错误并以非零状态终止进程
    #[cold]
    pub fn abort(&self) -> ! {
        log::error!("{self}");
        eprintln!("{self}");
        std::process::exit(1)
    }
}

impl From<SgsError> for MhError {
    fn from(err: SgsError) -> Self {
        let SgsError::NotImplemented { model, operation } = err;
        MhError::not_implemented(format!("{model}::{operation}"))
    }
}

/// 生产调用点的终止策略
pub trait OrAbort<T> {
    /// 取出结果；若为未实现错误则终止进程
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for SgsResult<T> {
    #[inline]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => err.abort(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_identifies_model_and_operation() {
        let err = SgsError::not_implemented("WALE", SgsOperation::EddyViscosity3D);
        assert_eq!(err.model(), "WALE");
        assert_eq!(err.operation(), SgsOperation::EddyViscosity3D);
        assert_eq!(err.to_string(), "WALE::eddy_viscosity_3d: 尚未实现");
    }

    #[test]
    fn test_into_mh_error() {
        let err: MhError =
            SgsError::not_implemented("Smagorinsky", SgsOperation::GradEddyViscosity2D).into();
        assert!(err.is_not_implemented());
        assert!(err.to_string().contains("Smagorinsky::grad_eddy_viscosity_2d"));
    }

    #[test]
    fn test_or_abort_passes_values_through() {
        let ok: SgsResult<f64> = Ok(0.08);
        assert_eq!(ok.or_abort(), 0.08);
    }
}
