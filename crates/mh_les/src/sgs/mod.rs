// crates/mh_les/src/sgs/mod.rs

//! LES 亚格子尺度 (SGS) 湍流闭合
//!
//! 给定某网格点的局部解析流场（密度及其梯度、速度梯度、可选的二阶导数），
//! 返回涡粘性 μ_t，以及（如模型支持）μ_t 的空间梯度。
//!
//! | 模型 | 涡粘性 2D/3D | 梯度 2D/3D |
//! |------|--------------|------------|
//! | [`NullSgsModel`] | 0 | 0 |
//! | [`SmagorinskyModel`] | ✓ | 未实现 |
//! | [`WaleModel`] | 未实现 | 未实现 |
//!
//! "未实现"以 [`SgsError::NotImplemented`] 返回，生产代码应当用
//! [`OrAbort::or_abort`] 终止进程，不得用默认值替代。
//!
//! # 使用指南
//!
//! ```
//! use mh_config::{ConfigError, SgsConfig, SgsModelKind};
//! use mh_les::sgs::{create_sgs_model, OrAbort, VelocityGradient2D};
//!
//! let model = create_sgs_model(&SgsConfig::with_model(SgsModelKind::Smagorinsky)).unwrap();
//! let grad = VelocityGradient2D::new(1.0, 0.0, 0.0, -1.0);
//! let mu_t = model.eddy_viscosity_2d(1.0, &grad, 1.0, 0.0).or_abort();
//! assert!((mu_t - 0.08).abs() < 1e-14);
//! ```

pub mod batch;
mod error;
pub mod inputs;
mod null;
mod smagorinsky;
pub mod traits;
mod wale;

use mh_config::{ConfigError, SgsConfig, SgsModelKind};
use mh_foundation::{MhError, MhResult};

pub use error::{OrAbort, SgsError, SgsResult};
pub use inputs::{
    ComponentHessian3D, PointState2D, PointState3D, VelocityGradient2D, VelocityGradient3D,
    VelocityHessian2D, VelocityHessian3D,
};
pub use null::NullSgsModel;
pub use smagorinsky::{
    SmagorinskyModel, DEFAULT_FILTER_MULTIPLIER, DEFAULT_SMAGORINSKY_CONSTANT,
};
pub use traits::{SgsModel, SgsOperation};
pub use wale::WaleModel;

/// 根据配置创建亚格子模型
///
/// 求解器初始化时调用一次，返回的实例在整个计算过程中复用。
pub fn create_sgs_model(config: &SgsConfig) -> MhResult<Box<dyn SgsModel>> {
    config.validate().map_err(config_error)?;

    let model: Box<dyn SgsModel> = match config.model {
        SgsModelKind::None => Box::new(NullSgsModel::new()),
        SgsModelKind::Smagorinsky => {
            let model = SmagorinskyModel::with_constants(
                config.smagorinsky_constant,
                config.filter_width_multiplier,
            )?;
            log::info!(
                "SGS 模型: {} (C_s={}, filter_mult={})",
                model.name(),
                model.const_smag(),
                model.filter_mult()
            );
            return Ok(Box::new(model));
        }
        SgsModelKind::Wale => {
            log::warn!("WALE 亚格子模型尚无物理公式，任何求值都会终止计算");
            Box::new(WaleModel::new())
        }
    };

    log::info!("SGS 模型: {}", model.name());
    Ok(model)
}

fn config_error(err: ConfigError) -> MhError {
    match err {
        ConfigError::InvalidValue { key, value, reason } => {
            MhError::invalid_config(format!("sgs.{key}"), value, reason)
        }
        other => MhError::invalid_config("sgs", "", other.to_string()),
    }
}
