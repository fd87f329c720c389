// crates/mh_les/src/sgs/smagorinsky.rs

//! 常系数 Smagorinsky-Lilly 亚格子模型
//!
//! # Smagorinsky 模型
//!
//! ```text
//! μ_t = ρ · (C_s · Δ)² · |S|
//! ```
//!
//! 其中：
//! - C_s 是 Smagorinsky 常数（默认 0.1）
//! - Δ = mult · lenScale 是滤波宽度，mult 默认 2.0
//! - |S| = √(2 S_ij S_ij) 是应变率张量的模
//!
//! ρ ≥ 0 且 lenScale ≥ 0 时结果非负。
//!
//! 涡粘性梯度尚无推导，两个梯度操作返回
//! [`SgsError::NotImplemented`](super::SgsError::NotImplemented)。

use glam::{DVec2, DVec3};
use mh_foundation::{MhError, MhResult, Scalar};

use super::error::{SgsError, SgsResult};
use super::inputs::{VelocityGradient2D, VelocityGradient3D, VelocityHessian2D, VelocityHessian3D};
use super::traits::{SgsModel, SgsOperation};

/// Smagorinsky 常数的默认值
pub const DEFAULT_SMAGORINSKY_CONSTANT: Scalar = 0.1;

/// 滤波宽度倍数的默认值
pub const DEFAULT_FILTER_MULTIPLIER: Scalar = 2.0;

/// Smagorinsky 模型
///
/// 常数在构造时确定，之后只读。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmagorinskyModel {
    const_smag: Scalar,
    filter_mult: Scalar,
}

impl Default for SmagorinskyModel {
    fn default() -> Self {
        Self {
            const_smag: DEFAULT_SMAGORINSKY_CONSTANT,
            filter_mult: DEFAULT_FILTER_MULTIPLIER,
        }
    }
}

impl SmagorinskyModel {
    /// 模型名称
    pub const NAME: &'static str = "Smagorinsky";

    /// 使用默认常数创建
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定常数创建
    ///
    /// 两个常数都必须是非负有限数。
    pub fn with_constants(const_smag: Scalar, filter_mult: Scalar) -> MhResult<Self> {
        MhError::check_finite("const_smag", const_smag)?;
        MhError::check_finite("filter_mult", filter_mult)?;
        MhError::check_range("const_smag", const_smag, 0.0, Scalar::MAX)?;
        MhError::check_range("filter_mult", filter_mult, 0.0, Scalar::MAX)?;
        Ok(Self {
            const_smag,
            filter_mult,
        })
    }

    /// Smagorinsky 常数 C_s
    #[inline]
    pub fn const_smag(&self) -> Scalar {
        self.const_smag
    }

    /// 滤波宽度倍数
    #[inline]
    pub fn filter_mult(&self) -> Scalar {
        self.filter_mult
    }

    /// C_s · Δ
    #[inline]
    fn filter_width(&self, len_scale: Scalar) -> Scalar {
        self.const_smag * self.filter_mult * len_scale
    }

    #[inline]
    fn dynamic_viscosity(&self, rho: Scalar, len_scale: Scalar, strain_rate2: Scalar) -> Scalar {
        let cs_delta = self.filter_width(len_scale);
        rho * cs_delta * cs_delta * strain_rate2.sqrt()
    }
}

impl SgsModel for SmagorinskyModel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supports(&self, op: SgsOperation) -> bool {
        !op.is_gradient()
    }

    fn eddy_viscosity_2d(
        &self,
        rho: Scalar,
        grad_vel: &VelocityGradient2D,
        len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Ok(self.dynamic_viscosity(rho, len_scale, grad_vel.strain_rate_squared()))
    }

    fn eddy_viscosity_3d(
        &self,
        rho: Scalar,
        grad_vel: &VelocityGradient3D,
        len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Ok(self.dynamic_viscosity(rho, len_scale, grad_vel.strain_rate_squared()))
    }

    fn grad_eddy_viscosity_2d(
        &self,
        _rho: Scalar,
        _grad_rho: DVec2,
        _grad_vel: &VelocityGradient2D,
        _hessian: &VelocityHessian2D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<DVec2> {
        Err(SgsError::not_implemented(Self::NAME, SgsOperation::GradEddyViscosity2D))
    }

    fn grad_eddy_viscosity_3d(
        &self,
        _rho: Scalar,
        _grad_rho: DVec3,
        _grad_vel: &VelocityGradient3D,
        _hessian: &VelocityHessian3D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<DVec3> {
        Err(SgsError::not_implemented(Self::NAME, SgsOperation::GradEddyViscosity3D))
    }
}
