// crates/mh_les/src/sgs/wale.rs

//! WALE (Wall-Adapting Local Eddy-viscosity) 亚格子模型
//!
//! 目前只有接口：四个操作的签名已固定，物理公式尚未给出。
//! 任何求值都返回 [`SgsError::NotImplemented`]，调用方必须按致命错误处理。

use glam::{DVec2, DVec3};
use mh_foundation::Scalar;

use super::error::{SgsError, SgsResult};
use super::inputs::{VelocityGradient2D, VelocityGradient3D, VelocityHessian2D, VelocityHessian3D};
use super::traits::{SgsModel, SgsOperation};

/// WALE 模型（占位）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaleModel;

impl WaleModel {
    /// 模型名称
    pub const NAME: &'static str = "WALE";

    /// 创建模型
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn not_implemented<T>(op: SgsOperation) -> SgsResult<T> {
        Err(SgsError::not_implemented(Self::NAME, op))
    }
}

impl SgsModel for WaleModel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supports(&self, _op: SgsOperation) -> bool {
        false
    }

    fn eddy_viscosity_2d(
        &self,
        _rho: Scalar,
        _grad_vel: &VelocityGradient2D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Self::not_implemented(SgsOperation::EddyViscosity2D)
    }

    fn eddy_viscosity_3d(
        &self,
        _rho: Scalar,
        _grad_vel: &VelocityGradient3D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Self::not_implemented(SgsOperation::EddyViscosity3D)
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
        Self::not_implemented(SgsOperation::GradEddyViscosity2D)
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
        Self::not_implemented(SgsOperation::GradEddyViscosity3D)
    }
}
