// crates/mh_les/src/sgs/traits.rs

//! 亚格子闭合 trait
//!
//! 求解器在初始化时选定一个模型实例，之后在每个网格点的通量/残差
//! 计算中通过 `&dyn SgsModel` 调用。实例构造后只读，可被多个线程
//! 同时调用（`Send + Sync`）。

use glam::{DVec2, DVec3};
use mh_foundation::Scalar;
use std::fmt;

use super::error::SgsResult;
use super::inputs::{VelocityGradient2D, VelocityGradient3D, VelocityHessian2D, VelocityHessian3D};

/// 闭合模型对外提供的四个操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgsOperation {
    /// 2D 涡粘性
    EddyViscosity2D,
    /// 3D 涡粘性
    EddyViscosity3D,
    /// 2D 涡粘性梯度
    GradEddyViscosity2D,
    /// 3D 涡粘性梯度
    GradEddyViscosity3D,
}

impl SgsOperation {
    /// 全部操作
    pub const ALL: [SgsOperation; 4] = [
        Self::EddyViscosity2D,
        Self::EddyViscosity3D,
        Self::GradEddyViscosity2D,
        Self::GradEddyViscosity3D,
    ];

    /// 操作名称（用于诊断输出）
    pub fn name(&self) -> &'static str {
        match self {
            Self::EddyViscosity2D => "eddy_viscosity_2d",
            Self::EddyViscosity3D => "eddy_viscosity_3d",
            Self::GradEddyViscosity2D => "grad_eddy_viscosity_2d",
            Self::GradEddyViscosity3D => "grad_eddy_viscosity_3d",
        }
    }

    /// 是否为梯度操作
    #[inline]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::GradEddyViscosity2D | Self::GradEddyViscosity3D)
    }
}

impl fmt::Display for SgsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 亚格子尺度湍流闭合模型
///
/// 默认实现即"关闭闭合"：所有操作返回精确的 0。新模型在此基础上
/// 覆盖自己有公式的操作；尚无公式的操作必须返回
/// [`SgsError::NotImplemented`](super::SgsError::NotImplemented)，
/// 并在 [`supports`](Self::supports) 中声明不支持。
///
/// # 参数约定
///
/// - `rho`: 密度
/// - `len_scale`: 局部网格/滤波宽度，≥ 0
/// - `dist_to_wall`: 到最近壁面的距离
///
/// # 实现者
///
/// - [`NullSgsModel`](super::NullSgsModel)
/// - [`SmagorinskyModel`](super::SmagorinskyModel)
/// - [`WaleModel`](super::WaleModel)
pub trait SgsModel: Send + Sync + fmt::Debug {
    /// 模型名称
    fn name(&self) -> &'static str;

    /// 该操作是否有实现
    ///
    /// 返回 `false` 的操作调用时必然得到 `Err`。
    fn supports(&self, _op: SgsOperation) -> bool {
        true
    }

    /// 2D 涡粘性 μ_t
    fn eddy_viscosity_2d(
        &self,
        _rho: Scalar,
        _grad_vel: &VelocityGradient2D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Ok(0.0)
    }

    /// 3D 涡粘性 μ_t
    fn eddy_viscosity_3d(
        &self,
        _rho: Scalar,
        _grad_vel: &VelocityGradient3D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<Scalar> {
        Ok(0.0)
    }

    /// 2D 涡粘性梯度 (∂μ_t/∂x, ∂μ_t/∂y)
    fn grad_eddy_viscosity_2d(
        &self,
        _rho: Scalar,
        _grad_rho: DVec2,
        _grad_vel: &VelocityGradient2D,
        _hessian: &VelocityHessian2D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<DVec2> {
        Ok(DVec2::ZERO)
    }

    /// 3D 涡粘性梯度 (∂μ_t/∂x, ∂μ_t/∂y, ∂μ_t/∂z)
    fn grad_eddy_viscosity_3d(
        &self,
        _rho: Scalar,
        _grad_rho: DVec3,
        _grad_vel: &VelocityGradient3D,
        _hessian: &VelocityHessian3D,
        _len_scale: Scalar,
        _dist_to_wall: Scalar,
    ) -> SgsResult<DVec3> {
        Ok(DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Bare;

    impl SgsModel for Bare {
        fn name(&self) -> &'static str {
            "Bare"
        }
    }

    #[test]
    fn test_defaults_are_exact_zero() {
        let model = Bare;
        let grad = VelocityGradient2D::new(3.0, -1.0, 2.0, 5.0);
        assert_eq!(model.eddy_viscosity_2d(1.2, &grad, 0.5, 0.1), Ok(0.0));

        let grad3 = VelocityGradient3D::from_2d(&grad);
        assert_eq!(model.eddy_viscosity_3d(1.2, &grad3, 0.5, 0.1), Ok(0.0));

        let g = model
            .grad_eddy_viscosity_3d(1.2, DVec3::ONE, &grad3, &VelocityHessian3D::default(), 0.5, 0.1)
            .unwrap();
        assert_eq!(g, DVec3::ZERO);
        assert!(SgsOperation::ALL.iter().all(|&op| model.supports(op)));
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(SgsOperation::GradEddyViscosity3D.to_string(), "grad_eddy_viscosity_3d");
        assert!(SgsOperation::GradEddyViscosity2D.is_gradient());
        assert!(!SgsOperation::EddyViscosity2D.is_gradient());
    }
}
