// crates/mh_les/src/sgs/inputs.rs

//! 逐点求值输入
//!
//! 导数由外部梯度重构给出，这里只是按值传递的定长聚合，全部 `Copy`，
//! 不在堆上分配。
//!
//! # 应变率张量
//!
//! ```text
//! S_ij = (∂u_i/∂x_j + ∂u_j/∂x_i) / 2
//! |S|² = 2 S_ij S_ij
//! ```

use glam::{DVec2, DVec3};
use mh_foundation::scalar::{all_finite, Scalar};

/// 2D 速度梯度张量
///
/// ```text
/// S = [S_11  S_12]   [∂u/∂x              (∂u/∂y+∂v/∂x)/2]
///     [S_21  S_22] = [(∂u/∂y+∂v/∂x)/2    ∂v/∂y          ]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityGradient2D {
    /// ∂u/∂x
    pub du_dx: Scalar,
    /// ∂u/∂y
    pub du_dy: Scalar,
    /// ∂v/∂x
    pub dv_dx: Scalar,
    /// ∂v/∂y
    pub dv_dy: Scalar,
}

impl VelocityGradient2D {
    /// 创建新的速度梯度
    #[inline]
    pub fn new(du_dx: Scalar, du_dy: Scalar, dv_dx: Scalar, dv_dy: Scalar) -> Self {
        Self {
            du_dx,
            du_dy,
            dv_dx,
            dv_dy,
        }
    }

    /// 应变率模的平方
    ///
    /// |S|² = 2·(S_11² + S_22² + 2·S_12²)
    #[inline]
    pub fn strain_rate_squared(&self) -> Scalar {
        let s12 = 0.5 * (self.du_dy + self.dv_dx);
        2.0 * (self.du_dx * self.du_dx + self.dv_dy * self.dv_dy + 2.0 * s12 * s12)
    }

    /// 应变率张量的模 |S|
    #[inline]
    pub fn strain_rate_magnitude(&self) -> Scalar {
        self.strain_rate_squared().sqrt()
    }

    /// 涡度（z 分量）
    ///
    /// ω_z = ∂v/∂x - ∂u/∂y
    #[inline]
    pub fn vorticity(&self) -> Scalar {
        self.dv_dx - self.du_dy
    }

    /// 散度
    #[inline]
    pub fn divergence(&self) -> Scalar {
        self.du_dx + self.dv_dy
    }

    /// 检查梯度是否有效
    #[inline]
    pub fn is_valid(&self) -> bool {
        all_finite(&[self.du_dx, self.du_dy, self.dv_dx, self.dv_dy])
    }
}

/// 3D 速度梯度张量（行 = 速度分量，列 = 方向）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityGradient3D {
    /// ∂u/∂x
    pub du_dx: Scalar,
    /// ∂u/∂y
    pub du_dy: Scalar,
    /// ∂u/∂z
    pub du_dz: Scalar,
    /// ∂v/∂x
    pub dv_dx: Scalar,
    /// ∂v/∂y
    pub dv_dy: Scalar,
    /// ∂v/∂z
    pub dv_dz: Scalar,
    /// ∂w/∂x
    pub dw_dx: Scalar,
    /// ∂w/∂y
    pub dw_dy: Scalar,
    /// ∂w/∂z
    pub dw_dz: Scalar,
}

impl VelocityGradient3D {
    /// 按行（u, v, w）给出 3×3 梯度
    #[inline]
    pub fn from_rows(du: [Scalar; 3], dv: [Scalar; 3], dw: [Scalar; 3]) -> Self {
        Self {
            du_dx: du[0],
            du_dy: du[1],
            du_dz: du[2],
            dv_dx: dv[0],
            dv_dy: dv[1],
            dv_dz: dv[2],
            dw_dx: dw[0],
            dw_dy: dw[1],
            dw_dz: dw[2],
        }
    }

    /// 由 2D 梯度扩展，z 方向导数及 w 全部为零
    #[inline]
    pub fn from_2d(grad: &VelocityGradient2D) -> Self {
        Self {
            du_dx: grad.du_dx,
            du_dy: grad.du_dy,
            dv_dx: grad.dv_dx,
            dv_dy: grad.dv_dy,
            ..Self::default()
        }
    }

    /// 应变率模的平方
    ///
    /// |S|² = 2·(S_11² + S_22² + S_33² + 2·(S_12² + S_13² + S_23²))
    #[inline]
    pub fn strain_rate_squared(&self) -> Scalar {
        let s12 = 0.5 * (self.du_dy + self.dv_dx);
        let s13 = 0.5 * (self.du_dz + self.dw_dx);
        let s23 = 0.5 * (self.dv_dz + self.dw_dy);

        2.0 * (self.du_dx * self.du_dx
            + self.dv_dy * self.dv_dy
            + self.dw_dz * self.dw_dz
            + 2.0 * (s12 * s12 + s13 * s13 + s23 * s23))
    }

    /// 应变率张量的模 |S|
    #[inline]
    pub fn strain_rate_magnitude(&self) -> Scalar {
        self.strain_rate_squared().sqrt()
    }

    /// 涡度矢量 ω = ∇ × u
    #[inline]
    pub fn vorticity(&self) -> DVec3 {
        DVec3::new(
            self.dw_dy - self.dv_dz,
            self.du_dz - self.dw_dx,
            self.dv_dx - self.du_dy,
        )
    }

    /// 散度
    #[inline]
    pub fn divergence(&self) -> Scalar {
        self.du_dx + self.dv_dy + self.dw_dz
    }

    /// 检查梯度是否有效
    #[inline]
    pub fn is_valid(&self) -> bool {
        all_finite(&[
            self.du_dx, self.du_dy, self.du_dz, self.dv_dx, self.dv_dy, self.dv_dz, self.dw_dx,
            self.dw_dy, self.dw_dz,
        ])
    }
}

/// 2D 速度二阶导数
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityHessian2D {
    /// ∂²u/∂x²
    pub d2u_dx2: Scalar,
    /// ∂²u/∂y²
    pub d2u_dy2: Scalar,
    /// ∂²u/∂x∂y
    pub d2u_dxdy: Scalar,
    /// ∂²v/∂x²
    pub d2v_dx2: Scalar,
    /// ∂²v/∂y²
    pub d2v_dy2: Scalar,
    /// ∂²v/∂x∂y
    pub d2v_dxdy: Scalar,
}

/// 单个速度分量的 3D 二阶导数
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComponentHessian3D {
    /// ∂²/∂x²
    pub dxx: Scalar,
    /// ∂²/∂y²
    pub dyy: Scalar,
    /// ∂²/∂z²
    pub dzz: Scalar,
    /// ∂²/∂x∂y
    pub dxy: Scalar,
    /// ∂²/∂x∂z
    pub dxz: Scalar,
    /// ∂²/∂y∂z
    pub dyz: Scalar,
}

/// 3D 速度二阶导数（u, v, w 各 6 个独立分量）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityHessian3D {
    /// u 的二阶导数
    pub u: ComponentHessian3D,
    /// v 的二阶导数
    pub v: ComponentHessian3D,
    /// w 的二阶导数
    pub w: ComponentHessian3D,
}

/// 2D 求值点：一次调用所需的全部局部量
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointState2D {
    /// 密度 ρ
    pub rho: Scalar,
    /// 密度梯度 ∇ρ
    pub grad_rho: DVec2,
    /// 速度梯度
    pub grad_vel: VelocityGradient2D,
    /// 速度二阶导数
    pub hessian: VelocityHessian2D,
    /// 特征长度（网格/滤波宽度）
    pub len_scale: Scalar,
    /// 到最近壁面的距离
    pub dist_to_wall: Scalar,
}

/// 3D 求值点
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointState3D {
    /// 密度 ρ
    pub rho: Scalar,
    /// 密度梯度 ∇ρ
    pub grad_rho: DVec3,
    /// 速度梯度
    pub grad_vel: VelocityGradient3D,
    /// 速度二阶导数
    pub hessian: VelocityHessian3D,
    /// 特征长度（网格/滤波宽度）
    pub len_scale: Scalar,
    /// 到最近壁面的距离
    pub dist_to_wall: Scalar,
}
