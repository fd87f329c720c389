// crates/mh_les/src/sgs/batch.rs

//! 批量逐点求值
//!
//! 在一组求值点上并行调用同一个模型实例，结果写入调用方预分配的切片。
//! 模型实例只读，点与点之间没有共享可变状态，因此无需加锁。
//!
//! 任一点返回 [`SgsError`](super::SgsError) 时整体返回错误，
//! 输出切片中已写入的部分不得被当作有效结果使用。

use glam::{DVec2, DVec3};
use mh_foundation::{MhError, MhResult, Scalar};
use rayon::prelude::*;

use super::error::{SgsError, SgsResult};
use super::inputs::{PointState2D, PointState3D};
use super::traits::SgsModel;

/// 小于该点数时串行求值
const PARALLEL_THRESHOLD: usize = 1024;

fn run<P, T, F>(points: &[P], out: &mut [T], name: &'static str, eval: F) -> MhResult<()>
where
    P: Sync,
    T: Send,
    F: Fn(&P) -> SgsResult<T> + Sync,
{
    MhError::check_size(name, points.len(), out.len())?;

    if points.len() < PARALLEL_THRESHOLD {
        for (p, o) in points.iter().zip(out.iter_mut()) {
            *o = eval(p)?;
        }
    } else {
        points
            .par_iter()
            .zip(out.par_iter_mut())
            .try_for_each(|(p, o)| {
                *o = eval(p)?;
                Ok::<(), SgsError>(())
            })?;
    }
    Ok(())
}

/// 2D 涡粘性场
pub fn eddy_viscosity_field_2d(
    model: &dyn SgsModel,
    points: &[PointState2D],
    out: &mut [Scalar],
) -> MhResult<()> {
    log::debug!("{} eddy_viscosity_2d: {} 点", model.name(), points.len());
    run(points, out, "eddy_viscosity_2d", |p| {
        model.eddy_viscosity_2d(p.rho, &p.grad_vel, p.len_scale, p.dist_to_wall)
    })
}

/// 3D 涡粘性场
pub fn eddy_viscosity_field_3d(
    model: &dyn SgsModel,
    points: &[PointState3D],
    out: &mut [Scalar],
) -> MhResult<()> {
    log::debug!("{} eddy_viscosity_3d: {} 点", model.name(), points.len());
    run(points, out, "eddy_viscosity_3d", |p| {
        model.eddy_viscosity_3d(p.rho, &p.grad_vel, p.len_scale, p.dist_to_wall)
    })
}

/// 2D 涡粘性梯度场
pub fn grad_eddy_viscosity_field_2d(
    model: &dyn SgsModel,
    points: &[PointState2D],
    out: &mut [DVec2],
) -> MhResult<()> {
    log::debug!("{} grad_eddy_viscosity_2d: {} 点", model.name(), points.len());
    run(points, out, "grad_eddy_viscosity_2d", |p| {
        model.grad_eddy_viscosity_2d(
            p.rho,
            p.grad_rho,
            &p.grad_vel,
            &p.hessian,
            p.len_scale,
            p.dist_to_wall,
        )
    })
}

/// 3D 涡粘性梯度场
pub fn grad_eddy_viscosity_field_3d(
    model: &dyn SgsModel,
    points: &[PointState3D],
    out: &mut [DVec3],
) -> MhResult<()> {
    log::debug!("{} grad_eddy_viscosity_3d: {} 点", model.name(), points.len());
    run(points, out, "grad_eddy_viscosity_3d", |p| {
        model.grad_eddy_viscosity_3d(
            p.rho,
            p.grad_rho,
            &p.grad_vel,
            &p.hessian,
            p.len_scale,
            p.dist_to_wall,
        )
    })
}
