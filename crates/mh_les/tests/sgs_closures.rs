// crates/mh_les/tests/sgs_closures.rs
//! 亚格子闭合族的行为测试
//!
//! 覆盖空模型、Smagorinsky 公式性质、未实现操作的致命路径以及并发可重入性。

use glam::{DVec2, DVec3};
use mh_config::{SgsConfig, SgsModelKind};
use mh_les::sgs::{
    batch, create_sgs_model, ComponentHessian3D, NullSgsModel, OrAbort, PointState3D, SgsError,
    SgsModel, SgsOperation, SmagorinskyModel, VelocityGradient2D, VelocityGradient3D,
    VelocityHessian2D, VelocityHessian3D, WaleModel,
};
use rand::prelude::*;
use std::process::Command;

fn grad_2d(rng: &mut impl Rng) -> VelocityGradient2D {
    VelocityGradient2D::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    )
}

fn grad_3d(rng: &mut impl Rng) -> VelocityGradient3D {
    let mut row = || {
        [
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        ]
    };
    VelocityGradient3D::from_rows(row(), row(), row())
}

// ============================================================
// 空模型
// ============================================================

#[test]
fn test_null_model_returns_exact_zero() {
    let model = NullSgsModel::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let rho = rng.gen_range(0.0..10.0);
        let len = rng.gen_range(0.0..10.0);
        let wall = rng.gen_range(0.0..10.0);
        let g2 = grad_2d(&mut rng);
        let g3 = grad_3d(&mut rng);
        let h2 = VelocityHessian2D {
            d2u_dx2: rng.gen_range(-10.0..10.0),
            d2v_dy2: rng.gen_range(-10.0..10.0),
            ..Default::default()
        };
        let h3 = VelocityHessian3D {
            w: ComponentHessian3D {
                dxz: rng.gen_range(-10.0..10.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let grad_rho_2d = DVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let grad_rho_3d = DVec3::splat(rng.gen_range(-10.0..10.0));

        assert_eq!(model.eddy_viscosity_2d(rho, &g2, len, wall), Ok(0.0));
        assert_eq!(model.eddy_viscosity_3d(rho, &g3, len, wall), Ok(0.0));
        assert_eq!(
            model.grad_eddy_viscosity_2d(rho, grad_rho_2d, &g2, &h2, len, wall),
            Ok(DVec2::ZERO)
        );
        assert_eq!(
            model.grad_eddy_viscosity_3d(rho, grad_rho_3d, &g3, &h3, len, wall),
            Ok(DVec3::ZERO)
        );
    }
}

// ============================================================
// Smagorinsky
// ============================================================

#[test]
fn test_smagorinsky_reference_value() {
    // Δ = 0.1 · 2 · 1 = 0.2; S_11 = 1, S_22 = -1 → |S|² = 4 → μ_t = 0.04 · 2
    let model = SmagorinskyModel::new();
    let grad = VelocityGradient2D::new(1.0, 0.0, 0.0, -1.0);

    for wall in [0.0, 1e-3, 50.0] {
        let mu_t = model.eddy_viscosity_2d(1.0, &grad, 1.0, wall).unwrap();
        assert!((mu_t - 0.08).abs() < 1e-14, "mu_t = {mu_t}");
    }
}

#[test]
fn test_smagorinsky_non_negative() {
    let model = SmagorinskyModel::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let rho = rng.gen_range(0.0..10.0);
        let len = rng.gen_range(0.0..10.0);
        let mu_2d = model.eddy_viscosity_2d(rho, &grad_2d(&mut rng), len, 0.0).unwrap();
        let mu_3d = model.eddy_viscosity_3d(rho, &grad_3d(&mut rng), len, 0.0).unwrap();
        assert!(mu_2d >= 0.0);
        assert!(mu_3d >= 0.0);
    }
}

#[test]
fn test_smagorinsky_quadratic_in_length_scale() {
    let model = SmagorinskyModel::new();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let rho = rng.gen_range(0.0..10.0);
        let len = rng.gen_range(0.0..10.0);
        let g2 = grad_2d(&mut rng);
        let g3 = grad_3d(&mut rng);

        let base = model.eddy_viscosity_2d(rho, &g2, len, 0.0).unwrap();
        let doubled = model.eddy_viscosity_2d(rho, &g2, 2.0 * len, 0.0).unwrap();
        assert_eq!(doubled, 4.0 * base);

        let base = model.eddy_viscosity_3d(rho, &g3, len, 0.0).unwrap();
        let doubled = model.eddy_viscosity_3d(rho, &g3, 2.0 * len, 0.0).unwrap();
        assert_eq!(doubled, 4.0 * base);
    }
}

#[test]
fn test_smagorinsky_3d_consistent_with_2d() {
    let model = SmagorinskyModel::new();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let g2 = grad_2d(&mut rng);
        let g3 = VelocityGradient3D::from_2d(&g2);
        assert_eq!(g3.strain_rate_squared(), g2.strain_rate_squared());

        let rho = rng.gen_range(0.0..10.0);
        let len = rng.gen_range(0.0..10.0);
        assert_eq!(
            model.eddy_viscosity_3d(rho, &g3, len, 1.0),
            model.eddy_viscosity_2d(rho, &g2, len, 1.0)
        );
    }
}

#[test]
fn test_smagorinsky_gradient_is_unimplemented() {
    let model = SmagorinskyModel::new();
    let g2 = VelocityGradient2D::new(1.0, 0.0, 0.0, -1.0);
    let g3 = VelocityGradient3D::from_2d(&g2);

    let err = model
        .grad_eddy_viscosity_2d(1.0, DVec2::ZERO, &g2, &VelocityHessian2D::default(), 1.0, 0.0)
        .unwrap_err();
    assert_eq!(err, SgsError::not_implemented("Smagorinsky", SgsOperation::GradEddyViscosity2D));

    let err = model
        .grad_eddy_viscosity_3d(1.0, DVec3::ZERO, &g3, &VelocityHessian3D::default(), 1.0, 0.0)
        .unwrap_err();
    assert_eq!(err, SgsError::not_implemented("Smagorinsky", SgsOperation::GradEddyViscosity3D));
}

// ============================================================
// WALE
// ============================================================

#[test]
fn test_wale_every_operation_is_unimplemented() {
    let model = WaleModel::new();
    let g2 = VelocityGradient2D::new(0.1, 0.2, 0.3, 0.4);
    let g3 = VelocityGradient3D::from_2d(&g2);

    let errors = [
        model.eddy_viscosity_2d(1.0, &g2, 1.0, 0.5).unwrap_err(),
        model.eddy_viscosity_3d(1.0, &g3, 1.0, 0.5).unwrap_err(),
        model
            .grad_eddy_viscosity_2d(1.0, DVec2::ONE, &g2, &VelocityHessian2D::default(), 1.0, 0.5)
            .unwrap_err(),
        model
            .grad_eddy_viscosity_3d(1.0, DVec3::ONE, &g3, &VelocityHessian3D::default(), 1.0, 0.5)
            .unwrap_err(),
    ];

    for (err, op) in errors.iter().zip(SgsOperation::ALL) {
        assert_eq!(err.model(), "WALE");
        assert_eq!(err.operation(), op);
    }
}

#[test]
fn test_or_abort_terminates_process() {
    // 子进程中走致命路径，父进程检查退出码与诊断输出
    if std::env::var_os("MH_LES_ABORT_CHILD").is_some() {
        let g2 = VelocityGradient2D::default();
        let _ = WaleModel::new().eddy_viscosity_2d(1.0, &g2, 1.0, 0.0).or_abort();
        unreachable!("or_abort 必须终止进程");
    }

    let exe = std::env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["test_or_abort_terminates_process", "--exact", "--nocapture"])
        .env("MH_LES_ABORT_CHILD", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WALE::eddy_viscosity_2d"), "stderr: {stderr}");
}

// ============================================================
// 工厂与并发
// ============================================================

#[test]
fn test_model_from_json_config() {
    let config = SgsConfig::from_json_str(r#"{ "model": "smagorinsky" }"#).unwrap();
    let model = create_sgs_model(&config).unwrap();
    let grad = VelocityGradient2D::new(1.0, 0.0, 0.0, -1.0);
    let mu_t = model.eddy_viscosity_2d(1.0, &grad, 1.0, 0.0).unwrap();
    assert!((mu_t - 0.08).abs() < 1e-14);

    let json = serde_json::to_string(&SgsConfig::with_model(SgsModelKind::Wale)).unwrap();
    let model = create_sgs_model(&SgsConfig::from_json_str(&json).unwrap()).unwrap();
    assert!(SgsOperation::ALL.iter().all(|&op| !model.supports(op)));
}

#[test]
fn test_shared_instance_is_reentrant_across_threads() {
    let model: Box<dyn SgsModel> =
        create_sgs_model(&SgsConfig::with_model(SgsModelKind::Smagorinsky)).unwrap();
    let model = model.as_ref();

    let mut rng = StdRng::seed_from_u64(2024);
    let inputs: Vec<(f64, VelocityGradient3D, f64)> = (0..4000)
        .map(|_| (rng.gen_range(0.0..10.0), grad_3d(&mut rng), rng.gen_range(0.0..10.0)))
        .collect();

    let serial: Vec<f64> = inputs
        .iter()
        .map(|(rho, g, len)| model.eddy_viscosity_3d(*rho, g, *len, 0.0).unwrap())
        .collect();

    // 多个线程以不同顺序求值同一个实例
    let results: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let inputs = &inputs;
                s.spawn(move || {
                    let mut out = vec![0.0; inputs.len()];
                    let order: Vec<usize> = if t % 2 == 0 {
                        (0..inputs.len()).collect()
                    } else {
                        (0..inputs.len()).rev().collect()
                    };
                    for i in order {
                        let (rho, g, len) = &inputs[i];
                        out[i] = model.eddy_viscosity_3d(*rho, g, *len, 0.0).unwrap();
                    }
                    out
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for out in &results {
        assert_eq!(out, &serial);
    }

    // rayon 批量路径同样逐位一致
    let points: Vec<PointState3D> = inputs
        .iter()
        .map(|(rho, g, len)| PointState3D {
            rho: *rho,
            grad_vel: *g,
            len_scale: *len,
            ..Default::default()
        })
        .collect();
    let mut field = vec![0.0; points.len()];
    batch::eddy_viscosity_field_3d(model, &points, &mut field).unwrap();
    assert_eq!(field, serial);
}
