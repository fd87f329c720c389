// crates/mh_foundation/src/scalar.rs

//! 统一标量类型
//!
//! LES 闭合在每个网格点、每次迭代都会被调用，
//! 所有物理量统一使用 [`Scalar`]（f64）。
//!
//! ```
//! use mh_foundation::scalar::{all_finite, Scalar};
//!
//! let grad: [Scalar; 4] = [1.0, 0.0, 0.0, -1.0];
//! assert!(all_finite(&grad));
//! ```

/// 计算用标量类型
pub type Scalar = f64;

/// 判断一组标量是否全部有限
#[inline]
pub fn all_finite(values: &[Scalar]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_finite() {
        assert!(all_finite(&[0.0, 1.0, -3.5]));
        assert!(!all_finite(&[0.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
        assert!(all_finite(&[]));
    }
}
