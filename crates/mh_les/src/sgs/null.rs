// crates/mh_les/src/sgs/null.rs

//! 空闭合：LES 关闭亚格子模型时使用

use super::traits::SgsModel;

/// 空亚格子模型
///
/// 直接继承 [`SgsModel`] 的默认实现，任意输入下涡粘性及其梯度均为 0。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSgsModel;

impl NullSgsModel {
    /// 创建空模型
    pub fn new() -> Self {
        Self
    }
}

impl SgsModel for NullSgsModel {
    fn name(&self) -> &'static str {
        "None"
    }
}
