// crates/mh_les/src/lib.rs

//! MariHydro LES 亚格子模型
//!
//! 求解器 LES 模式下的可插拔亚格子 (SGS) 湍流闭合。
//! 网格遍历、梯度重构、时间推进均由外部负责，本 crate 只消费
//! 已算好的局部导数，返回涡粘性及其梯度。
//!
//! - [`sgs`]: 闭合 trait、模型实现、工厂与批量求值

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sgs;

// 重导出常用类型
pub use sgs::{
    create_sgs_model, NullSgsModel, OrAbort, SgsError, SgsModel, SgsOperation, SgsResult,
    SmagorinskyModel, WaleModel,
};
