//! # Motion Clip - 动作片段数据层
//!
//! 提供动作片段（motion clip）的数据模型、本地容器格式和加载流程：
//!
//! - [`MotionClip`] - 已校验、已标定的内存中动作片段
//! - [`ClipFile`] - 磁盘容器格式（魔数 + 版本 + bincode）
//! - [`JointRemap`] - 关节顺序重排（USD -> URDF 等约定转换）
//! - [`load_clip`] - 完整加载流程：读取 -> 重排 -> 标定偏移
//!
//! # 加载顺序约定
//!
//! 关节重排（如果请求）必须在标定偏移减法**之前**应用——偏移量以目标
//! 关节约定表达。顺序颠倒会产生错误的姿态，详见 [`load_clip`]。

pub mod clip;
pub mod error;
pub mod loader;
pub mod remap;

pub use clip::MotionClip;
pub use error::{ClipError, LoadError, SaveError};
pub use loader::{ClipFile, LoadOptions, load_clip};
pub use remap::JointRemap;
