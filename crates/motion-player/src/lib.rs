//! # Motion Player - 动作回放调度器
//!
//! 将预录制的动作片段以固定实时控制频率驱动到关节执行器上，与片段
//! 原始采样率和用户选择的回放速度解耦。
//!
//! # 架构
//!
//! - [`Actuator`] - 执行接口能力 trait（使能、归位、下发指令、失能）
//! - [`PlaybackSession`] - 一次性回放会话（状态机 + 帧调度）
//! - [`SessionBuilder`] - 构造会话并执行启动时序
//! - [`run`] - 软实时控制循环（spin_sleep 定时 + 外部取消）
//!
//! # 调度模型
//!
//! 控制循环以固定频率（默认 200 Hz）运行，片段采样率可能远低于它
//! （如 30 Hz）。调度器按 `step_ratio = round(control_rate / (sample_rate
//! * speed))` 把一帧的指令保持 `step_ratio` 个控制节拍——保持并步进，
//! 不做帧间插值。速度倍率只会放慢回放（重复更多节拍），钳位在
//! `[0.1, 1.0]`。
//!
//! # 生命周期
//!
//! 会话一次性使用：构造 -> 运行 -> 丢弃。`Finished` / `Stopped` 为终态，
//! 之后不再处理任何节拍。

pub mod actuator;
pub mod config;
pub mod error;
pub mod runner;
pub mod session;

pub use actuator::Actuator;
pub use config::PlayerConfig;
pub use error::PlayerError;
pub use runner::run;
pub use session::{PlaybackSession, PlaybackState, SessionBuilder};
