//! 回放配置
//!
//! 控制频率和启动时序的两段稳定等待。执行器使能后短时间内反馈不可靠，
//! 必须等待有界稳定窗口后才能接受轨迹指令，因此两段等待不可省略。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 回放调度器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// 控制频率（Hz）
    ///
    /// 默认 200 Hz（5 ms 周期）。
    pub control_rate_hz: u32,

    /// 使能后的稳定等待（毫秒）
    pub enable_settle_ms: u64,

    /// 归位后的稳定等待（毫秒）
    pub reset_settle_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            control_rate_hz: 200,
            enable_settle_ms: 1000,
            reset_settle_ms: 1000,
        }
    }
}

impl PlayerConfig {
    /// 控制周期
    pub fn control_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.control_rate_hz as f64)
    }

    /// 使能后的稳定等待
    pub fn enable_settle(&self) -> Duration {
        Duration::from_millis(self.enable_settle_ms)
    }

    /// 归位后的稳定等待
    pub fn reset_settle(&self) -> Duration {
        Duration::from_millis(self.reset_settle_ms)
    }
}
