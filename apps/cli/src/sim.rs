//! 仿真执行接口
//!
//! 真实硬件绑定是外部协作者；CLI 自带一个把所有调用记入日志的仿真
//! 执行器，用于干跑片段、验证时序。

use motion_player::Actuator;
use std::convert::Infallible;
use tracing::{debug, info};

/// 日志型仿真执行器
#[derive(Debug, Default)]
pub struct SimActuator {
    commands_applied: u64,
}

impl SimActuator {
    pub fn new() -> Self {
        SimActuator::default()
    }

    /// 已下发的节拍指令数
    pub fn commands_applied(&self) -> u64 {
        self.commands_applied
    }
}

impl Actuator for SimActuator {
    type Error = Infallible;

    fn enable_all(&mut self) -> Result<(), Self::Error> {
        info!("sim: enable all actuators");
        Ok(())
    }

    fn reset_to_pose(&mut self, pose: &[f64]) -> Result<(), Self::Error> {
        info!("sim: reset {} joints to start pose", pose.len());
        Ok(())
    }

    fn apply_command(&mut self, positions: &[f64]) -> Result<(), Self::Error> {
        self.commands_applied += 1;
        debug!("sim: apply command #{}: {:?}", self.commands_applied, positions);
        Ok(())
    }

    fn disable_all(&mut self) -> Result<(), Self::Error> {
        info!(
            "sim: disable all actuators ({} commands applied)",
            self.commands_applied
        );
        Ok(())
    }
}
