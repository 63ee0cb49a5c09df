//! Mock 执行接口
//!
//! 记录每次调用供断言，支持按节拍注入失败。

use motion_player::Actuator;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("mock actuator fault: {0}")]
pub struct MockFault(pub &'static str);

/// 调用记录（测试侧通过共享句柄读取）
#[derive(Debug, Default)]
pub struct ActuatorLog {
    pub enable_calls: usize,
    pub reset_poses: Vec<Vec<f64>>,
    pub commands: Vec<Vec<f64>>,
    pub disable_calls: usize,
}

/// 记录型 mock 执行器
#[derive(Debug)]
pub struct MockActuator {
    log: Arc<Mutex<ActuatorLog>>,
    fail_enable: bool,
    fail_reset: bool,
    /// 第 N 次 apply_command 调用（从 0 计）时失败
    fail_apply_at: Option<usize>,
}

impl MockActuator {
    pub fn new() -> (Self, Arc<Mutex<ActuatorLog>>) {
        let log = Arc::new(Mutex::new(ActuatorLog::default()));
        (
            MockActuator {
                log: log.clone(),
                fail_enable: false,
                fail_reset: false,
                fail_apply_at: None,
            },
            log,
        )
    }

    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    pub fn failing_reset(mut self) -> Self {
        self.fail_reset = true;
        self
    }

    pub fn failing_apply_at(mut self, call_index: usize) -> Self {
        self.fail_apply_at = Some(call_index);
        self
    }
}

impl Actuator for MockActuator {
    type Error = MockFault;

    fn enable_all(&mut self) -> Result<(), Self::Error> {
        if self.fail_enable {
            return Err(MockFault("enable failed"));
        }
        self.log.lock().unwrap().enable_calls += 1;
        Ok(())
    }

    fn reset_to_pose(&mut self, pose: &[f64]) -> Result<(), Self::Error> {
        if self.fail_reset {
            return Err(MockFault("reset failed"));
        }
        self.log.lock().unwrap().reset_poses.push(pose.to_vec());
        Ok(())
    }

    fn apply_command(&mut self, positions: &[f64]) -> Result<(), Self::Error> {
        let mut log = self.log.lock().unwrap();
        if self.fail_apply_at == Some(log.commands.len()) {
            return Err(MockFault("bus write failed"));
        }
        log.commands.push(positions.to_vec());
        Ok(())
    }

    fn disable_all(&mut self) -> Result<(), Self::Error> {
        self.log.lock().unwrap().disable_calls += 1;
        Ok(())
    }
}
