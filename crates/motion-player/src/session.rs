//! 回放会话状态机
//!
//! 状态转换：
//!
//! ```text
//! Initializing -> Playing -> { Finished, Stopped }
//! ```
//!
//! `Finished` / `Stopped` 为终态，之后 [`PlaybackSession::advance_tick`]
//! 是无操作。会话一次性使用，终态后丢弃，不支持二次运行。
//!
//! # 帧调度
//!
//! `step_ratio = max(1, round(control_rate / (sample_rate * speed)))`。
//! 每当 `tick_counter % step_ratio == 0` 时取新帧并缓存为保持向量；
//! 其余节拍重复下发同一向量——这正是把低采样率片段重采样到高控制
//! 频率的保持并步进行为。采样率超过控制频率时 `step_ratio` 取 1，
//! 片段会比物理录制更快播完，这是有意的近似而非故障。

use crate::actuator::Actuator;
use crate::config::PlayerConfig;
use crate::error::PlayerError;
use motion_clip::MotionClip;
use std::time::Duration;
use tracing::{debug, info};

/// 速度倍率下限
pub const MIN_SPEED: f64 = 0.1;

/// 速度倍率上限
///
/// 超过 1.0 需要亚控制周期的帧推进，本调度器不支持，静默钳位。
pub const MAX_SPEED: f64 = 1.0;

/// 回放会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// 启动时序进行中（使能、稳定等待、归位）
    Initializing,
    /// 逐节拍回放中
    Playing,
    /// 片段播放完毕（终态）
    Finished,
    /// 外部取消或节拍内错误（终态）
    Stopped,
}

impl PlaybackState {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlaybackState::Finished | PlaybackState::Stopped)
    }
}

/// 计算每片段帧对应的控制节拍数
///
/// 最小为 1：采样率即使超过控制频率也不报错，片段加速播放。
pub(crate) fn step_ratio_for(control_rate_hz: u32, sample_rate_hz: u32, speed: f64) -> u64 {
    let ratio = (control_rate_hz as f64 / (sample_rate_hz as f64 * speed)).round() as u64;
    ratio.max(1)
}

/// 一次性回放会话
///
/// 由 [`SessionBuilder::start`] 产出，产出时启动时序已完成、状态为
/// `Playing`。Move-only，终态后丢弃。
#[derive(Debug)]
pub struct PlaybackSession<A: Actuator> {
    clip: MotionClip,
    actuator: A,
    speed: f64,
    step_ratio: u64,
    tick_counter: u64,
    held_command: Vec<f64>,
    state: PlaybackState,
    control_period: Duration,
    shutdown_done: bool,
}

impl<A: Actuator> PlaybackSession<A> {
    /// 当前状态
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// 是否仍在回放
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// 钳位后的速度倍率
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// 每帧保持的控制节拍数
    pub fn step_ratio(&self) -> u64 {
        self.step_ratio
    }

    /// 已处理的节拍数
    pub fn ticks(&self) -> u64 {
        self.tick_counter
    }

    /// 控制周期
    pub fn control_period(&self) -> Duration {
        self.control_period
    }

    /// 回放进度（0.0 到 1.0）
    pub fn progress(&self) -> f64 {
        let total = self.clip.frame_count() as u64 * self.step_ratio;
        (self.tick_counter as f64 / total as f64).min(1.0)
    }

    /// 处理一个控制节拍
    ///
    /// `Playing` 状态下：
    ///
    /// 1. 节拍计数落在 `step_ratio` 边界时计算当前帧；帧号到达帧数
    ///    则进入 `Finished`，本节拍不下发指令。
    /// 2. 否则刷新保持向量，并无条件下发（帧未变化的节拍也下发，
    ///    产生保持 `step_ratio` 个节拍的行为）。
    /// 3. 节拍计数加一。
    ///
    /// 终态下为无操作。执行器错误使会话进入 `Stopped` 并原样上抛，
    /// 不重试。
    pub fn advance_tick(&mut self) -> Result<(), PlayerError> {
        if self.state != PlaybackState::Playing {
            return Ok(());
        }

        if self.tick_counter % self.step_ratio == 0 {
            let frame = (self.tick_counter / self.step_ratio) as usize;
            if frame >= self.clip.frame_count() {
                self.state = PlaybackState::Finished;
                info!(
                    "motion playback finished: {} frames in {} ticks",
                    self.clip.frame_count(),
                    self.tick_counter
                );
                return Ok(());
            }

            match self.clip.position_frame(frame) {
                Ok(row) => {
                    self.held_command.clear();
                    self.held_command.extend_from_slice(row);
                    debug!("advanced to frame {} at tick {}", frame, self.tick_counter);
                },
                Err(_) => {
                    // Finished 守卫之后不可达；触发即逻辑故障，立即停止
                    self.state = PlaybackState::Stopped;
                    return Err(PlayerError::FrameIndex {
                        frame,
                        frame_count: self.clip.frame_count(),
                    });
                },
            }
        }

        if let Err(e) = self.actuator.apply_command(&self.held_command) {
            self.state = PlaybackState::Stopped;
            return Err(PlayerError::Actuator {
                tick: self.tick_counter,
                source: Box::new(e),
            });
        }

        self.tick_counter += 1;
        Ok(())
    }

    /// 外部取消：`Playing -> Stopped`
    ///
    /// 终态下无操作，可重复调用。
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Stopped;
            info!("playback stopped at tick {}", self.tick_counter);
        }
    }

    /// 关停契约：失能执行器，恰好一次
    ///
    /// 无论从哪个终态到达，重复调用都是无操作。
    pub fn shutdown(&mut self) -> Result<(), PlayerError> {
        if self.shutdown_done {
            return Ok(());
        }
        self.shutdown_done = true;

        self.actuator.disable_all().map_err(|e| PlayerError::Actuator {
            tick: self.tick_counter,
            source: Box::new(e),
        })
    }
}

/// 回放会话构造器
///
/// 持有片段、执行器和配置，`start()` 执行启动时序并产出已进入
/// `Playing` 的会话。启动时序中的任何执行器错误都会整体中止，
/// 不产出部分构造的会话。
pub struct SessionBuilder<A: Actuator> {
    clip: MotionClip,
    actuator: A,
    speed: f64,
    config: PlayerConfig,
}

impl<A: Actuator> SessionBuilder<A> {
    /// 以片段和执行器创建构造器
    pub fn new(clip: MotionClip, actuator: A) -> Self {
        SessionBuilder {
            clip,
            actuator,
            speed: 1.0,
            config: PlayerConfig::default(),
        }
    }

    /// 设置速度倍率
    ///
    /// 超出 `[0.1, 1.0]` 的值在 `start()` 时静默钳位，不报错。
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// 设置调度器配置
    pub fn config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    /// 执行启动时序并产出回放会话
    ///
    /// 顺序固定：使能 -> 稳定等待 -> 归位到标定中立姿态（标定系下的
    /// 零向量）-> 第二段稳定等待 -> `Playing`。
    ///
    /// # 错误
    ///
    /// - [`PlayerError::Config`] - 控制频率为 0
    /// - [`PlayerError::ActuatorInit`] - 使能或归位失败
    pub fn start(mut self) -> Result<PlaybackSession<A>, PlayerError> {
        if self.config.control_rate_hz == 0 {
            return Err(PlayerError::Config(
                "control_rate_hz must be > 0".to_string(),
            ));
        }

        let speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        if speed != self.speed {
            info!("playback speed clamped: {} -> {}", self.speed, speed);
        }

        let step_ratio =
            step_ratio_for(self.config.control_rate_hz, self.clip.sample_rate_hz(), speed);

        info!(
            "starting playback session: speed {}x, step ratio {}, {} frames",
            speed,
            step_ratio,
            self.clip.frame_count()
        );

        // 启动时序：使能后反馈不可靠，两段稳定等待不可省略
        self.actuator
            .enable_all()
            .map_err(|e| PlayerError::ActuatorInit {
                stage: "enable",
                source: Box::new(e),
            })?;
        std::thread::sleep(self.config.enable_settle());

        // 位置已在标定系中（加载时减过偏移），零向量即物理默认姿态
        let neutral = vec![0.0; self.clip.joint_count()];
        self.actuator
            .reset_to_pose(&neutral)
            .map_err(|e| PlayerError::ActuatorInit {
                stage: "reset",
                source: Box::new(e),
            })?;
        std::thread::sleep(self.config.reset_settle());

        let joint_count = self.clip.joint_count();
        let control_period = self.config.control_period();

        Ok(PlaybackSession {
            clip: self.clip,
            actuator: self.actuator,
            speed,
            step_ratio,
            tick_counter: 0,
            held_command: vec![0.0; joint_count],
            state: PlaybackState::Playing,
            control_period,
            shutdown_done: false,
        })
    }
}
