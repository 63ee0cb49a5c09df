//! 动作片段数据模型
//!
//! [`MotionClip`] 是加载流程的最终产物：形状已校验、关节顺序已统一、
//! 标定偏移已减去。加载完成后不可变，播放层只做只读索引访问。

use crate::error::ClipError;
use std::time::Duration;

/// 已校验的内存中动作片段
///
/// 所有帧序列恰好有 `frame_count` 行，每行 `joint_count` 个值。
/// 越界帧访问返回 [`ClipError::FrameOutOfRange`]，不做钳位。
#[derive(Debug, Clone)]
pub struct MotionClip {
    sample_rate_hz: u32,
    positions: Vec<Vec<f64>>,
    velocities: Vec<Vec<f64>>,
    joint_count: usize,
}

impl MotionClip {
    /// 从帧序列构造片段，校验全部形状不变量
    ///
    /// # 错误
    ///
    /// - [`ClipError::InvalidSampleRate`] - 采样率为 0
    /// - [`ClipError::EmptyClip`] - 零帧
    /// - [`ClipError::FrameCountMismatch`] - 位置/速度帧数不一致
    /// - [`ClipError::JointCountMismatch`] - 任意一行宽度与第一行不同
    pub fn new(
        sample_rate_hz: u32,
        positions: Vec<Vec<f64>>,
        velocities: Vec<Vec<f64>>,
    ) -> Result<Self, ClipError> {
        if sample_rate_hz == 0 {
            return Err(ClipError::InvalidSampleRate(sample_rate_hz));
        }
        if positions.is_empty() {
            return Err(ClipError::EmptyClip);
        }
        if positions.len() != velocities.len() {
            return Err(ClipError::FrameCountMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }

        let joint_count = positions[0].len();
        if joint_count == 0 {
            return Err(ClipError::JointCountMismatch {
                expected: 1,
                actual: 0,
            });
        }
        for row in positions.iter().chain(velocities.iter()) {
            if row.len() != joint_count {
                return Err(ClipError::JointCountMismatch {
                    expected: joint_count,
                    actual: row.len(),
                });
            }
        }

        Ok(MotionClip {
            sample_rate_hz,
            positions,
            velocities,
            joint_count,
        })
    }

    /// 录制采样率（Hz）
    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    /// 帧数
    pub fn frame_count(&self) -> usize {
        self.positions.len()
    }

    /// 关节数
    pub fn joint_count(&self) -> usize {
        self.joint_count
    }

    /// 片段时长（按原始采样率）
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate_hz as f64)
    }

    /// 指定帧的关节位置
    pub fn position_frame(&self, frame: usize) -> Result<&[f64], ClipError> {
        self.positions
            .get(frame)
            .map(Vec::as_slice)
            .ok_or(ClipError::FrameOutOfRange {
                frame,
                frame_count: self.frame_count(),
            })
    }

    /// 指定帧的关节速度
    pub fn velocity_frame(&self, frame: usize) -> Result<&[f64], ClipError> {
        self.velocities
            .get(frame)
            .map(Vec::as_slice)
            .ok_or(ClipError::FrameOutOfRange {
                frame,
                frame_count: self.frame_count(),
            })
    }
}
