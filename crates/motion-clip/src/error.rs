//! 数据层错误类型定义

use thiserror::Error;

/// 片段数据错误
#[derive(Error, Debug)]
pub enum ClipError {
    /// 帧索引越界
    ///
    /// 越界访问是可报告的错误，不做静默钳位。
    #[error("frame index {frame} out of range (frame count: {frame_count})")]
    FrameOutOfRange { frame: usize, frame_count: usize },

    /// 关节数不匹配（行宽不一致或偏移向量长度错误）
    #[error("joint count mismatch: expected {expected}, got {actual}")]
    JointCountMismatch { expected: usize, actual: usize },

    /// 无效的关节重排表（不是合法置换）
    #[error("invalid joint remap: {0}")]
    InvalidRemap(String),

    /// 空片段（零帧）
    #[error("empty clip (zero frames)")]
    EmptyClip,

    /// 无效采样率
    #[error("invalid sample rate: {0} Hz (must be > 0)")]
    InvalidSampleRate(u32),

    /// 位置与速度序列帧数不一致
    #[error("position/velocity frame count mismatch: {positions} vs {velocities}")]
    FrameCountMismatch { positions: usize, velocities: usize },
}

/// 片段加载错误
///
/// 每个变体对应加载流程的一个阶段，并携带底层原因。
#[derive(Error, Debug)]
pub enum LoadError {
    /// 打开片段文件失败
    #[error("failed to open clip file: {0}")]
    Open(#[source] std::io::Error),

    /// 读取文件头失败
    #[error("failed to read clip header: {0}")]
    Header(#[source] std::io::Error),

    /// 魔数不匹配（不是本格式的文件）
    #[error("invalid clip file magic (not a motion clip container)")]
    BadMagic,

    /// 不支持的容器版本
    #[error("unsupported clip file version: {0}")]
    UnsupportedVersion(u8),

    /// bincode 解码失败
    #[error("failed to decode clip data: {0}")]
    Decode(#[source] bincode::Error),

    /// 数据校验失败（帧形状、采样率、重排表、偏移长度）
    #[error("clip validation failed: {0}")]
    Validate(#[from] ClipError),
}

/// 片段保存错误
#[derive(Error, Debug)]
pub enum SaveError {
    /// 创建片段文件失败
    #[error("failed to create clip file: {0}")]
    Create(#[source] std::io::Error),

    /// bincode 编码失败
    #[error("failed to encode clip data: {0}")]
    Encode(#[source] bincode::Error),

    /// 写入片段文件失败
    #[error("failed to write clip file: {0}")]
    Write(#[source] std::io::Error),
}
