//! 回放层错误类型定义

use thiserror::Error;

/// 动态错误源（执行器的具体错误类型由实现决定）
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 回放调度器错误
///
/// 每个变体标明失败阶段并携带底层原因，不做泛化消息。
#[derive(Error, Debug)]
pub enum PlayerError {
    /// 片段加载失败（会话从未开始）
    #[error("failed to load motion clip: {0}")]
    Load(#[from] motion_clip::LoadError),

    /// 执行器初始化失败（使能或归位阶段，未运行任何节拍）
    #[error("actuator initialization failed during {stage}: {source}")]
    ActuatorInit {
        stage: &'static str,
        #[source]
        source: BoxError,
    },

    /// 节拍内执行器指令失败（会话经 Stopped 终止，不重试）
    #[error("actuator command failed at tick {tick}: {source}")]
    Actuator {
        tick: u64,
        #[source]
        source: BoxError,
    },

    /// 帧索引越界（Finished 守卫之后本应不可达的逻辑故障）
    #[error("frame index {frame} out of range (frame count: {frame_count}); playback logic fault")]
    FrameIndex { frame: usize, frame_count: usize },

    /// 无效配置
    #[error("invalid player config: {0}")]
    Config(String),
}
