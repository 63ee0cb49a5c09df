//! 执行接口能力 trait
//!
//! 调度器不关心执行器的内部实现（CAN 总线、仿真、测试替身），只要求
//! 四个同步操作。任何操作返回错误都对会话致命：不重试，直接终止。

/// 关节执行接口
///
/// 所有指令向量按目标关节约定排列，长度等于片段的关节数。
pub trait Actuator {
    /// 执行器错误类型
    type Error: std::error::Error + Send + Sync + 'static;

    /// 使能全部执行器
    fn enable_all(&mut self) -> Result<(), Self::Error>;

    /// 将全部关节移动到指定姿态（启动归位，非实时路径）
    fn reset_to_pose(&mut self, pose: &[f64]) -> Result<(), Self::Error>;

    /// 下发一帧关节位置指令（实时路径，每个控制节拍一次）
    fn apply_command(&mut self, positions: &[f64]) -> Result<(), Self::Error>;

    /// 失能全部执行器
    fn disable_all(&mut self) -> Result<(), Self::Error>;
}
