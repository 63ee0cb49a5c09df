//! 机器人配置文件
//!
//! TOML 格式，描述目标机器人（URDF 约定）的标定默认姿态、可选的
//! USD -> URDF 关节重排表和调度器参数。示例见 `configs/atom01.toml`。

use anyhow::{Context, Result};
use motion_player::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 机器人配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    /// 标定默认姿态（目标约定，每关节一个弧度值）
    ///
    /// 加载片段时作为标定偏移逐帧减去。
    pub default_pose: Vec<f64>,

    /// 关节重排表（源索引 -> 目标索引），`play --remap` 时使用
    #[serde(default)]
    pub joint_remap: Option<Vec<usize>>,

    /// 调度器参数
    #[serde(default)]
    pub player: PlayerConfig,
}

impl RobotConfig {
    /// 从 TOML 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("读取机器人配置失败: {}", path.as_ref().display()))?;

        let config: RobotConfig = toml::from_str(&content).context("解析机器人配置失败")?;

        if config.default_pose.is_empty() {
            anyhow::bail!("机器人配置缺少 default_pose");
        }

        Ok(config)
    }
}
