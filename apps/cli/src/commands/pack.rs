//! pack 命令
//!
//! 将 JSON 片段导出打包为本地容器格式。JSON 结构与 [`ClipFile`] 一致：
//!
//! ```json
//! {
//!   "sample_rate_hz": 30,
//!   "positions": [[0.0, 0.1], [0.2, 0.3]],
//!   "velocities": [[0.0, 0.0], [0.0, 0.0]]
//! }
//! ```

use anyhow::{Context, Result};
use clap::Args;
use motion_clip::{ClipFile, MotionClip};
use std::fs;

/// 打包命令参数
#[derive(Args, Debug)]
pub struct PackCommand {
    /// JSON 片段导出路径
    #[arg(short, long)]
    pub input: String,

    /// 输出容器文件路径
    #[arg(short, long)]
    pub output: String,
}

impl PackCommand {
    pub fn execute(&self) -> Result<()> {
        let content = fs::read_to_string(&self.input)
            .with_context(|| format!("读取 JSON 片段失败: {}", self.input))?;

        let file: ClipFile = serde_json::from_str(&content).context("解析 JSON 片段失败")?;

        // 打包前做一次完整形状校验，坏数据不落盘
        let clip = MotionClip::new(
            file.sample_rate_hz,
            file.positions.clone(),
            file.velocities.clone(),
        )
        .context("片段数据校验失败")?;

        file.save(&self.output)
            .with_context(|| format!("写入容器文件失败: {}", self.output))?;

        println!(
            "✅ 已打包: {} Hz, {} 帧, {} 关节 -> {}",
            clip.sample_rate_hz(),
            clip.frame_count(),
            clip.joint_count(),
            self.output
        );

        Ok(())
    }
}
