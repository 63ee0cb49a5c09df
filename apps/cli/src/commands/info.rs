//! info 命令
//!
//! 查看片段元数据，不触碰任何执行接口，不做重排和标定。

use anyhow::{Context, Result};
use clap::Args;
use motion_clip::{LoadOptions, load_clip};

/// 元数据查看命令参数
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// 片段文件路径
    #[arg(short, long)]
    pub input: String,
}

impl InfoCommand {
    pub fn execute(&self) -> Result<()> {
        let clip = load_clip(&self.input, &LoadOptions::default())
            .with_context(|| format!("加载片段失败: {}", self.input))?;

        println!("📁 文件: {}", self.input);
        println!("   采样率: {} Hz", clip.sample_rate_hz());
        println!("   帧数:   {}", clip.frame_count());
        println!("   关节数: {}", clip.joint_count());
        println!("   时长:   {:.2} s", clip.duration().as_secs_f64());

        Ok(())
    }
}
