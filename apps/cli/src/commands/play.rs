//! play 命令
//!
//! 回放动作片段：加载配置和片段、执行启动时序、运行软实时控制循环。

use crate::config::RobotConfig;
use crate::sim::SimActuator;
use anyhow::{Context, Result};
use clap::Args;
use motion_clip::{JointRemap, LoadOptions, load_clip};
use motion_player::{PlaybackState, SessionBuilder, run};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 回放命令参数
#[derive(Args, Debug)]
pub struct PlayCommand {
    /// 片段文件路径
    #[arg(short, long)]
    pub input: String,

    /// 机器人配置文件路径
    #[arg(short, long)]
    pub config: String,

    /// 回放速度倍率
    ///
    /// 有效范围 [0.1, 1.0]，超出范围静默钳位：速度只会放慢回放，
    /// 不会超过控制循环自身的频率。
    #[arg(short, long, default_value_t = 1.0)]
    pub speed: f64,

    /// 将录制约定（USD）的关节顺序转换为执行约定（URDF）
    ///
    /// 使用配置文件中的 joint_remap 表，默认关闭。
    #[arg(long)]
    pub remap: bool,

    /// 跳过回放前确认
    #[arg(long)]
    pub confirm: bool,
}

impl PlayCommand {
    /// 执行回放
    pub fn execute(&self) -> Result<()> {
        // === 1. 加载配置与片段 ===

        let robot = RobotConfig::load(&self.config)?;

        let remap = if self.remap {
            let table = robot
                .joint_remap
                .clone()
                .context("配置文件没有 joint_remap 表，无法使用 --remap")?;
            Some(JointRemap::new(table).context("关节重排表无效")?)
        } else {
            None
        };

        let options = LoadOptions {
            remap,
            calibration_offset: Some(robot.default_pose.clone()),
        };
        let clip = load_clip(&self.input, &options)
            .with_context(|| format!("加载片段失败: {}", self.input))?;

        // === 2. 显示回放信息 ===

        println!("════════════════════════════════════════");
        println!("           动作回放");
        println!("════════════════════════════════════════");
        println!();
        println!("📁 文件: {}", self.input);
        println!("🤖 配置: {}", self.config);
        println!(
            "🎞  片段: {} Hz, {} 帧, {} 关节, 原始时长 {:.1} s",
            clip.sample_rate_hz(),
            clip.frame_count(),
            clip.joint_count(),
            clip.duration().as_secs_f64()
        );
        println!("⚡ 速度: {:.2}x{}", self.speed, if self.remap { "（已启用关节重排）" } else { "" });
        println!();

        // === 3. 安全确认 ===

        if !self.confirm {
            print!("即将开始回放，确定要继续吗？[y/N] ");
            use std::io::Write;
            std::io::stdout().flush()?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;

            if !input.trim().to_lowercase().starts_with('y') {
                println!("❌ 操作已取消");
                return Ok(());
            }
            println!();
        }

        // === 4. 注册 Ctrl-C 取消信号 ===

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_handler = cancel.clone();
        ctrlc::set_handler(move || {
            println!();
            println!("🛑 收到停止信号，正在停止回放...");
            cancel_handler.store(true, Ordering::SeqCst);
        })
        .context("注册 Ctrl-C 处理器失败")?;

        // === 5. 启动时序 + 控制循环 ===

        println!("⏳ 使能执行器并归位...");
        let session = SessionBuilder::new(clip, SimActuator::new())
            .speed(self.speed)
            .config(robot.player.clone())
            .start()
            .context("启动回放会话失败")?;

        println!("🔄 开始回放（按 Ctrl-C 可随时停止）");
        println!();

        let state = run(session, &cancel).context("回放失败")?;

        match state {
            PlaybackState::Finished => println!("✅ 回放完成"),
            PlaybackState::Stopped => println!("⚠️ 回放被用户中断"),
            _ => unreachable!("run() only returns terminal states"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_command_defaults() {
        let cmd = PlayCommand {
            input: "walk.clip".to_string(),
            config: "atom01.toml".to_string(),
            speed: 1.0,
            remap: false,
            confirm: false,
        };

        assert_eq!(cmd.speed, 1.0);
        assert!(!cmd.remap);
        assert!(!cmd.confirm);
    }

    #[test]
    fn play_command_with_remap() {
        let cmd = PlayCommand {
            input: "walk.clip".to_string(),
            config: "atom01.toml".to_string(),
            speed: 0.5,
            remap: true,
            confirm: true,
        };

        assert_eq!(cmd.speed, 0.5);
        assert!(cmd.remap);
    }
}
