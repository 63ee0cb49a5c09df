//! # Motion CLI
//!
//! ATOM01 动作回放命令行工具。
//!
//! ```bash
//! # 查看片段元数据
//! motion-cli info --input walk.clip
//!
//! # 打包 JSON 片段导出为本地容器
//! motion-cli pack --input walk.json --output walk.clip
//!
//! # 回放（USD 录制需要 --remap 转换关节顺序）
//! motion-cli play --input walk.clip --config configs/atom01.toml --speed 0.5 --remap
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod sim;

use commands::{InfoCommand, PackCommand, PlayCommand};

/// Motion CLI - 动作回放命令行工具
#[derive(Parser, Debug)]
#[command(name = "motion-cli")]
#[command(about = "Motion playback tool for the ATOM01 humanoid", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 回放动作片段
    Play {
        #[command(flatten)]
        args: PlayCommand,
    },

    /// 查看片段元数据
    Info {
        #[command(flatten)]
        args: InfoCommand,
    },

    /// 将 JSON 片段导出打包为本地容器格式
    Pack {
        #[command(flatten)]
        args: PackCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motion_cli=info".parse().unwrap())
                .add_directive("motion_player=info".parse().unwrap())
                .add_directive("motion_clip=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { args } => args.execute(),
        Commands::Info { args } => args.execute(),
        Commands::Pack { args } => args.execute(),
    }
}
