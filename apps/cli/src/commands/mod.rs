//! CLI 子命令

pub mod info;
pub mod pack;
pub mod play;

pub use info::InfoCommand;
pub use pack::PackCommand;
pub use play::PlayCommand;
