//! 软实时控制循环
//!
//! 单线程协作式：一个循环同步驱动 [`PlaybackSession::advance_tick`]。
//! 每次迭代记录起始时间戳、处理一个节拍、再睡眠
//! `max(0, control_period - elapsed)`。超时的迭代不做追赶，直接进入
//! 下一次迭代——持续超时会相对名义回放时长产生墙钟漂移，这是接受的
//! 近似，不承诺硬实时。
//!
//! 取消标志在节拍之间检查，保证不会在指令中途打断执行接口。

use crate::actuator::Actuator;
use crate::error::PlayerError;
use crate::session::{PlaybackSession, PlaybackState};
use spin_sleep::SpinSleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// 运行回放会话直到终态
///
/// 阻塞直到：
///
/// - 片段播放完毕（`Finished`）
/// - `cancel` 置位（节拍之间观察到，转入 `Stopped`）
/// - 节拍内执行器错误（转入 `Stopped` 后上抛）
///
/// 无论以哪种方式结束，关停契约（[`PlaybackSession::shutdown`]，失能
/// 执行器恰好一次）都会执行。会话被消费，符合一次性生命周期。
pub fn run<A: Actuator>(
    mut session: PlaybackSession<A>,
    cancel: &AtomicBool,
) -> Result<PlaybackState, PlayerError> {
    let period = session.control_period();
    let sleeper = SpinSleeper::default();

    info!(
        "playback loop started: period {:?}, step ratio {}",
        period,
        session.step_ratio()
    );

    loop {
        if cancel.load(Ordering::SeqCst) {
            session.stop();
        }
        if session.state().is_terminal() {
            break;
        }

        let start = Instant::now();

        if let Err(e) = session.advance_tick() {
            // 会话已转入 Stopped；关停契约仍须执行，再上抛原始错误
            if let Err(shutdown_err) = session.shutdown() {
                warn!("actuator disable failed after tick error: {}", shutdown_err);
            }
            return Err(e);
        }

        let elapsed = start.elapsed();
        if elapsed < period {
            sleeper.sleep(period - elapsed);
        }
        // 超时：不追赶，立即进入下一节拍
    }

    let state = session.state();
    session.shutdown()?;

    info!("playback loop exited in state {:?}", state);
    Ok(state)
}
