use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Instant;

// 0 = 未初始化, 1 = 关闭, 2 = 开启
static PERF_STATE: AtomicU8 = AtomicU8::new(0);
static PERF_OVERRIDE: AtomicBool = AtomicBool::new(false);

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 是否输出性能日志
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `TERM_PLANNER_PERF=1` / `TERM_PLANNER_PERF=0` 显式开关
pub fn perf_enabled() -> bool {
    if PERF_OVERRIDE.load(Ordering::Relaxed) {
        return PERF_STATE.load(Ordering::Relaxed) == 2;
    }

    match PERF_STATE.load(Ordering::Relaxed) {
        1 => false,
        2 => true,
        _ => {
            let enabled = match std::env::var("TERM_PLANNER_PERF") {
                Ok(v) => is_true(&v),
                Err(_) => cfg!(debug_assertions),
            };
            PERF_STATE.store(if enabled { 2 } else { 1 }, Ordering::Relaxed);
            enabled
        }
    }
}

/// 运行时强制开关（覆盖环境变量）
pub fn set_perf_enabled(enabled: bool) {
    PERF_STATE.store(if enabled { 2 } else { 1 }, Ordering::Relaxed);
    PERF_OVERRIDE.store(true, Ordering::Relaxed);
}

/// 性能统计 Guard：Drop 时记录 elapsed_us
///
/// 使用方式：
/// ```ignore
/// let _perf = term_planner::perf::PerfGuard::new("toggle_day");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }
        let elapsed_us = self.start.elapsed().as_micros() as u64;

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_us,
            "done"
        );
    }
}
