// ==========================================
// 学期教学计划日历 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与计划 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod locale;
mod planning;

pub use locale::*;
pub use planning::*;
