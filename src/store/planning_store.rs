// ==========================================
// 学期教学计划日历 - 计划状态仓库
// ==========================================
// 职责: 持有当前计划配置与派生日历，提供加载/切换操作
// 红线:
// - 未加载是显式状态（Unloaded），不是空值默认
// - 加载即全量重建日历，丢弃所有人工切换
// - 切换只修改命中的那一条记录，周末与区间外为静默空操作
// ==========================================

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{CalendarDate, CalendarDay, PlanningConfiguration};
use crate::engine::CalendarDerivationEngine;

// ==========================================
// 状态定义
// ==========================================

/// 已加载的计划
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedPlanning {
    pub configuration: PlanningConfiguration,
    pub days: Vec<CalendarDay>,
}

/// 仓库状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlanningState {
    #[default]
    Unloaded,
    Loaded(LoadedPlanning),
}

/// 切换结果
///
/// 除 Toggled 以外都是空操作，调用方可以忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "day", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    /// 已切换，携带切换后的记录
    Toggled(CalendarDay),
    /// 周末不可切换
    WeekendIgnored,
    /// 日期不在日历区间内
    OutOfRange,
    /// 尚未加载计划
    NotLoaded,
}

impl ToggleOutcome {
    pub fn is_toggled(&self) -> bool {
        matches!(self, ToggleOutcome::Toggled(_))
    }
}

// ==========================================
// PlanningStore - 计划状态仓库
// ==========================================
#[derive(Debug, Default)]
pub struct PlanningStore {
    engine: CalendarDerivationEngine,
    state: PlanningState,
}

impl PlanningStore {
    /// 创建未加载状态的仓库
    pub fn new() -> Self {
        Self::default()
    }

    /// 加载计划配置
    ///
    /// 替换当前配置并全量重新派生日历，之前的人工切换全部丢弃。
    pub fn load_configuration(&mut self, data: PlanningConfiguration) {
        let days = self.engine.derive_days(data.school_calendar());

        tracing::info!(
            units = data.teaching_units().len(),
            start = %data.school_calendar().start_date,
            end = %data.school_calendar().end_date,
            non_teaching_dates = data.school_calendar().non_teaching_dates.len(),
            day_count = days.len(),
            "计划配置已加载"
        );

        self.state = PlanningState::Loaded(LoadedPlanning {
            configuration: data,
            days,
        });
    }

    /// 切换某日的教学状态（教学日 ⇄ 非教学日）
    ///
    /// # 参数
    /// - date: 任意可归一化日期，时间部分被忽略
    ///
    /// # 返回
    /// - Toggled: 已切换
    /// - WeekendIgnored / OutOfRange / NotLoaded: 空操作
    pub fn toggle_day(&mut self, date: impl CalendarDate) -> ToggleOutcome {
        let date = date.calendar_day();

        let loaded = match &mut self.state {
            PlanningState::Loaded(loaded) => loaded,
            PlanningState::Unloaded => {
                tracing::debug!(%date, "尚未加载计划，忽略切换");
                return ToggleOutcome::NotLoaded;
            }
        };

        let index = match CalendarDerivationEngine::index_of(loaded.configuration.school_calendar(), date) {
            Some(index) => index,
            None => {
                tracing::debug!(%date, "日期不在日历区间内，忽略切换");
                return ToggleOutcome::OutOfRange;
            }
        };

        let day = match loaded.days.get_mut(index) {
            Some(day) if day.date() == date => day,
            _ => {
                tracing::debug!(%date, index, "日历记录未命中，忽略切换");
                return ToggleOutcome::OutOfRange;
            }
        };

        if !day.toggle_status() {
            tracing::debug!(%date, "周末不可切换");
            return ToggleOutcome::WeekendIgnored;
        }

        tracing::info!(%date, status = %day.status(), "日历日状态已切换");
        ToggleOutcome::Toggled(*day)
    }

    /// 卸载计划，回到未加载状态
    pub fn unload(&mut self) {
        if self.is_loaded() {
            tracing::info!("计划已卸载");
        }
        self.state = PlanningState::Unloaded;
    }

    // ===== 读取 =====

    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, PlanningState::Loaded(_))
    }

    /// 当前计划配置（未加载时为 None）
    pub fn configuration(&self) -> Option<&PlanningConfiguration> {
        match &self.state {
            PlanningState::Loaded(loaded) => Some(&loaded.configuration),
            PlanningState::Unloaded => None,
        }
    }

    /// 当前日历日序列（未加载时为空）
    pub fn days(&self) -> &[CalendarDay] {
        match &self.state {
            PlanningState::Loaded(loaded) => &loaded.days,
            PlanningState::Unloaded => &[],
        }
    }

    /// 按日历日查找记录
    pub fn find_day(&self, date: impl CalendarDate) -> Option<&CalendarDay> {
        let date = date.calendar_day();
        let config = self.configuration()?;
        let index = CalendarDerivationEngine::index_of(config.school_calendar(), date)?;
        self.days().get(index).filter(|day| day.date() == date)
    }

    /// 人工切换过的日期
    ///
    /// 与当前配置重新派生的结果逐条比对，返回状态不同的记录（切换后的值）。
    pub fn manual_overrides(&self) -> Vec<CalendarDay> {
        let loaded = match &self.state {
            PlanningState::Loaded(loaded) => loaded,
            PlanningState::Unloaded => return Vec::new(),
        };

        let derived = self.engine.derive_days(loaded.configuration.school_calendar());
        loaded
            .days
            .iter()
            .zip(derived.iter())
            .filter(|(current, original)| current != original)
            .map(|(current, _)| *current)
            .collect()
    }

    /// 已切换日期（仅日期）
    pub fn overridden_dates(&self) -> Vec<NaiveDate> {
        self.manual_overrides().iter().map(|d| d.date()).collect()
    }
}
