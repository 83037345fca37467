// ==========================================
// 学期教学计划日历 - 计划API
// ==========================================
// 职责: 串行化访问计划仓库，供应用壳层与视图调用
// 并发: 所有加载/切换经由同一把 Mutex，避免切换的读-改-写丢失更新
// 红线: 锁失效立即报错（StoreUnavailable），不返回陈旧数据
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::dto::{CalendarDayView, PlanningConfigurationDto};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{CalendarDate, CalendarDay, PlanningConfiguration};
use crate::engine::{CalendarSummary, UnitCoverage};
use crate::perf::PerfGuard;
use crate::store::{PlanningStore, ToggleOutcome};

// ==========================================
// PlanningApi - 计划API
// ==========================================
pub struct PlanningApi {
    store: Arc<Mutex<PlanningStore>>,
}

impl PlanningApi {
    /// 创建新的 PlanningApi 实例（仓库为未加载状态）
    pub fn new() -> Self {
        Self::with_store(Arc::new(Mutex::new(PlanningStore::new())))
    }

    /// 使用已有仓库创建
    pub fn with_store(store: Arc<Mutex<PlanningStore>>) -> Self {
        Self { store }
    }

    fn lock_store(&self) -> ApiResult<MutexGuard<'_, PlanningStore>> {
        self.store
            .lock()
            .map_err(|e| ApiError::StoreUnavailable(format!("锁获取失败: {}", e)))
    }

    // ==========================================
    // 加载
    // ==========================================

    /// 加载计划配置（全量替换，丢弃人工切换）
    ///
    /// # 返回
    /// - 新日历的状态计数
    pub fn load_configuration(&self, data: PlanningConfiguration) -> ApiResult<CalendarSummary> {
        let _perf = PerfGuard::new("api.load_configuration");

        let mut store = self.lock_store()?;
        store.load_configuration(data);
        Ok(CalendarSummary::from_days(store.days()))
    }

    /// 从 DTO 加载
    pub fn load_from_dto(&self, dto: PlanningConfigurationDto) -> ApiResult<CalendarSummary> {
        let config = PlanningConfiguration::try_from(dto)?;
        self.load_configuration(config)
    }

    /// 从 JSON 字符串加载
    pub fn load_from_json(&self, json: &str) -> ApiResult<CalendarSummary> {
        let dto = PlanningConfigurationDto::from_json(json)?;
        self.load_from_dto(dto)
    }

    /// 卸载计划
    pub fn unload(&self) -> ApiResult<()> {
        self.lock_store()?.unload();
        Ok(())
    }

    // ==========================================
    // 切换
    // ==========================================

    /// 切换某日教学状态
    ///
    /// 周末、区间外、未加载均为空操作，通过 ToggleOutcome 告知调用方。
    pub fn toggle_day(&self, date: impl CalendarDate) -> ApiResult<ToggleOutcome> {
        let _perf = PerfGuard::new("api.toggle_day");

        let mut store = self.lock_store()?;
        Ok(store.toggle_day(date))
    }

    // ==========================================
    // 读取
    // ==========================================

    pub fn is_loaded(&self) -> ApiResult<bool> {
        Ok(self.lock_store()?.is_loaded())
    }

    /// 当前计划配置（未加载时为 None）
    pub fn get_configuration(&self) -> ApiResult<Option<PlanningConfiguration>> {
        Ok(self.lock_store()?.configuration().cloned())
    }

    /// 当前日历日序列（未加载时为空）
    pub fn list_days(&self) -> ApiResult<Vec<CalendarDay>> {
        Ok(self.lock_store()?.days().to_vec())
    }

    /// 当前日历日视图
    pub fn list_day_views(&self) -> ApiResult<Vec<CalendarDayView>> {
        let _perf = PerfGuard::new("api.list_day_views");

        let store = self.lock_store()?;
        Ok(store.days().iter().map(CalendarDayView::from).collect())
    }

    /// 查询单日
    pub fn get_day(&self, date: impl CalendarDate) -> ApiResult<CalendarDay> {
        let date = date.calendar_day();
        let store = self.lock_store()?;
        if !store.is_loaded() {
            return Err(ApiError::PlanningNotLoaded);
        }
        store
            .find_day(date)
            .copied()
            .ok_or_else(|| ApiError::NotFound(format!("日历日{}不在学年区间内", date)))
    }

    /// 日历状态计数
    ///
    /// # 返回
    /// - Err(PlanningNotLoaded): 尚未加载
    pub fn get_summary(&self) -> ApiResult<CalendarSummary> {
        let store = self.lock_store()?;
        if !store.is_loaded() {
            return Err(ApiError::PlanningNotLoaded);
        }
        Ok(CalendarSummary::from_days(store.days()))
    }

    /// 各教学单元覆盖情况（按配置中的单元顺序）
    ///
    /// # 返回
    /// - Err(PlanningNotLoaded): 尚未加载
    pub fn get_unit_coverage(&self) -> ApiResult<Vec<UnitCoverage>> {
        let _perf = PerfGuard::new("api.get_unit_coverage");

        let store = self.lock_store()?;
        let config = store.configuration().ok_or(ApiError::PlanningNotLoaded)?;
        Ok(config
            .teaching_units()
            .iter()
            .map(|unit| UnitCoverage::for_unit(unit, store.days()))
            .collect())
    }

    /// 人工切换过的日期
    pub fn list_manual_overrides(&self) -> ApiResult<Vec<CalendarDay>> {
        Ok(self.lock_store()?.manual_overrides())
    }
}

impl Default for PlanningApi {
    fn default() -> Self {
        Self::new()
    }
}
