// ==========================================
// 学期教学计划日历 - 数据传输对象
// ==========================================
// 职责: 前端/配置文件的 JSON 形状（camelCase）与领域模型互转
// 日期: 接受 YYYY-MM-DD / YYYY-MM-DDTHH:MM:SS[.fff] / RFC 3339，
//       一律截断为日历日；带偏移的时间戳先换算到本机时区
// 星期: 0 = 周日 … 6 = 周六（与前端 Date.getDay() 一致）
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{
    calendar_day_in, CalendarDate, CalendarDay, DayStatus, PlanningConfiguration, SchoolCalendar, TeachingUnit,
    WeeklySchedule,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// 日期 / 星期解析
// ==========================================

/// 解析日期字符串并归一化为本机时区的日历日
pub fn parse_calendar_date(raw: &str) -> ApiResult<NaiveDate> {
    parse_calendar_date_in(raw, &Local)
}

/// 解析日期字符串并归一化为 `zone` 中的日历日
///
/// - YYYY-MM-DD / 无偏移的日期时间: 直接取日期部分
/// - 带偏移的 RFC 3339 时间戳: 先换算到 `zone` 再取日期，
///   前端 `JSON.stringify(new Date(2024, 8, 15))` 在 UTC+2 下为
///   "2024-09-14T22:00:00.000Z"，换算后仍是 2024-09-15
pub fn parse_calendar_date_in<Z: TimeZone>(raw: &str, zone: &Z) -> ApiResult<NaiveDate> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(calendar_day_in(&dt, zone));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.calendar_day());
        }
    }

    Err(ApiError::InvalidInput(format!(
        "日期格式错误（应为YYYY-MM-DD）: {}",
        raw
    )))
}

/// 格式化日期 (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 星期编号 (0 = 周日) → Weekday
pub fn weekday_from_index(index: u8) -> ApiResult<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(ApiError::InvalidInput(format!(
            "星期编号超出范围(0-6): {}",
            index
        ))),
    }
}

/// Weekday → 星期编号 (0 = 周日)
pub fn weekday_to_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

// ==========================================
// 输入 DTO
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingUnitDto {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub weekly_hours: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolCalendarDto {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub non_teaching_dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleDto {
    pub weekdays: Vec<u8>,
    pub hours_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningConfigurationDto {
    #[serde(default)]
    pub teaching_units: Vec<TeachingUnitDto>,
    pub school_calendar: SchoolCalendarDto,
    #[serde(default)]
    pub class_schedule: Option<ClassScheduleDto>,
}

impl TeachingUnitDto {
    /// 转换为领域对象，日期按 `zone` 归一化
    pub fn into_domain_in<Z: TimeZone>(self, zone: &Z) -> ApiResult<TeachingUnit> {
        let start = parse_calendar_date_in(&self.start_date, zone)?;
        let end = parse_calendar_date_in(&self.end_date, zone)?;
        Ok(TeachingUnit::new(self.id, self.name, start, end, self.weekly_hours, self.color)?)
    }
}

impl SchoolCalendarDto {
    /// 转换为领域对象，日期按 `zone` 归一化
    pub fn into_domain_in<Z: TimeZone>(self, zone: &Z) -> ApiResult<SchoolCalendar> {
        let start = parse_calendar_date_in(&self.start_date, zone)?;
        let end = parse_calendar_date_in(&self.end_date, zone)?;
        let non_teaching = self
            .non_teaching_dates
            .iter()
            .map(|s| parse_calendar_date_in(s, zone))
            .collect::<ApiResult<Vec<_>>>()?;
        Ok(SchoolCalendar::new(start, end, non_teaching))
    }
}

impl PlanningConfigurationDto {
    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 转换为领域对象，所有日期按 `zone` 归一化
    pub fn into_domain_in<Z: TimeZone>(self, zone: &Z) -> ApiResult<PlanningConfiguration> {
        let units = self
            .teaching_units
            .into_iter()
            .map(|unit| unit.into_domain_in(zone))
            .collect::<ApiResult<Vec<_>>>()?;
        let calendar = self.school_calendar.into_domain_in(zone)?;
        let schedule = match self.class_schedule {
            Some(schedule) => WeeklySchedule::try_from(schedule)?,
            None => WeeklySchedule::default(),
        };
        Ok(PlanningConfiguration::new(units, calendar, schedule)?)
    }
}

impl TryFrom<TeachingUnitDto> for TeachingUnit {
    type Error = ApiError;

    fn try_from(dto: TeachingUnitDto) -> ApiResult<Self> {
        dto.into_domain_in(&Local)
    }
}

impl TryFrom<SchoolCalendarDto> for SchoolCalendar {
    type Error = ApiError;

    fn try_from(dto: SchoolCalendarDto) -> ApiResult<Self> {
        dto.into_domain_in(&Local)
    }
}

impl TryFrom<ClassScheduleDto> for WeeklySchedule {
    type Error = ApiError;

    fn try_from(dto: ClassScheduleDto) -> ApiResult<Self> {
        let weekdays = dto
            .weekdays
            .into_iter()
            .map(weekday_from_index)
            .collect::<ApiResult<Vec<_>>>()?;
        if !dto.hours_per_day.is_finite() || dto.hours_per_day < 0.0 {
            return Err(ApiError::ValidationError(format!(
                "每日课时无效: {}",
                dto.hours_per_day
            )));
        }
        Ok(WeeklySchedule {
            weekdays,
            hours_per_day: dto.hours_per_day,
        })
    }
}

/// 本机时区下的转换（前端与壳层运行在同一台机器上）
impl TryFrom<PlanningConfigurationDto> for PlanningConfiguration {
    type Error = ApiError;

    fn try_from(dto: PlanningConfigurationDto) -> ApiResult<Self> {
        dto.into_domain_in(&Local)
    }
}

// ==========================================
// 输出 DTO
// ==========================================

impl From<&TeachingUnit> for TeachingUnitDto {
    fn from(unit: &TeachingUnit) -> Self {
        Self {
            id: unit.id().to_string(),
            name: unit.name().to_string(),
            start_date: format_date(unit.start_date()),
            end_date: format_date(unit.end_date()),
            weekly_hours: unit.weekly_hours(),
            color: unit.color().to_string(),
        }
    }
}

impl From<&PlanningConfiguration> for PlanningConfigurationDto {
    fn from(config: &PlanningConfiguration) -> Self {
        let calendar = config.school_calendar();
        let schedule = config.weekly_schedule();
        Self {
            teaching_units: config.teaching_units().iter().map(TeachingUnitDto::from).collect(),
            school_calendar: SchoolCalendarDto {
                start_date: format_date(calendar.start_date),
                end_date: format_date(calendar.end_date),
                non_teaching_dates: calendar
                    .non_teaching_dates
                    .iter()
                    .copied()
                    .map(format_date)
                    .collect(),
            },
            class_schedule: Some(ClassScheduleDto {
                weekdays: schedule
                    .weekdays
                    .iter()
                    .copied()
                    .map(weekday_to_index)
                    .collect(),
                hours_per_day: schedule.hours_per_day,
            }),
        }
    }
}

/// 日历日视图（返回给前端）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayView {
    pub date: String,
    pub weekday: u8,
    pub is_teaching_day: bool,
    pub is_weekend: bool,
    pub is_non_teaching: bool,
    pub status: DayStatus,
}

impl From<&CalendarDay> for CalendarDayView {
    fn from(day: &CalendarDay) -> Self {
        Self {
            date: format_date(day.date()),
            weekday: weekday_to_index(day.weekday()),
            is_teaching_day: day.is_teaching_day(),
            is_weekend: day.is_weekend(),
            is_non_teaching: day.is_non_teaching(),
            status: day.status(),
        }
    }
}

/// 日状态图例项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatusLabel {
    pub status: DayStatus,
    pub label: String,
}

impl DayStatusLabel {
    /// 当前语言下的全部图例
    pub fn legend() -> Vec<Self> {
        DayStatus::ALL
            .iter()
            .map(|status| Self {
                status: *status,
                label: status.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    const SAMPLE_JSON: &str = r##"{
        "teachingUnits": [
            {"id": "1", "name": "编程导论", "startDate": "2024-09-15", "endDate": "2024-10-31",
             "weeklyHours": 4, "color": "#3B82F6"}
        ],
        "schoolCalendar": {
            "startDate": "2024-09-15T00:00:00.000Z",
            "endDate": "2025-06-30",
            "nonTeachingDates": ["2024-10-12", "2024-11-01T10:30:00"]
        },
        "classSchedule": {"weekdays": [1, 2, 3, 4, 5], "hoursPerDay": 6}
    }"##;

    #[test]
    fn test_parse_calendar_date_formats() {
        assert_eq!(parse_calendar_date("2024-09-16").unwrap(), d(2024, 9, 16));
        assert_eq!(parse_calendar_date(" 2024-09-16 ").unwrap(), d(2024, 9, 16));
        assert_eq!(parse_calendar_date("2024-09-16T18:00:00").unwrap(), d(2024, 9, 16));
        assert_eq!(parse_calendar_date("2024-09-16 18:00:00.250").unwrap(), d(2024, 9, 16));
        assert!(matches!(
            parse_calendar_date("16/09/2024"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_offset_timestamps_convert_to_zone() {
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus5 = FixedOffset::west_opt(5 * 3600).unwrap();

        // new Date(2024, 8, 15) 在 UTC+2 浏览器中序列化的结果
        let raw = "2024-09-14T22:00:00.000Z";
        assert_eq!(parse_calendar_date_in(raw, &plus2).unwrap(), d(2024, 9, 15));
        assert_eq!(parse_calendar_date_in(raw, &Utc).unwrap(), d(2024, 9, 14));
        assert_eq!(parse_calendar_date_in(raw, &minus5).unwrap(), d(2024, 9, 14));

        let raw = "2024-09-16T23:30:00+02:00";
        assert_eq!(parse_calendar_date_in(raw, &plus2).unwrap(), d(2024, 9, 16));
        assert_eq!(parse_calendar_date_in(raw, &Utc).unwrap(), d(2024, 9, 16));
        assert_eq!(parse_calendar_date_in("2024-09-16T23:30:00+00:00", &plus2).unwrap(), d(2024, 9, 17));

        // 纯日期与无偏移时间不受时区影响
        assert_eq!(parse_calendar_date_in("2024-09-15", &minus5).unwrap(), d(2024, 9, 15));
        assert_eq!(parse_calendar_date_in("2024-09-15T23:00:00", &plus2).unwrap(), d(2024, 9, 15));

        // 默认使用本机时区
        let expected = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Local).date_naive();
        assert_eq!(parse_calendar_date(raw).unwrap(), expected);
    }

    #[test]
    fn test_utc_timestamp_holiday_lands_on_local_day() {
        // UTC+2 前端发送的学年: 2024-09-15(周日) .. 2024-09-20，节假日 2024-09-16(周一)
        let json = r#"{
            "schoolCalendar": {
                "startDate": "2024-09-14T22:00:00.000Z",
                "endDate": "2024-09-19T22:00:00.000Z",
                "nonTeachingDates": ["2024-09-15T22:00:00.000Z"]
            }
        }"#;
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let config = PlanningConfigurationDto::from_json(json)
            .unwrap()
            .into_domain_in(&plus2)
            .unwrap();

        let calendar = config.school_calendar();
        assert_eq!(calendar.start_date, d(2024, 9, 15));
        assert_eq!(calendar.end_date, d(2024, 9, 20));
        assert_eq!(calendar.non_teaching_dates, vec![d(2024, 9, 16)]);

        let days = crate::engine::derive_days(calendar);
        assert!(days[0].is_weekend());
        assert!(days[1].is_non_teaching());
        assert!(!days[1].is_teaching_day());
    }

    #[test]
    fn test_weekday_index_mapping() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
        assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sat);
        assert!(weekday_from_index(7).is_err());
        for i in 0..7u8 {
            assert_eq!(weekday_to_index(weekday_from_index(i).unwrap()), i);
        }
    }

    #[test]
    fn test_configuration_from_json() {
        let dto = PlanningConfigurationDto::from_json(SAMPLE_JSON).unwrap();
        let config = dto.into_domain_in(&Utc).unwrap();

        assert_eq!(config.teaching_units().len(), 1);
        assert_eq!(config.teaching_units()[0].weekly_hours(), 4.0);
        assert_eq!(config.school_calendar().start_date, d(2024, 9, 15));
        assert_eq!(
            config.school_calendar().non_teaching_dates,
            vec![d(2024, 10, 12), d(2024, 11, 1)]
        );
        assert_eq!(config.weekly_schedule().weekdays.len(), 5);
        assert_eq!(config.weekly_schedule().hours_per_day, 6.0);
    }

    #[test]
    fn test_missing_class_schedule_defaults() {
        let json = r#"{"schoolCalendar": {"startDate": "2024-09-15", "endDate": "2024-09-17"}}"#;
        let config = PlanningConfiguration::try_from(PlanningConfigurationDto::from_json(json).unwrap())
            .unwrap();
        assert!(config.teaching_units().is_empty());
        assert!(config.school_calendar().non_teaching_dates.is_empty());
        assert_eq!(config.weekly_schedule(), &WeeklySchedule::default());
    }

    #[test]
    fn test_invalid_unit_range_is_validation_error() {
        let json = r##"{
            "teachingUnits": [{"id": "2", "name": "n", "startDate": "2024-12-20",
                               "endDate": "2024-11-01", "weeklyHours": 6, "color": "#10B981"}],
            "schoolCalendar": {"startDate": "2024-09-15", "endDate": "2025-06-30"}
        }"##;
        let result = PlanningConfiguration::try_from(PlanningConfigurationDto::from_json(json).unwrap());
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_weekday_is_invalid_input() {
        let json = r#"{
            "schoolCalendar": {"startDate": "2024-09-15", "endDate": "2025-06-30"},
            "classSchedule": {"weekdays": [1, 9], "hoursPerDay": 6}
        }"#;
        let result = PlanningConfiguration::try_from(PlanningConfigurationDto::from_json(json).unwrap());
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_configuration_to_dto_uses_iso_dates() {
        let config = PlanningConfigurationDto::from_json(SAMPLE_JSON)
            .unwrap()
            .into_domain_in(&Utc)
            .unwrap();
        let dto = PlanningConfigurationDto::from(&config);
        assert_eq!(dto.school_calendar.start_date, "2024-09-15");
        assert_eq!(dto.school_calendar.non_teaching_dates[1], "2024-11-01");
        assert_eq!(dto.class_schedule.unwrap().weekdays, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_calendar_day_view_json() {
        let day = CalendarDay::derive(d(2024, 9, 15), false);
        let json = serde_json::to_value(CalendarDayView::from(&day)).unwrap();
        assert_eq!(json["date"], "2024-09-15");
        assert_eq!(json["weekday"], 0);
        assert_eq!(json["isWeekend"], true);
        assert_eq!(json["isTeachingDay"], false);
        assert_eq!(json["status"], "WEEKEND");
    }
}
