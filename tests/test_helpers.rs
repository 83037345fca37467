// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的计划配置、临时计划文件等
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;
use term_planner::domain::{PlanningConfiguration, SchoolCalendar, TeachingUnit, WeeklySchedule};

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 2024-09-15 .. 2025-06-30 学年的节假日
pub fn school_year_holidays() -> Vec<NaiveDate> {
    vec![
        d(2024, 10, 12),
        d(2024, 11, 1),
        d(2024, 12, 6),
        d(2024, 12, 8),
        d(2024, 12, 25),
        d(2025, 1, 1),
        d(2025, 1, 6),
    ]
}

/// 完整学年计划配置（三个教学单元）
pub fn create_school_year_configuration() -> PlanningConfiguration {
    let units = vec![
        TeachingUnit::new("1", "编程导论", d(2024, 9, 15), d(2024, 10, 31), 4.0, "#3B82F6").unwrap(),
        TeachingUnit::new("2", "数据结构", d(2024, 11, 1), d(2024, 12, 20), 6.0, "#10B981").unwrap(),
        TeachingUnit::new("3", "数据库", d(2025, 1, 8), d(2025, 2, 28), 5.0, "#F59E0B").unwrap(),
    ];

    PlanningConfiguration::new(
        units,
        SchoolCalendar::new(d(2024, 9, 15), d(2025, 6, 30), school_year_holidays()),
        WeeklySchedule {
            hours_per_day: 6.0,
            ..WeeklySchedule::default()
        },
    )
    .unwrap()
}

/// 简单区间配置（无教学单元）
pub fn create_range_configuration(
    start: NaiveDate,
    end: NaiveDate,
    non_teaching: Vec<NaiveDate>,
) -> PlanningConfiguration {
    PlanningConfiguration::new(
        Vec::new(),
        SchoolCalendar::new(start, end, non_teaching),
        WeeklySchedule::default(),
    )
    .unwrap()
}

/// 学年计划 JSON（与前端格式一致）
pub const SCHOOL_YEAR_JSON: &str = r##"{
    "teachingUnits": [
        {"id": "1", "name": "编程导论", "startDate": "2024-09-15", "endDate": "2024-10-31",
         "weeklyHours": 4, "color": "#3B82F6"},
        {"id": "2", "name": "数据结构", "startDate": "2024-11-01", "endDate": "2024-12-20",
         "weeklyHours": 6, "color": "#10B981"},
        {"id": "3", "name": "数据库", "startDate": "2025-01-08", "endDate": "2025-02-28",
         "weeklyHours": 5, "color": "#F59E0B"}
    ],
    "schoolCalendar": {
        "startDate": "2024-09-15",
        "endDate": "2025-06-30",
        "nonTeachingDates": ["2024-10-12", "2024-11-01", "2024-12-06", "2024-12-08",
                             "2024-12-25", "2025-01-01", "2025-01-06"]
    },
    "classSchedule": {"weekdays": [1, 2, 3, 4, 5], "hoursPerDay": 6}
}"##;

/// 写入临时计划文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn create_planning_file(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
