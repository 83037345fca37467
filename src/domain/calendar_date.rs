// ==========================================
// 学期教学计划日历 - 日历日归一化
// ==========================================
// 红线: 所有日期比较必须先截断到日粒度,不依赖时间戳相等
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// 可归一化为日历日的日期类型
///
/// 派生与切换都以 `calendar_day()` 的结果做比较，
/// 调用方传入带时间分量的值时，时间部分被忽略。
pub trait CalendarDate {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// 带时区的时间表示一个时刻，取本机时区下的日历日
impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        calendar_day_in(self, &Local)
    }
}

/// 时刻在指定时区下的日历日
pub fn calendar_day_in<Tz: TimeZone, Z: TimeZone>(at: &DateTime<Tz>, zone: &Z) -> NaiveDate {
    at.with_timezone(zone).date_naive()
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_naive_datetime_truncates_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 16)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(dt.calendar_day(), NaiveDate::from_ymd_opt(2024, 9, 16).unwrap());
    }

    #[test]
    fn test_calendar_day_in_zone() {
        // 2024-09-15 22:00 UTC == 2024-09-16 00:00 +02:00
        let at = Utc.with_ymd_and_hms(2024, 9, 15, 22, 0, 0).unwrap();
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus5 = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(calendar_day_in(&at, &plus2), NaiveDate::from_ymd_opt(2024, 9, 16).unwrap());
        assert_eq!(calendar_day_in(&at, &Utc), NaiveDate::from_ymd_opt(2024, 9, 15).unwrap());
        assert_eq!(calendar_day_in(&at, &minus5), NaiveDate::from_ymd_opt(2024, 9, 15).unwrap());
    }

    #[test]
    fn test_offset_datetime_uses_machine_local_day() {
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = plus2.with_ymd_and_hms(2024, 9, 16, 1, 0, 0).unwrap();
        assert_eq!(at.calendar_day(), at.with_timezone(&Local).date_naive());
        assert_eq!(at.calendar_day(), at.with_timezone(&Utc).calendar_day());
    }
}
