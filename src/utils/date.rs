use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, or the keyword `today`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day covered by a single period token:
/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Some((d, d));
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Some((first, last_day_of_month(first.year(), first.month())?));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Some((
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ));
    }

    None
}

/// Resolve a period expression into inclusive date bounds.
///
/// Accepts a single token (`YYYY-MM-DD`, `YYYY-MM`, `YYYY`) or a range
/// `A:B`, spanning from the first day of `A` to the last day of `B`.
pub fn resolve_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    let (start, end) = match p.split_once(':') {
        Some((a, b)) => {
            let (start, _) = period_bounds(a.trim()).ok_or_else(invalid)?;
            let (_, end) = period_bounds(b.trim()).ok_or_else(invalid)?;
            (start, end)
        }
        None => period_bounds(p.trim()).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(invalid());
    }
    Ok((start, end))
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    resolve_period(&t.format("%Y-%m").to_string())
}

/// Every date from `start` to `end`, both included.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Dates of an optional period; defaults to the current month.
pub fn period_dates(period: Option<&str>) -> AppResult<Vec<NaiveDate>> {
    let (start, end) = match period {
        Some(p) => resolve_period(p)?,
        None => current_month_bounds()?,
    };
    Ok(dates_between(start, end))
}
