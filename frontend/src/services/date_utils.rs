use chrono::{NaiveDate, Utc};
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn get_current_date() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| Utc::now().date_naive())
}
