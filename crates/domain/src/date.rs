use chrono::prelude::*;
use chrono_tz::Tz;

pub fn is_valid_date(datestr: &str) -> anyhow::Result<(i32, u32, u32)> {
    let datestr = String::from(datestr);
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr));
    }
    let year = dates[0].parse();
    let month = dates[1].parse();
    let day = dates[2].parse();

    if year.is_err() || month.is_err() || day.is_err() {
        return Err(anyhow::Error::msg(datestr));
    }

    let year = year.unwrap();
    let month = month.unwrap();
    let day = day.unwrap();
    if !(1970..=2100).contains(&year) || month < 1 || month > 12 {
        return Err(anyhow::Error::msg(datestr));
    }

    let month_length = get_month_length(year, month);

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr));
    }

    Ok((year, month, day))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// `day` clamped to the last day of the given month. A day-of-month that
/// only exists in longer months (29, 30, 31) never rolls over into the
/// following month.
pub fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    day.min(get_month_length(year, month))
}

/// `(year, month)` shifted forwards by `months` calendar months.
pub fn add_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let months_from_jan = month - 1 + months;
    (year + (months_from_jan / 12) as i32, months_from_jan % 12 + 1)
}

/// Calendar date of the given timestamp in the given timezone.
pub fn date_of_timestamp(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    tz.timestamp_millis(timestamp_millis).date().naive_local()
}
