use chrono::{DateTime, Local};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a zero-based month index (0 = January).
pub fn month_name(month0: u32) -> &'static str {
    MONTHS[(month0 as usize) % 12]
}

/// Short local timestamp for list output (`YYYY-MM-DD HH:MM`).
pub fn short_stamp(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_is_complete() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(4), "May");
        assert_eq!(month_name(11), "December");
    }
}
