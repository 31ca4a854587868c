use chrono::{Datelike, Local, NaiveDate};

/* Bank exports are day first. ISO dates are accepted too because some exports switch format */
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // Some exports append a time to the date
    let date_part = value.split_whitespace().next()?;
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/* Key used for monthly aggregations: YYYY-MM */
pub fn month_key(date: &NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_date("05/03/2024"), expected);
        assert_eq!(parse_date(" 05-03-2024 "), expected);
        assert_eq!(parse_date("05.03.2024"), expected);
        assert_eq!(parse_date("2024-03-05"), expected);
        assert_eq!(parse_date("05/03/2024 00:00:00"), expected);
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(month_key(&date), "2024-03");
    }
}
