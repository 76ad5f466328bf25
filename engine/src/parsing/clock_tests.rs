#[cfg(test)]
mod tests {
    use crate::parsing::clock::minute_of_day;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(minute_of_day("12:00 AM"), Some(0));
        assert_eq!(minute_of_day("12:00 PM"), Some(720));
        assert_eq!(minute_of_day("12:30 AM"), Some(30));
        assert_eq!(minute_of_day("12:30 PM"), Some(750));
    }

    #[test]
    fn test_am_hours_unchanged() {
        assert_eq!(minute_of_day("1:00 AM"), Some(60));
        assert_eq!(minute_of_day("9:00 AM"), Some(540));
        assert_eq!(minute_of_day("11:59 AM"), Some(719));
    }

    #[test]
    fn test_pm_hours_add_twelve() {
        assert_eq!(minute_of_day("1:00 PM"), Some(780));
        assert_eq!(minute_of_day("3:15 PM"), Some(915));
        assert_eq!(minute_of_day("11:30 PM"), Some(1410));
    }

    #[test]
    fn test_leading_zero_and_case() {
        assert_eq!(minute_of_day("09:05 AM"), Some(545));
        assert_eq!(minute_of_day("9:05 am"), Some(545));
        assert_eq!(minute_of_day("9:05 pm"), Some(1265));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(minute_of_day("  10:45 AM  "), Some(645));
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(minute_of_day(""), None);
        assert_eq!(minute_of_day("   "), None);
    }

    #[test]
    fn test_wrong_token_shape() {
        assert_eq!(minute_of_day("9:00"), None);
        assert_eq!(minute_of_day("AM"), None);
        assert_eq!(minute_of_day("9:00 AM IST"), None);
        assert_eq!(minute_of_day("garbage"), None);
    }

    #[test]
    fn test_non_numeric_parts() {
        assert_eq!(minute_of_day("nine:00 AM"), None);
        assert_eq!(minute_of_day("9:xx AM"), None);
        assert_eq!(minute_of_day("900 AM"), None);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(minute_of_day("0:30 AM"), None);
        assert_eq!(minute_of_day("13:00 PM"), None);
        assert_eq!(minute_of_day("9:60 AM"), None);
    }

    #[test]
    fn test_unknown_meridiem() {
        assert_eq!(minute_of_day("9:00 XX"), None);
        assert_eq!(minute_of_day("9:00 A.M."), None);
    }
}
