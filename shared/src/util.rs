/// Generate a new scenario ID
pub fn new_scenario_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Format an integer with South-Asian digit grouping.
///
/// The rightmost three digits form one group, every group to the left of
/// it has two digits: `12345678` -> `1,23,45,678`.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    format!("{sign}{}", groups.join(","))
}

/// Format a currency amount rounded to whole units, e.g. `SAR 11,97,842`
pub fn format_currency(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, format_grouped(amount.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_small_values() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
    }

    #[test]
    fn test_format_grouped_lakh_crore() {
        assert_eq!(format_grouped(100000), "1,00,000");
        assert_eq!(format_grouped(1197842), "11,97,842");
        assert_eq!(format_grouped(12345678), "1,23,45,678");
        assert_eq!(format_grouped(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(format_grouped(-1234567), "-12,34,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("SAR", 1078057.35), "SAR 10,78,057");
    }

    #[test]
    fn test_new_scenario_id_is_unique() {
        assert_ne!(new_scenario_id(), new_scenario_id());
    }
}
