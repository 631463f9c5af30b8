/// Formats `part / total` as a percentage with two decimals, e.g. `"50.00%"`.
///
/// A zero total yields `"0.00%"`. Halfway values round up, so 1 of 32 is
/// `"3.13%"`.
pub fn percentage(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    let (part, total) = (part as u128, total as u128);
    let hundredths = (part * 20_000 + total) / (2 * total);
    format!("{}.{:02}%", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::percentage;
    use test_case::test_case;

    #[test_case(0, 0 => "0.00%"; "empty total")]
    #[test_case(1, 2 => "50.00%"; "half")]
    #[test_case(1, 1 => "100.00%"; "all")]
    #[test_case(0, 4 => "0.00%"; "none of four")]
    #[test_case(1, 3 => "33.33%"; "one third rounds down")]
    #[test_case(2, 3 => "66.67%"; "two thirds rounds up")]
    #[test_case(1, 32 => "3.13%"; "tie rounds up")]
    #[test_case(5, 32 => "15.63%"; "larger tie rounds up")]
    #[test_case(1, 8 => "12.50%"; "exact three digits")]
    fn formats_two_decimals(part: usize, total: usize) -> String {
        percentage(part, total)
    }
}
