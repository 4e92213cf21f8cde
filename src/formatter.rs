/// Default thousands separator: U+00A0 NO-BREAK SPACE, as used by the ru-RU
/// locale.
pub const RU_GROUP_SEPARATOR: &str = "\u{a0}";

/// Default currency suffix appended after the grouped amount.
pub const RUBLE_SUFFIX: &str = " ₽";

/// Renders whole-ruble amounts for display.
///
/// * `group_separator` — inserted between groups of three digits, counting
///   from the right. An empty separator disables grouping.
/// * `currency_suffix` — appended verbatim after the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    pub group_separator: String,
    pub currency_suffix: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            group_separator: RU_GROUP_SEPARATOR.to_string(),
            currency_suffix: RUBLE_SUFFIX.to_string(),
        }
    }
}

impl PriceFormatter {
    pub fn new(group_separator: impl Into<String>, currency_suffix: impl Into<String>) -> Self {
        Self {
            group_separator: group_separator.into(),
            currency_suffix: currency_suffix.into(),
        }
    }

    /// Formats `amount` with thousands grouping and the currency suffix
    /// (e.g. `139990` → `"139 990 ₽"`).
    pub fn format(&self, amount: u64) -> String {
        let mut s = group_thousands(amount, &self.group_separator);
        s.push_str(&self.currency_suffix);
        s
    }
}

/// Inserts `separator` between every group of three digits of `value`.
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    if separator.is_empty() || digits.len() <= 3 {
        return digits;
    }

    let mut result = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(ch);
    }
    result
}
