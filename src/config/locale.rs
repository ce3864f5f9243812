use crate::core::number::fixed;
use crate::utils::error::Result;
use crate::utils::validation::{validate_name_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// Number and calendar conventions for rendered labels.
///
/// There is no process-wide locale; every localized formatter takes one of
/// these explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    pub decimal: String,
    pub thousands: String,
    /// Digit group sizes counted from the right; the last one repeats.
    pub grouping: Vec<usize>,
    /// Currency prefix and suffix.
    pub currency: (String, String),
    /// Sunday first.
    pub days: Vec<String>,
    pub short_days: Vec<String>,
    pub months: Vec<String>,
    pub short_months: Vec<String>,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            thousands: ",".to_string(),
            grouping: vec![3],
            currency: ("$".to_string(), String::new()),
            days: names(&[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            short_days: names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            months: names(&[
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            short_months: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
        }
    }
}

impl Locale {
    pub fn german() -> Self {
        Self {
            decimal: ",".to_string(),
            thousands: ".".to_string(),
            grouping: vec![3],
            currency: (String::new(), " €".to_string()),
            days: names(&[
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ]),
            short_days: names(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
            months: names(&[
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ]),
            short_months: names(&[
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ]),
        }
    }

    pub fn from_preset(preset: LocalePreset) -> Self {
        match preset {
            LocalePreset::English => Self::default(),
            LocalePreset::German => Self::german(),
        }
    }

    /// `value` with `decimals` fraction digits, optionally grouped.
    pub fn format_number(&self, value: f64, decimals: usize, grouped: bool) -> String {
        let thousands = grouped.then_some((self.thousands.as_str(), self.grouping.as_slice()));
        fixed(value, decimals, &self.decimal, thousands)
    }

    /// Amount with two decimals between the currency prefix and suffix.
    pub fn format_currency(&self, value: f64) -> String {
        let (prefix, suffix) = &self.currency;
        let amount = fixed(value.abs(), 2, &self.decimal, None);
        let sign = if value < 0.0 && amount.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            "-"
        } else {
            ""
        };
        format!("{}{}{}{}", sign, prefix, amount, suffix)
    }

    // 超出範圍的索引回傳空字串
    pub fn short_day(&self, index: usize) -> &str {
        self.short_days.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn month(&self, index: usize) -> &str {
        self.months.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn short_month(&self, index: usize) -> &str {
        self.short_months.get(index).map(String::as_str).unwrap_or_default()
    }
}

impl Validate for Locale {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("locale.decimal", &self.decimal)?;
        validate_name_list("locale.days", &self.days, 7)?;
        validate_name_list("locale.short_days", &self.short_days, 7)?;
        validate_name_list("locale.months", &self.months, 12)?;
        validate_name_list("locale.short_months", &self.short_months, 12)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LocalePreset {
    #[default]
    English,
    German,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Locale::default().validate().is_ok());
        assert!(Locale::german().validate().is_ok());
    }

    #[test]
    fn test_format_number() {
        let de = Locale::german();
        assert_eq!(de.format_number(1234567.5, 2, true), "1.234.567,50");
        assert_eq!(de.format_number(1234567.5, 1, false), "1234567,5");
        assert_eq!(Locale::default().format_number(-9876.0, 0, true), "-9,876");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(Locale::german().format_currency(12.5), "12,50 €");
        assert_eq!(Locale::german().format_currency(-3.0), "-3,00 €");
        assert_eq!(Locale::default().format_currency(0.5), "$0.50");
    }

    #[test]
    fn test_german_month_names() {
        let de = Locale::german();
        assert_eq!(de.month(2), "März");
        assert_eq!(de.short_month(7), "Aug");
        assert_eq!(de.short_month(12), "");
    }

    #[test]
    fn test_invalid_locale() {
        let mut locale = Locale::german();
        locale.months.pop();
        assert!(locale.validate().is_err());

        let mut locale = Locale::default();
        locale.decimal.clear();
        assert!(locale.validate().is_err());
    }
}
