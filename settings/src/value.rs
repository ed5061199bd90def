/// An enumeration that can be stored in the settings registry.
///
/// Values are written by variant name. Reading accepts the name (exact case,
/// surrounding whitespace ignored) or the variant's ordinal as a decimal
/// string, so files written with either form decode the same way.
pub trait SettingEnum: Copy + PartialEq + Sized + 'static {
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    fn ordinal(self) -> i64;

    fn from_setting_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if let Some(found) = Self::VARIANTS.iter().copied().find(|v| v.name() == trimmed) {
            return Some(found);
        }
        let ordinal = trimmed.parse::<i64>().ok()?;
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.ordinal() == ordinal)
    }
}

pub(crate) fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shade {
        Light,
        Dark,
    }

    impl SettingEnum for Shade {
        const VARIANTS: &'static [Self] = &[Shade::Light, Shade::Dark];

        fn name(self) -> &'static str {
            match self {
                Shade::Light => "Light",
                Shade::Dark => "Dark",
            }
        }

        fn ordinal(self) -> i64 {
            match self {
                Shade::Light => 0,
                Shade::Dark => 1,
            }
        }
    }

    #[test]
    fn bool_parsing_ignores_case_and_padding() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn int_parsing_rejects_overflow() {
        assert_eq!(parse_int(" 42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("99999999999"), None);
        assert_eq!(parse_int("4x"), None);
    }

    #[test]
    fn enum_decodes_name_or_ordinal() {
        assert_eq!(Shade::from_setting_str("Dark"), Some(Shade::Dark));
        assert_eq!(Shade::from_setting_str(" Light "), Some(Shade::Light));
        assert_eq!(Shade::from_setting_str("1"), Some(Shade::Dark));
        assert_eq!(Shade::from_setting_str("dark"), None);
        assert_eq!(Shade::from_setting_str("7"), None);
    }
}
