//! Quantized calendar values and their display labels
//!
//! The historical table encodes weekday and month as evenly spaced floats in
//! [0, 1]: Monday is 0.0 and Sunday 1.0 in steps of 1/6, January is 0.0 and
//! December 1.0 in steps of 1/11. Values are resolved through enums and a
//! nearest-anchor search, never by float equality.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Display language for calendar labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Locale::English),
            "russian" | "ru" => Ok(Locale::Russian),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// A calendar enumeration backed by evenly spaced anchors in [0, 1]
pub trait QuantizedCalendar: Copy + PartialEq + Sized + 'static {
    /// Every anchor, in ascending quantized order
    const ALL: &'static [Self];

    /// Name used in error messages
    const KIND: &'static str;

    /// Position within `ALL`
    fn index(self) -> usize;

    /// `(english, russian)` labels
    fn labels(self) -> (&'static str, &'static str);

    /// The anchor's float value, `index / (n - 1)`
    fn quantized(self) -> f64 {
        self.index() as f64 / (Self::ALL.len() - 1) as f64
    }

    /// Display label in the given locale
    fn label(self, locale: Locale) -> &'static str {
        let (english, russian) = self.labels();
        match locale {
            Locale::English => english,
            Locale::Russian => russian,
        }
    }

    /// Anchor closest to `value`; equal distances keep the earlier anchor
    fn nearest(value: f64) -> Self {
        let mut best = Self::ALL[0];
        let mut best_distance = (best.quantized() - value).abs();

        for &anchor in &Self::ALL[1..] {
            let distance = (anchor.quantized() - value).abs();
            if distance < best_distance {
                best = anchor;
                best_distance = distance;
            }
        }

        best
    }

    /// Anchor for a label in any locale, ignoring case
    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL.iter().copied().find(|anchor| {
            let (english, russian) = anchor.labels();
            english.to_lowercase() == wanted || russian.to_lowercase() == wanted
        })
    }

    /// Like `from_label`, reporting unknown labels as errors
    fn parse_label(label: &str) -> Result<Self> {
        Self::from_label(label).ok_or_else(|| PricingError::UnknownLabel {
            kind: Self::KIND,
            label: label.to_string(),
        })
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday = 0,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const WEEKDAY_LABELS: [(&str, &str); 7] = [
    ("Monday", "Понедельник"),
    ("Tuesday", "Вторник"),
    ("Wednesday", "Среда"),
    ("Thursday", "Четверг"),
    ("Friday", "Пятница"),
    ("Saturday", "Суббота"),
    ("Sunday", "Воскресенье"),
];

impl QuantizedCalendar for Weekday {
    const ALL: &'static [Self] = &[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    const KIND: &'static str = "weekday";

    fn index(self) -> usize {
        self as usize
    }

    fn labels(self) -> (&'static str, &'static str) {
        WEEKDAY_LABELS[self.index()]
    }
}

/// Month of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January = 0,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTH_LABELS: [(&str, &str); 12] = [
    ("January", "Январь"),
    ("February", "Февраль"),
    ("March", "Март"),
    ("April", "Апрель"),
    ("May", "Май"),
    ("June", "Июнь"),
    ("July", "Июль"),
    ("August", "Август"),
    ("September", "Сентябрь"),
    ("October", "Октябрь"),
    ("November", "Ноябрь"),
    ("December", "Декабрь"),
];

impl QuantizedCalendar for Month {
    const ALL: &'static [Self] = &[
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    const KIND: &'static str = "month";

    fn index(self) -> usize {
        self as usize
    }

    fn labels(self) -> (&'static str, &'static str) {
        MONTH_LABELS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_anchors_evenly_spaced() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert!((day.quantized() - i as f64 / 6.0).abs() < 1e-15);
        }
        for (i, month) in Month::ALL.iter().enumerate() {
            assert!((month.quantized() - i as f64 / 11.0).abs() < 1e-15);
        }
        assert_eq!(Weekday::Monday.quantized(), 0.0);
        assert_eq!(Weekday::Sunday.quantized(), 1.0);
        assert_eq!(Month::December.quantized(), 1.0);
    }

    #[test]
    fn test_exact_anchor_resolves_to_itself() {
        for &day in Weekday::ALL {
            assert_eq!(Weekday::nearest(day.quantized()), day);
        }
        for &month in Month::ALL {
            assert_eq!(Month::nearest(month.quantized()), month);
        }
    }

    #[rstest]
    #[case(0.333333, Weekday::Wednesday)]
    #[case(0.166667, Weekday::Tuesday)]
    #[case(0.95, Weekday::Sunday)]
    #[case(-0.2, Weekday::Monday)]
    #[case(1.7, Weekday::Sunday)]
    fn test_weekday_nearest(#[case] value: f64, #[case] expected: Weekday) {
        assert_eq!(Weekday::nearest(value), expected);
    }

    #[rstest]
    #[case(0.090909, Month::February)]
    #[case(0.545455, Month::July)]
    #[case(0.47, Month::June)]
    fn test_month_nearest(#[case] value: f64, #[case] expected: Month) {
        assert_eq!(Month::nearest(value), expected);
    }

    #[test]
    fn test_midpoint_tie_keeps_earlier_anchor() {
        let midpoint = (Weekday::Monday.quantized() + Weekday::Tuesday.quantized()) / 2.0;
        assert_eq!(Weekday::nearest(midpoint), Weekday::Monday);
    }

    #[test]
    fn test_wednesday_labels() {
        let day = Weekday::nearest(0.333333);
        assert_eq!(day.label(Locale::English), "Wednesday");
        assert_eq!(day.label(Locale::Russian), "Среда");
    }

    #[rstest]
    #[case("Wednesday", Weekday::Wednesday)]
    #[case("friday", Weekday::Friday)]
    #[case("СРЕДА", Weekday::Wednesday)]
    #[case(" воскресенье ", Weekday::Sunday)]
    fn test_weekday_from_label(#[case] label: &str, #[case] expected: Weekday) {
        assert_eq!(Weekday::from_label(label), Some(expected));
    }

    #[test]
    fn test_month_label_round_trip() {
        for &month in Month::ALL {
            for locale in [Locale::English, Locale::Russian] {
                assert_eq!(Month::from_label(month.label(locale)), Some(month));
            }
        }
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let err = Month::parse_label("Smarch").unwrap_err();
        assert!(matches!(err, PricingError::UnknownLabel { kind: "month", .. }));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("RU".parse::<Locale>(), Ok(Locale::Russian));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::English));
        assert!("klingon".parse::<Locale>().is_err());
    }
}
