//! Date and year captions shown around the dial

use chrono::{Locale, NaiveDate};

use crate::clock::TimeSample;

/// Genitive month names, as used after a day number ("17 Октября").
const MONTHS_GENITIVE: [&str; 12] = [
    "Января",
    "Февраля",
    "Марта",
    "Апреля",
    "Мая",
    "Июня",
    "Июля",
    "Августа",
    "Сентября",
    "Октября",
    "Ноября",
    "Декабря",
];

/// How the date caption spells the month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLocale {
    /// Capitalized Russian genitive names. Used for Russian hosts and
    /// whenever the host locale cannot be determined.
    RussianGenitive,
    /// Month names from the host's locale data.
    Localized(Locale),
}

impl DateLocale {
    /// Host locale for dates: `LC_TIME` first, then the system's preferred locale.
    pub fn detect() -> Self {
        std::env::var("LC_TIME")
            .ok()
            .filter(|tag| !tag.is_empty())
            .or_else(sys_locale::get_locale)
            .map_or(Self::RussianGenitive, |tag| Self::from_tag(&tag))
    }

    /// Parses a POSIX (`de_DE.UTF-8`, `fr_FR@euro`) or BCP 47 (`en-US`) locale name.
    pub fn from_tag(tag: &str) -> Self {
        let name = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");
        if name.is_empty() || name == "C" || name == "POSIX" || name.starts_with("ru") {
            return Self::RussianGenitive;
        }
        Locale::try_from(name.as_str()).map_or(Self::RussianGenitive, Self::Localized)
    }
}

/// Month name for `month` in 1..=12, empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS_GENITIVE.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// "<day> <month>" caption shown under the clock.
pub fn date_label(sample: &TimeSample, locale: DateLocale) -> String {
    let date = NaiveDate::from_ymd_opt(sample.year, sample.month, sample.day);
    match (locale, date) {
        (DateLocale::Localized(locale), Some(date)) => {
            date.format_localized("%-d %B", locale).to_string()
        }
        _ => format!("{} {}", sample.day, month_name(sample.month)),
    }
}

/// Year caption shown above the clock.
pub fn year_label(sample: &TimeSample) -> String {
    sample.year.to_string()
}
