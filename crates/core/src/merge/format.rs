//! Value formatting rules applied to resolved leaf values.

use chrono::{Datelike, NaiveDate};

use super::context::ContextValue;
use super::engine::MergeOptions;

/// Indonesian civil-calendar month names, as printed on official letters.
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Outcome of formatting a resolved value.
pub(crate) enum Formatted {
    Text(String),
    /// The path resolved, but to a non-scalar shape.
    NotScalar(&'static str),
}

pub(crate) fn format_value(value: &ContextValue, options: &MergeOptions) -> Formatted {
    match value {
        // Present-but-null renders empty; distinct from an absent path.
        ContextValue::Null => Formatted::Text(String::new()),
        ContextValue::Bool(b) => {
            let (yes, no) = &options.boolean_words;
            Formatted::Text(if *b { yes.clone() } else { no.clone() })
        }
        ContextValue::Int(i) => Formatted::Text(i.to_string()),
        ContextValue::Float(f) => Formatted::Text(f.to_string()),
        ContextValue::String(s) => Formatted::Text(format_string(s)),
        ContextValue::Date(d) => Formatted::Text(format_date(*d, options)),
        ContextValue::List(_) => Formatted::NotScalar("value is a list, not a scalar"),
        ContextValue::Object(_) => {
            Formatted::NotScalar("value is a nested object, not a scalar")
        }
    }
}

/// Enumerated tokens (`penduduk_dalam_desa`) are humanized to
/// `PENDUDUK DALAM DESA`; anything else is free text and passes through.
fn format_string(value: &str) -> String {
    if is_enum_token(value) {
        value.replace('_', " ").to_uppercase()
    } else {
        value.to_string()
    }
}

/// An enum token is how the record layer spells closed choices: ASCII
/// lowercase/digit segments joined by single underscores.
fn is_enum_token(value: &str) -> bool {
    value.contains('_')
        && value.split('_').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Default: day, full month name, year ("18 November 2025"), the fixed form
/// used in letter bodies. `options.date_format` substitutes a chrono format
/// string, validated up front by the engine.
fn format_date(date: NaiveDate, options: &MergeOptions) -> String {
    if let Some(fmt) = &options.date_format {
        return date.format(fmt).to_string();
    }
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
