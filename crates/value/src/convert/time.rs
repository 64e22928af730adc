//! Timestamp parsing and formatting.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Weekday,
};

use crate::value::Timestamp;

/// Where a layout finds its timezone.
#[derive(Debug, Clone, Copy)]
enum Zone {
    /// No zone in the input, interpreted as UTC.
    Utc,
    /// Full RFC 3339 grammar, fractional seconds included.
    Rfc3339,
    /// Numeric offset parsed by the format itself (`%z`).
    Embedded,
    /// Alphabetic abbreviation at a space-separated token, counted from the end.
    Abbreviation { from_end: usize },
}

/// Leading day name. Only its spelling is checked, never the date it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayName {
    Absent,
    Short,
    Long,
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    name: &'static str,
    day: DayName,
    /// Format of whatever follows the day name.
    format: &'static str,
    zone: Zone,
}

/// Ordered pattern table; the first layout that yields a non-zero instant wins.
const LAYOUTS: &[Layout] = &[
    Layout {
        name: "ANSIC",
        day: DayName::Short,
        format: " %b %e %H:%M:%S %Y",
        zone: Zone::Utc,
    },
    Layout {
        name: "RFC3339",
        day: DayName::Absent,
        format: "%Y-%m-%dT%H:%M:%S%.f%:z",
        zone: Zone::Rfc3339,
    },
    Layout {
        name: "RFC822",
        day: DayName::Absent,
        format: "%d %b %y %H:%M",
        zone: Zone::Abbreviation { from_end: 0 },
    },
    Layout {
        name: "RFC822Z",
        day: DayName::Absent,
        format: "%d %b %y %H:%M %z",
        zone: Zone::Embedded,
    },
    Layout {
        name: "RFC850",
        day: DayName::Long,
        format: ", %d-%b-%y %H:%M:%S",
        zone: Zone::Abbreviation { from_end: 0 },
    },
    Layout {
        name: "RFC1123",
        day: DayName::Short,
        format: ", %d %b %Y %H:%M:%S",
        zone: Zone::Abbreviation { from_end: 0 },
    },
    Layout {
        name: "RFC1123Z",
        day: DayName::Short,
        format: ", %d %b %Y %H:%M:%S %z",
        zone: Zone::Embedded,
    },
    Layout {
        name: "UnixDate",
        day: DayName::Short,
        format: " %b %e %H:%M:%S %Y",
        zone: Zone::Abbreviation { from_end: 1 },
    },
    Layout {
        name: "DateTime",
        day: DayName::Absent,
        format: "%Y-%m-%d %H:%M:%S",
        zone: Zone::Utc,
    },
    Layout {
        name: "DateOnly",
        day: DayName::Absent,
        format: "%Y-%m-%d",
        zone: Zone::Utc,
    },
];

/// The timestamp kind's zero value: 0001-01-01T00:00:00Z.
pub fn zero_time() -> Timestamp {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc().fixed_offset())
        .unwrap_or_default()
}

/// Interpret an epoch-second count in the local timezone.
pub(crate) fn from_epoch(secs: i64) -> Option<Timestamp> {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|t| t.fixed_offset())
}

/// Try every layout in order.
pub(crate) fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = fold_spaces(s)?;
    let zero = zero_time();
    LAYOUTS.iter().find_map(|layout| {
        let parsed = parse_with(layout, &s).filter(|t| *t != zero)?;
        tracing::trace!(layout = layout.name, input = %s, "timestamp matched");
        Some(parsed)
    })
}

/// Collapse interior runs of `' '` into one.
///
/// Edge spaces and any other whitespace reject the input.
fn fold_spaces(s: &str) -> Option<String> {
    if s.starts_with(' ') || s.ends_with(' ') {
        return None;
    }
    if s.chars().any(|c| c.is_whitespace() && c != ' ') {
        return None;
    }
    Some(s.split(' ').filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" "))
}

fn parse_with(layout: &Layout, s: &str) -> Option<Timestamp> {
    let s = strip_day_name(s, layout.day)?;
    match layout.zone {
        Zone::Rfc3339 => DateTime::parse_from_rfc3339(s).ok(),
        Zone::Embedded => DateTime::parse_from_str(s, layout.format).ok(),
        Zone::Utc => parse_naive(s, layout.format).map(|n| n.and_utc().fixed_offset()),
        Zone::Abbreviation { from_end } => {
            let mut tokens: Vec<&str> = s.split(' ').filter(|t| !t.is_empty()).collect();
            let at = tokens.len().checked_sub(from_end + 1)?;
            let offset = abbreviation_offset(tokens.remove(at))?;
            let naive = parse_naive(&tokens.join(" "), layout.format)?;
            offset.from_local_datetime(&naive).single()
        }
    }
}

/// Remove a leading day name, or fail when it is not one.
fn strip_day_name(s: &str, day: DayName) -> Option<&str> {
    let len = match day {
        DayName::Absent => return Some(s),
        DayName::Short => 3,
        DayName::Long => s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len())
            .max(4),
    };
    let (name, rest) = s.split_at_checked(len)?;
    name.parse::<Weekday>().ok()?;
    Some(rest)
}

fn parse_naive(s: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, format).ok().or_else(|| {
        NaiveDate::parse_from_str(s, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// Offset for a zone abbreviation.
///
/// UTC aliases and the North American zones named by RFC 822 resolve to their
/// offsets; any other 3-5 letter abbreviation is accepted at offset zero.
///
/// The table is fixed and ignores the local timezone. Parsers that consult the
/// local zone database instead read `MST` at offset zero on a UTC host, where
/// this one reads it as `-07:00`.
fn abbreviation_offset(abbr: &str) -> Option<FixedOffset> {
    const HOUR: i32 = 3600;

    if !(1..=5).contains(&abbr.len()) || !abbr.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let hours = match abbr.to_ascii_uppercase().as_str() {
        "UT" | "UTC" | "GMT" | "Z" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        _ if abbr.len() >= 3 => 0,
        _ => return None,
    };
    FixedOffset::east_opt(hours * HOUR)
}

/// RFC 3339 with nanoseconds, trailing fractional zeros trimmed.
pub(crate) fn format_rfc3339_nano(ts: &Timestamp) -> String {
    let mut out = ts.format("%Y-%m-%dT%H:%M:%S").to_string();

    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let frac = format!("{nanos:09}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    let offset = ts.offset().local_minus_utc();
    if offset == 0 {
        out.push('Z');
    } else {
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.unsigned_abs() / 60;
        out.push_str(&format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60));
    }
    out
}
