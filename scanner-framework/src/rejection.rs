use common_framework::Position;
use std::fmt;

/// The grammar clause a rule is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Year,
    DateSeparator,
    Month,
    Day,
    TimeDesignator,
    Hour,
    TimeSeparator,
    Minute,
    Second,
    TimeZone,
    TimeZoneHour,
    TimeZoneSeparator,
    TimeZoneMinute,
    Newline,
    EndOfLine,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Clause::Year => "year",
            Clause::DateSeparator => "date separator",
            Clause::Month => "month",
            Clause::Day => "day",
            Clause::TimeDesignator => "time designator",
            Clause::Hour => "hour",
            Clause::TimeSeparator => "time separator",
            Clause::Minute => "minute",
            Clause::Second => "second",
            Clause::TimeZone => "time zone designator",
            Clause::TimeZoneHour => "time zone hour",
            Clause::TimeZoneSeparator => "time zone separator",
            Clause::TimeZoneMinute => "time zone minute",
            Clause::Newline => "newline",
            Clause::EndOfLine => "end of line",
        };
        f.write_str(name)
    }
}

/// Why a line was rejected.
///
/// Callers that only need accept/reject should use
/// [`Validator::is_valid`](crate::Validator::is_valid); this type exists so
/// tests and trace logs can tell which clause failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{clause}: unexpected {} at {position}", describe(.found))]
    Unexpected {
        clause: Clause,
        position: Position,
        found: Option<u8>,
    },

    #[error("{clause}: {value:02} outside {min:02}..={max:02} at {position}")]
    OutOfRange {
        clause: Clause,
        position: Position,
        value: u8,
        min: u8,
        max: u8,
    },
}

impl Rejection {
    /// Returns the clause that failed.
    pub fn clause(&self) -> Clause {
        match self {
            Rejection::Unexpected { clause, .. } | Rejection::OutOfRange { clause, .. } => *clause,
        }
    }

    /// Returns where the failing clause started or stopped.
    pub fn position(&self) -> Position {
        match self {
            Rejection::Unexpected { position, .. } | Rejection::OutOfRange { position, .. } => {
                *position
            }
        }
    }
}

fn describe(found: &Option<u8>) -> String {
    match found {
        None => "end of input".to_string(),
        Some(byte) if byte.is_ascii_graphic() => format!("'{}'", char::from(*byte)),
        Some(byte) => format!("byte 0x{byte:02x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display_unexpected() {
        let rejection = Rejection::Unexpected {
            clause: Clause::DateSeparator,
            position: Position::at(5, 4),
            found: Some(b'/'),
        };
        assert_eq!(
            rejection.to_string(),
            "date separator: unexpected '/' at column 5"
        );
    }

    #[test]
    fn test_rejection_display_end_of_input() {
        let rejection = Rejection::Unexpected {
            clause: Clause::Year,
            position: Position::new(),
            found: None,
        };
        assert_eq!(rejection.to_string(), "year: unexpected end of input at column 1");
    }

    #[test]
    fn test_rejection_display_control_byte() {
        let rejection = Rejection::Unexpected {
            clause: Clause::Year,
            position: Position::new(),
            found: Some(b'\n'),
        };
        assert_eq!(rejection.to_string(), "year: unexpected byte 0x0a at column 1");
    }

    #[test]
    fn test_rejection_display_out_of_range() {
        let rejection = Rejection::OutOfRange {
            clause: Clause::Month,
            position: Position::at(6, 5),
            value: 13,
            min: 1,
            max: 12,
        };
        assert_eq!(rejection.to_string(), "month: 13 outside 01..=12 at column 6");
        assert_eq!(rejection.clause(), Clause::Month);
        assert_eq!(rejection.position(), Position::at(6, 5));
    }
}
