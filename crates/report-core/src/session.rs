use chrono::{NaiveDateTime, TimeDelta};

use crate::error::ParseError;

/// Timestamp format used by the input file, e.g. `14.10.2020 15:35:41`.
///
/// Parsing is culture-invariant; there is no locale ambiguity in the input.
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Number of `;`-separated fields in one input line.
const FIELD_COUNT: usize = 6;

/// One row of call-center activity: an operator in a given state, on a
/// project, for a bounded time interval.
///
/// Created only by [`Session::parse`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// When the session opened (naive local wall-clock time).
    pub start: NaiveDateTime,
    /// When the session closed. The source does not guarantee `start <= end`.
    pub end: NaiveDateTime,
    /// Project the operator was working on.
    pub project: String,
    /// Operator full name as it appears in the input.
    pub operator: String,
    /// Raw state label; matched against the known set during aggregation.
    pub state: String,
    /// Time spent in `state`, as whole seconds from the input.
    pub duration: TimeDelta,
}

impl Session {
    /// Parse one input line of the form
    /// `start;end;project;operator;state;duration_seconds`.
    ///
    /// Returns a typed [`ParseError`] on wrong field count, a malformed
    /// timestamp, or a non-integer duration. Never panics.
    pub fn parse(line: &str) -> Result<Session, ParseError> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let start = NaiveDateTime::parse_from_str(fields[0], DATE_TIME_FORMAT).map_err(
            |source| ParseError::Timestamp {
                field: "start",
                source,
            },
        )?;
        let end = NaiveDateTime::parse_from_str(fields[1], DATE_TIME_FORMAT).map_err(
            |source| ParseError::Timestamp {
                field: "end",
                source,
            },
        )?;

        let seconds: i64 = fields[5]
            .trim()
            .parse()
            .map_err(|source| ParseError::Duration {
                value: fields[5].to_string(),
                source,
            })?;

        Ok(Session {
            start,
            end,
            project: fields[2].to_string(),
            operator: fields[3].to_string(),
            state: fields[4].to_string(),
            duration: TimeDelta::seconds(seconds),
        })
    }
}
