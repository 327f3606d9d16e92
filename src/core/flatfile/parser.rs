use chrono::NaiveDate;
use tracing::warn;

use super::layout::{ACTOR_BLOCK_TOKEN, COLUMN_DELIMITER, DATE_FORMAT, HEADER_TOKEN};
use crate::models::{Actor, Movie};
use crate::utils::RecordError;

/// A record-shaped line that failed field conversion and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based.
    pub line_number: usize,
    pub line: String,
    pub error: RecordError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// In file order.
    pub movies: Vec<Movie>,
    pub rejected: Vec<RejectedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    TopLevel,
    ActorBlock,
}

fn is_decorative(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || line.starts_with(HEADER_TOKEN) || trimmed.chars().all(|c| c == '-')
}

fn is_indented(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
}

/// Split a line into trimmed columns when it has the shape of a record:
/// at least five columns and an integer in the first one.
fn record_fields(line: &str) -> Option<(i32, Vec<&str>)> {
    let fields: Vec<&str> = line.split(COLUMN_DELIMITER).map(str::trim).collect();
    if fields.len() < 5 {
        return None;
    }
    let id = fields[0].parse::<i32>().ok()?;
    Some((id, fields))
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| RecordError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_real(field: &'static str, value: &str) -> Result<f64, RecordError> {
    value.parse::<f64>().map_err(|source| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn parse_movie(id: i32, fields: &[&str]) -> Result<Movie, RecordError> {
    Ok(Movie::new(
        id,
        fields[1],
        parse_date("release date", fields[2])?,
        parse_real("duration", fields[3])?,
        fields[4],
    ))
}

fn parse_actor(id: i32, fields: &[&str]) -> Result<Actor, RecordError> {
    Ok(Actor::new(
        id,
        fields[1],
        parse_date("birth date", fields[2])?,
        parse_flag(fields[3]),
        parse_real("salary", fields[4])?,
    ))
}

/// Read the flat-file layout back into movies with their actors.
///
/// Lines are handled one at a time by a two-state machine. At the top level a
/// record line opens a new current movie; the actor sub-header switches to the
/// actor block, where indented record lines are actors of the current movie. The
/// first non-indented line leaves the block again. Record lines whose fields do
/// not convert are collected in [`ParseOutcome::rejected`] and parsing goes on.
pub fn parse_catalog(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut state = ParseState::TopLevel;
    let mut current: Option<usize> = None;

    for (index, line) in text.lines().enumerate() {
        if state == ParseState::ActorBlock && !is_indented(line) && !line.trim().is_empty() {
            state = ParseState::TopLevel;
        }
        if is_decorative(line) {
            continue;
        }

        let result = match state {
            ParseState::TopLevel => {
                if line.starts_with(ACTOR_BLOCK_TOKEN) {
                    state = ParseState::ActorBlock;
                    continue;
                }
                let Some((id, fields)) = record_fields(line) else {
                    continue;
                };
                parse_movie(id, &fields).map(|movie| {
                    outcome.movies.push(movie);
                    current = Some(outcome.movies.len() - 1);
                })
            }
            ParseState::ActorBlock => {
                // actors with no movie to attach to are dropped
                let Some(owner) = current else {
                    continue;
                };
                let Some((id, fields)) = record_fields(line) else {
                    continue;
                };
                parse_actor(id, &fields).map(|actor| outcome.movies[owner].actors.push(actor))
            }
        };

        if let Err(error) = result {
            if state == ParseState::TopLevel {
                current = None;
            }
            outcome.rejected.push(RejectedLine {
                line_number: index + 1,
                line: line.to_string(),
                error,
            });
        }
    }

    outcome
}

/// Like [`parse_catalog`], reporting every rejected line as a warning.
pub fn parse_movies(text: &str) -> Vec<Movie> {
    let outcome = parse_catalog(text);
    for rejected in &outcome.rejected {
        warn!(
            "Skipping line {} '{}': {}",
            rejected.line_number, rejected.line, rejected.error
        );
    }
    outcome.movies
}
