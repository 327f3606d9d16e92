use std::fmt::Write;

use super::layout::{
    fit_real, fit_width, render_real, rule, ACTOR_BLOCK_TOKEN, ACTOR_HEADER, ACTOR_RULE_WIDTH,
    BIRTH_DATE_WIDTH, DATE_FORMAT, DURATION_WIDTH, INDENT, MOVIE_HEADER, MOVIE_RULE_WIDTH,
    NAME_WIDTH, RELEASE_DATE_WIDTH, TITLE_WIDTH,
};
use crate::models::{Actor, Movie};

fn movie_line(movie: &Movie) -> String {
    format!(
        "{}  | {} | {} | {} | {}",
        movie.id,
        fit_width(&movie.title, TITLE_WIDTH),
        fit_width(&movie.release_date.format(DATE_FORMAT).to_string(), RELEASE_DATE_WIDTH),
        fit_real(movie.duration_hours, DURATION_WIDTH),
        movie.genre
    )
}

fn actor_line(actor: &Actor) -> String {
    format!(
        "{INDENT}{}  | {} | {} | {}        | {}",
        actor.id,
        fit_width(&actor.name, NAME_WIDTH),
        fit_width(&actor.birth_date.format(DATE_FORMAT).to_string(), BIRTH_DATE_WIDTH),
        actor.is_lead,
        render_real(actor.salary)
    )
}

/// Render the whole catalog in the flat-file layout. Movies are ordered by id,
/// and each movie's actors by their own id; the input order is left alone.
pub fn serialize_catalog(movies: &[Movie]) -> String {
    let mut out = String::new();
    out.push_str(MOVIE_HEADER);
    out.push('\n');
    out.push_str(&rule(MOVIE_RULE_WIDTH));
    out.push('\n');

    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by_key(|m| m.id);

    for movie in sorted {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", movie_line(movie));

        if !movie.actors.is_empty() {
            let _ = writeln!(out, "{ACTOR_BLOCK_TOKEN}");
            let _ = writeln!(out, "{ACTOR_HEADER}");
            let _ = writeln!(out, "{INDENT}{}", rule(ACTOR_RULE_WIDTH));

            let mut actors: Vec<&Actor> = movie.actors.iter().collect();
            actors.sort_by_key(|a| a.id);
            for actor in actors {
                let _ = writeln!(out, "{}", actor_line(actor));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inception() -> Movie {
        Movie::new(1, "Inception", date(2010, 7, 16), 2.48, "Sci-Fi").with_actors(vec![
            Actor::new(1, "Leo", date(1974, 11, 11), true, 20_000_000.0),
        ])
    }

    #[test]
    fn empty_catalog_is_header_only() {
        let text = serialize_catalog(&[]);
        assert_eq!(text, format!("{MOVIE_HEADER}\n{}\n", "-".repeat(MOVIE_RULE_WIDTH)));
    }

    #[test]
    fn renders_exact_movie_block() {
        let text = serialize_catalog(&[inception()]);
        let expected = [
            MOVIE_HEADER,
            "---------------------------------------------------------------",
            "1  | Inception            | 2010-07-16        | 2.48            | Sci-Fi",
            "    Actors:",
            ACTOR_HEADER,
            "    -------------------------------------------------------------",
            "    1  | Leo                  | 1974-11-11          | true        | 20000000.0",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn movie_without_actors_has_no_sub_block() {
        let movie = Movie::new(3, "Heat", date(1995, 12, 15), 2.83, "Crime");
        let text = serialize_catalog(&[movie]);
        assert!(!text.contains(ACTOR_BLOCK_TOKEN));
        assert!(text.ends_with("| Crime\n\n"));
    }

    #[test]
    fn movies_and_actors_are_sorted_by_id() {
        let second = Movie::new(2, "Heat", date(1995, 12, 15), 2.83, "Crime").with_actors(vec![
            Actor::new(9, "Val", date(1959, 12, 31), false, 1.5),
            Actor::new(3, "Al", date(1940, 4, 25), true, 6.0),
        ]);
        let text = serialize_catalog(&[second, inception()]);

        let inception_at = text.find("1  | Inception").unwrap();
        let heat_at = text.find("2  | Heat").unwrap();
        assert!(inception_at < heat_at);

        let al_at = text.find("3  | Al").unwrap();
        let val_at = text.find("9  | Val").unwrap();
        assert!(al_at < val_at);
    }

    #[test]
    fn long_title_is_truncated_to_column() {
        let movie = Movie::new(4, "Dr. Strangelove or: How I Learned", date(1964, 1, 29), 1.6, "Comedy");
        let text = serialize_catalog(&[movie]);
        assert!(text.contains("4  | Dr. Strangelove or:  | 1964-01-29"));
    }
}
