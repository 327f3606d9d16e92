//! Column layout shared by the serializer and the parser.

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const COLUMN_DELIMITER: char = '|';

/// Every top-level header line starts with this token.
pub const HEADER_TOKEN: &str = "ID |";
/// Opens the actor sub-block of a movie.
pub const ACTOR_BLOCK_TOKEN: &str = "    Actors:";
pub const INDENT: &str = "    ";

pub const MOVIE_HEADER: &str = "ID | Title               | Release Date     | Duration (hrs) | Genre";
pub const ACTOR_HEADER: &str =
    "    ID | Name                 | Birth Date          | Lead         | Salary";
pub const MOVIE_RULE_WIDTH: usize = 63;
pub const ACTOR_RULE_WIDTH: usize = 61;

pub const TITLE_WIDTH: usize = 20;
pub const RELEASE_DATE_WIDTH: usize = 17;
pub const DURATION_WIDTH: usize = 15;
pub const NAME_WIDTH: usize = 20;
pub const BIRTH_DATE_WIDTH: usize = 19;

/// Fit `text` into exactly `width` characters: cut it down when it is too
/// long, pad it with spaces otherwise. Truncation is silent.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Shortest decimal form that reads back to the same value, always with a
/// fractional part for integral numbers (`2.0`, not `2`).
pub fn render_real(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{text}.0")
    } else {
        text
    }
}

/// Render `value` for a padded column of `width` characters.
///
/// When the shortest form is too wide, the value is rounded to the most
/// fractional digits that still fit, and the rounded value is what gets
/// written. Reading the column back and rendering it again gives the same
/// text. Values too large to fit at all are written in full.
pub fn fit_real(value: f64, width: usize) -> String {
    let exact = render_real(value);
    if exact.chars().count() <= width {
        return fit_width(&exact, width);
    }
    for digits in (0..=width).rev() {
        let rounded = format!("{value:.digits$}");
        if rounded.len() > width {
            continue;
        }
        let Ok(stored) = rounded.parse::<f64>() else {
            break;
        };
        return fit_width(&render_real(stored), width);
    }
    exact
}

/// Whether a text column reads back unchanged: no delimiter, no line break,
/// no surrounding whitespace.
pub fn is_storable_text(text: &str) -> bool {
    !text.contains([COLUMN_DELIMITER, '\n', '\r']) && text.trim() == text
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_text() {
        assert_eq!(fit_width("Leo", 6), "Leo   ");
        assert_eq!(fit_width("", 3), "   ");
    }

    #[test]
    fn truncates_long_text() {
        let out = fit_width("The Lord of the Rings: The Return of the King", 20);
        assert_eq!(out, "The Lord of the Ring");
        assert!("The Lord of the Rings: The Return of the King".starts_with(&out));
    }

    #[test]
    fn exact_width_is_unchanged() {
        assert_eq!(fit_width("12345", 5), "12345");
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let out = fit_width("Amélie", 8);
        assert_eq!(out.chars().count(), 8);
        assert_eq!(out, "Amélie  ");
        assert_eq!(fit_width("Léon: The Professional", 2), "Lé");
    }

    #[test]
    fn output_width_is_always_exact() {
        for text in ["", "a", "Inception", "a much longer title than the column allows"] {
            for width in [0, 1, 9, 17, 20] {
                assert_eq!(fit_width(text, width).chars().count(), width);
            }
        }
    }

    #[test]
    fn reals_keep_a_fractional_part() {
        assert_eq!(render_real(2.48), "2.48");
        assert_eq!(render_real(2.0), "2.0");
        assert_eq!(render_real(20_000_000.0), "20000000.0");
        assert_eq!(render_real(0.1 + 0.2).parse::<f64>().unwrap(), 0.1 + 0.2);
    }

    #[test]
    fn storable_text() {
        assert!(is_storable_text("Spider-Man: No Way Home"));
        assert!(is_storable_text(""));
        assert!(!is_storable_text("A|B"));
        assert!(!is_storable_text("two\nlines"));
        assert!(!is_storable_text(" X"));
        assert!(!is_storable_text("X\t"));
    }

    #[test]
    fn fit_real_keeps_short_values_exact() {
        assert_eq!(fit_real(2.48, 15), "2.48           ");
        assert_eq!(fit_real(2.0, 15), "2.0            ");
    }

    #[test]
    fn fit_real_rounds_long_values_to_a_stable_text() {
        for value in [0.1 + 0.2, 1.0 / 3.0, 100.0 / 60.0, 123456.789012345678] {
            let first = fit_real(value, 15);
            assert_eq!(first.chars().count(), 15);
            let stored: f64 = first.trim().parse().unwrap();
            assert_eq!(fit_real(stored, 15), first);
        }
        assert_eq!(fit_real(0.1 + 0.2, 15).trim(), "0.3");
        assert_eq!(fit_real(1.0 / 3.0, 15).trim(), "0.3333333333333");
    }

    #[test]
    fn fit_real_writes_huge_values_in_full() {
        let text = fit_real(1e20, 15);
        assert_eq!(text, "100000000000000000000.0");
        assert_eq!(fit_real(text.parse().unwrap(), 15), text);
    }
}
