//! crates/record/src/render.rs
//! Turning annotated details into printable lines.
//!
//! A rendered line is `indent + label prefix + body`. The indent is
//! [`INDENT_WIDTH`] spaces per shift unit, each label renders as `[label]`
//! in cyan followed by one space, and the body is the key alone or
//! `{key}: {value}`. Values spanning several lines are pushed onto their
//! own lines, indented one unit deeper than the key.

use crate::detail::Details;
use crate::style::{Color, ColorMode};

/// Spaces per indentation unit.
pub const INDENT_WIDTH: usize = 4;

/// Returns the leading whitespace for `shift` indentation units.
#[must_use]
pub fn indentation(shift: usize) -> String {
    " ".repeat(INDENT_WIDTH * shift)
}

/// Renders the `{key}: {value}` body of a message, without leading indent.
///
/// `shift` is the indentation the surrounding line is rendered at; it only
/// matters for multi-line values, whose lines land one unit deeper.
///
/// # Examples
///
/// ```
/// use record::render;
/// use record::ColorMode;
///
/// assert_eq!(
///     render::key_value("fail", Some("oops"), None, 0, ColorMode::Plain),
///     "fail: oops",
/// );
/// assert_eq!(
///     render::key_value("output", Some("two\nlines"), None, 0, ColorMode::Plain),
///     "output:\n    two\n    lines",
/// );
/// ```
#[must_use]
pub fn key_value(
    key: &str,
    value: Option<&str>,
    color: Option<Color>,
    shift: usize,
    colors: ColorMode,
) -> String {
    let key = match color {
        Some(color) => colors.paint(color, key),
        None => key.to_owned(),
    };

    let Some(value) = value else {
        return key;
    };

    let lines: Vec<&str> = value.lines().collect();
    if lines.len() > 1 {
        let deeper = indentation(shift + 1);
        let mut message = format!("{key}:");
        for line in lines {
            message.push('\n');
            message.push_str(&deeper);
            message.push_str(line);
        }
        message
    } else {
        format!("{key}: {value}")
    }
}

/// Renders the complete line for `details`: indent, labels, body.
///
/// # Examples
///
/// ```
/// use record::render;
/// use record::{ColorMode, Detail, Gate};
///
/// let details = Detail::new("warn")
///     .with_value("oops")
///     .annotate(vec!["foo".into(), "bar".into()], Gate::None, false, 0);
///
/// assert_eq!(
///     render::line(&details, ColorMode::Plain),
///     "[foo] [bar] warn: oops",
/// );
/// ```
#[must_use]
pub fn line(details: &Details, colors: ColorMode) -> String {
    let mut out = indentation(details.shift);

    for label in &details.labels {
        out.push_str(&colors.paint(Color::Cyan, &format!("[{label}]")));
        out.push(' ');
    }

    out.push_str(&key_value(
        &details.key,
        details.value.as_deref(),
        details.color,
        details.shift,
        colors,
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{Detail, Gate};

    #[test]
    fn key_alone_renders_unchanged() {
        assert_eq!(
            key_value("ready", None, None, 0, ColorMode::Plain),
            "ready"
        );
    }

    #[test]
    fn key_and_value_join_with_a_colon() {
        assert_eq!(
            key_value("plan", Some("/plans/smoke"), None, 2, ColorMode::Plain),
            "plan: /plans/smoke"
        );
    }

    #[test]
    fn colored_key_is_painted_before_joining() {
        let body = key_value("fail", Some("oops"), Some(Color::Red), 0, ColorMode::Ansi);

        assert!(body.starts_with("\u{1b}[31mfail\u{1b}[0m: oops"), "body: {body:?}");
    }

    #[test]
    fn multiline_values_move_to_deeper_indented_lines() {
        assert_eq!(
            key_value("environment", Some("A=1\nB=2"), None, 1, ColorMode::Plain),
            "environment:\n        A=1\n        B=2"
        );
    }

    #[test]
    fn single_line_value_keeps_its_trailing_newline() {
        assert_eq!(
            key_value("output", Some("done\n"), None, 0, ColorMode::Plain),
            "output: done\n"
        );
    }

    #[test]
    fn line_prepends_indent_then_labels() {
        let details = Detail::new("message").annotate(
            vec!["foo".into()],
            Gate::None,
            false,
            2,
        );

        assert_eq!(
            line(&details, ColorMode::Plain),
            "        [foo] message"
        );
    }

    #[test]
    fn every_label_gets_its_own_trailing_space() {
        let details = Detail::new("message").annotate(
            vec!["foo".into(), "bar".into()],
            Gate::None,
            false,
            0,
        );

        assert_eq!(line(&details, ColorMode::Plain), "[foo] [bar] message");
    }

    #[test]
    fn ansi_labels_are_wrapped_whole() {
        let details = Detail::new("message").annotate(
            vec!["foo".into()],
            Gate::None,
            false,
            0,
        );

        assert_eq!(
            line(&details, ColorMode::Ansi),
            "\u{1b}[36m[foo]\u{1b}[0m message"
        );
    }

    #[test]
    fn detail_shift_is_relative_to_the_base_shift() {
        let details = Detail::new("nested")
            .with_shift(1)
            .annotate(Vec::new(), Gate::None, false, 1);

        assert_eq!(line(&details, ColorMode::Plain), "        nested");
    }
}
