//! Terminal rendering of [`CalcError`]s.
//!
//! Draws the input once and underlines the offending span, plus the
//! operator span when there is one. Colour is off so the output is stable
//! for snapshots and pipes.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::CalcError;

/// Source id shown in the report header.
const SOURCE_ID: &str = "expr";

/// Render `error` against the input it came from.
///
/// Spans are character offsets. Spans that fall past the end of `source`
/// (e.g. the slot after a dangling operator) are clamped; labels that end up
/// empty are dropped, but the header line is always written.
pub fn render(error: &CalcError, source: &str) -> String {
    let len = source.chars().count();
    let clamp = |range: Range<usize>| -> Option<Range<usize>> {
        let end = range.end.min(len);
        let start = range.start.min(end);
        (start < end).then_some(start..end)
    };

    let primary = error.span.and_then(|span| clamp(span.to_range()));
    let operator = error.operator_span.and_then(|span| clamp(span.to_range()));
    let offset = primary.as_ref().map_or(0, |range| range.start);

    let mut report = Report::<(&str, Range<usize>)>::build(ReportKind::Error, SOURCE_ID, offset)
        .with_config(Config::default().with_color(false))
        .with_code(error.code())
        .with_message(error.message());

    if let Some(range) = primary {
        report = report.with_label(Label::new((SOURCE_ID, range)).with_message("here"));
    }
    if let Some(range) = operator {
        report = report.with_label(Label::new((SOURCE_ID, range)).with_message("operator"));
    }

    let mut buf = Vec::new();
    if report
        .finish()
        .write((SOURCE_ID, Source::from(source.to_string())), &mut buf)
        .is_err()
    {
        // Writing into a Vec cannot fail; fall back to the bare message.
        return format!("error[{}]: {}\n", error.code(), error.message());
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests;
