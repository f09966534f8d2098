use abacus::CalcError;
use ariadne::{Color, Label, Report, ReportKind, Source};

const SOURCE_ID: &str = "<input>";

/// Format a CalcError with fancy terminal output using Ariadne
///
/// Errors that carry a span get the expression printed with the offending
/// token underlined; the rest fall back to their plain message.
pub fn format_error(error: &CalcError, expression: &str) -> String {
    let Some(span) = error.span() else {
        return format!("Error: {}", error);
    };

    // Ariadne counts characters, spans count bytes
    let start = char_offset(expression, span.start);
    let end = char_offset(expression, span.end);

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, SOURCE_ID, start)
        .with_message(error.to_string())
        .with_label(
            Label::new((SOURCE_ID, start..end))
                .with_message(error.kind().replace('_', " "))
                .with_color(Color::Red),
        );

    match report
        .finish()
        .write((SOURCE_ID, Source::from(expression)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Error: {}", error)
        }
    }
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset)
}
