// src/formatting/span_renderer.rs
//! Inline span rendering: decorator marks and links to Markdown.

use crate::types::InlineSpan;

/// Renders an inline span sequence to Markdown.
pub fn render_spans(spans: &[InlineSpan]) -> String {
    spans.iter().map(render_span).collect()
}

/// Renders one span, wrapping its text in decorator syntax from the
/// inside out. Code is applied first so other decorators wrap the
/// backticks; links wrap everything else.
fn render_span(span: &InlineSpan) -> String {
    if !span.marks.any() && span.link.is_none() {
        return span.text.clone();
    }

    let mut result = span.text.clone();

    if span.marks.code {
        result = format!("`{}`", result);
    }

    if span.marks.strong {
        result = format!("**{}**", result);
    }

    if span.marks.em {
        result = format!("*{}*", result);
    }

    // Underline and highlight have no Markdown syntax; HTML tags are
    // the conventional fallback.
    if span.marks.underline {
        result = format!("<u>{}</u>", result);
    }

    if span.marks.highlight {
        result = format!("<mark>{}</mark>", result);
    }

    if let Some(url) = &span.link {
        result = format!("[{}]({})", result, url.as_str());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SpanMarks, ValidatedUrl};
    use pretty_assertions::assert_eq;

    fn span(text: &str, marks: SpanMarks) -> InlineSpan {
        InlineSpan {
            key: String::new(),
            text: text.to_string(),
            marks,
            link: None,
        }
    }

    #[test]
    fn plain_spans_concatenate() {
        let spans = vec![InlineSpan::plain("Hello "), InlineSpan::plain("world")];
        assert_eq!(render_spans(&spans), "Hello world");
    }

    #[test]
    fn bold_italic_stacks() {
        let marks = SpanMarks {
            strong: true,
            em: true,
            ..Default::default()
        };
        assert_eq!(render_spans(&[span("both", marks)]), "***both***");
    }

    #[test]
    fn code_renders_inside_other_marks() {
        let marks = SpanMarks {
            code: true,
            strong: true,
            ..Default::default()
        };
        assert_eq!(render_spans(&[span("x + y", marks)]), "**`x + y`**");
    }

    #[test]
    fn highlight_uses_mark_tag() {
        let marks = SpanMarks {
            highlight: true,
            ..Default::default()
        };
        assert_eq!(render_spans(&[span("key point", marks)]), "<mark>key point</mark>");
    }

    #[test]
    fn link_wraps_decorated_text() {
        let s = InlineSpan {
            key: String::new(),
            text: "docs".to_string(),
            marks: SpanMarks {
                em: true,
                ..Default::default()
            },
            link: Some(ValidatedUrl::parse("https://example.com/a").unwrap()),
        };
        assert_eq!(render_spans(&[s]), "[*docs*](https://example.com/a)");
    }
}
