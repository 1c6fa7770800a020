//! Turns the result area of [`UiState`](crate::state::UiState) into markup.

use crate::state::ResultView;

/// Inline style of the error paragraph.
pub const ERROR_STYLE: &str = "color: red; font-weight: 600;";

/// HTML for the result area. Empty when there is nothing to show.
pub fn result_html(view: &ResultView) -> String {
    match view {
        ResultView::Empty => String::new(),
        ResultView::Download { href, label, filename } => format!(
            r#"<a href="{}" download="{}">{}</a>"#,
            escape_html(href),
            escape_html(filename),
            escape_html(label)
        ),
        ResultView::Error { message } => {
            format!(r#"<p style="{}">Error: {}</p>"#, ERROR_STYLE, escape_html(message))
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_empty_result_renders_nothing() {
        assert_eq!(result_html(&ResultView::Empty), "");
    }

    #[test]
    fn test_download_renders_exactly_one_anchor() {
        let html = result_html(&ResultView::download("/files/x.pptx"));
        let fragment = Html::parse_fragment(&html);
        let anchors: Vec<_> = fragment.select(&Selector::parse("a").unwrap()).collect();

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].value().attr("href"), Some("/files/x.pptx"));
        assert_eq!(anchors[0].value().attr("download"), Some("ai_presentation.pptx"));
        assert_eq!(
            anchors[0].text().collect::<String>(),
            "Download Your Presentation (.pptx)"
        );
    }

    #[test]
    fn test_error_renders_styled_message() {
        let html = result_html(&ResultView::error("bad topic"));
        let fragment = Html::parse_fragment(&html);
        let paragraph = fragment.select(&Selector::parse("p").unwrap()).next().unwrap();

        assert_eq!(paragraph.text().collect::<String>(), "Error: bad topic");
        assert_eq!(paragraph.value().attr("style"), Some(ERROR_STYLE));
        assert!(fragment.select(&Selector::parse("a").unwrap()).next().is_none());
    }

    #[test]
    fn test_server_text_is_escaped() {
        let html = result_html(&ResultView::error("<script>alert('x')</script>"));
        assert!(!html.contains("<script>"));

        let fragment = Html::parse_fragment(&html);
        assert!(fragment.select(&Selector::parse("script").unwrap()).next().is_none());
        let paragraph = fragment.select(&Selector::parse("p").unwrap()).next().unwrap();
        assert_eq!(
            paragraph.text().collect::<String>(),
            "Error: <script>alert('x')</script>"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b" <c>"#), "a &amp; &quot;b&quot; &lt;c&gt;");
    }
}
