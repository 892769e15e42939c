//! Event page scraping
//!
//! The event page is plain HTML; the only thing taken from it is the text of
//! the first `<title>` element, used as the event description.

use scraper::{Html, Selector};

/// URL of the public event page in the given language
pub fn event_page_url(base_url: &str, language: &str, event_id: &str) -> String {
    format!(
        "{}/{}/eventpage/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(language),
        urlencoding::encode(event_id)
    )
}

/// Text of the first `<title>` element with whitespace collapsed.
/// Returns `None` when the page has no title or the title is blank.
pub fn extract_title(html: &str) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let document = Html::parse_document(html);
    let title = document.select(&selector).next()?;

    let text = title
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_page_url() {
        assert_eq!(
            event_page_url("http://danceconvention.net/eventdirector", "en", "1234"),
            "http://danceconvention.net/eventdirector/en/eventpage/1234"
        );
        assert_eq!(
            event_page_url("http://localhost/", "de", "7"),
            "http://localhost/de/eventpage/7"
        );
    }

    #[test]
    fn test_extracts_first_title_text() {
        let html = r#"<!DOCTYPE html>
            <html><head>
              <title>
                Swing Fling 2024
                | danceconvention.net
              </title>
            </head><body><title>Second</title></body></html>"#;

        assert_eq!(
            extract_title(html).as_deref(),
            Some("Swing Fling 2024 | danceconvention.net")
        );
    }

    #[test]
    fn test_decodes_entities() {
        let html = "<html><head><title>Rock &amp; Swing</title></head></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Rock & Swing"));
    }

    #[test]
    fn test_missing_or_blank_title() {
        assert_eq!(extract_title("<html><body><p>no title</p></body></html>"), None);
        assert_eq!(extract_title("<html><head><title>   </title></head></html>"), None);
        assert_eq!(extract_title(""), None);
    }
}
