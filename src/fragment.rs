//! Handling of the result fragment returned by `/run-grant-writer`.
//!
//! The fragment is displayed verbatim, but it also carries the raw pipeline
//! output in a hidden field (`raw-data`) and an empty container
//! (`markdown-output`) that receives the rendered report. When either element
//! is missing the fragment is shown untouched.

use crate::constants::{MARKDOWN_OUTPUT_ID, RAW_DATA_ID};
use crate::render;
use crate::report;
use regex::Regex;
use std::sync::OnceLock;

fn raw_data_textarea_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"(?is)<textarea[^>]*\sid\s*=\s*["']{}["'][^>]*>(.*?)</textarea>"#,
            RAW_DATA_ID
        ))
        .unwrap()
    })
}

fn raw_data_input_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"(?is)<input[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
            RAW_DATA_ID
        ))
        .unwrap()
    })
}

fn value_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\svalue\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap())
}

fn markdown_output_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"(?is)<[a-z][a-z0-9]*[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
            MARKDOWN_OUTPUT_ID
        ))
        .unwrap()
    })
}

/// Returns the decoded text blob held by the `raw-data` element, or `None`
/// when the fragment carries no such element. Both the `<textarea>` and the
/// `<input value="...">` shapes are accepted.
pub fn extract_raw_data(fragment: &str) -> Option<String> {
    if let Some(caps) = raw_data_textarea_regex().captures(fragment) {
        let body = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        return Some(html_escape::decode_html_entities(body).into_owned());
    }

    if let Some(m) = raw_data_input_regex().find(fragment) {
        if let Some(caps) = value_attr_regex().captures(m.as_str()) {
            let value = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            return Some(html_escape::decode_html_entities(value).into_owned());
        }
    }

    None
}

/// Splices `rendered` directly after the opening tag of the
/// `markdown-output` container. Returns `None` when the container is absent.
pub fn inject_markdown(fragment: &str, rendered: &str) -> Option<String> {
    let m = markdown_output_regex().find(fragment)?;
    let mut composed = String::with_capacity(fragment.len() + rendered.len());
    composed.push_str(&fragment[..m.end()]);
    composed.push_str(rendered);
    composed.push_str(&fragment[m.end()..]);
    Some(composed)
}

/// Runs the full report pipeline over a result fragment: extract the raw
/// blob, clean it, render it as markdown, and inject the HTML into the
/// output container.
///
/// Returns the composed fragment plus the cleaned report text. When either
/// named element is missing the whole step is skipped and the fragment is
/// returned as received.
pub fn apply_report_markdown(fragment: &str) -> (String, Option<String>) {
    let raw = match extract_raw_data(fragment) {
        Some(raw) => raw,
        None => return (fragment.to_string(), None),
    };

    let cleaned = report::clean_report(&raw);
    let rendered = render::markdown_to_html(&cleaned);

    match inject_markdown(fragment, &rendered) {
        Some(composed) => (composed, Some(cleaned)),
        None => (fragment.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = concat!(
        r#"<div class="card"><h2>Your Grant Strategy Report</h2>"#,
        "<textarea id=\"raw-data\" style=\"display:none\">",
        "logs\nFINAL GRANT REPORT\n# Report\nBody &amp; more\n[Success] Report saved to /x",
        "</textarea>",
        r#"<div id="markdown-output"></div></div>"#,
    );

    #[test]
    fn test_extract_raw_data_from_textarea() {
        let raw = extract_raw_data(FRAGMENT).unwrap();
        assert!(raw.starts_with("logs\nFINAL GRANT REPORT"));
        assert!(raw.contains("Body & more"));
    }

    #[test]
    fn test_extract_raw_data_from_input_value() {
        let fragment = r#"<input type="hidden" id="raw-data" value="# Report&#10;Body"/>"#;
        let raw = extract_raw_data(fragment).unwrap();
        assert_eq!(raw, "# Report\nBody");
    }

    #[test]
    fn test_extract_raw_data_value_before_id() {
        let fragment = r#"<input value='blob' type="hidden" id="raw-data">"#;
        assert_eq!(extract_raw_data(fragment).unwrap(), "blob");
    }

    #[test]
    fn test_extract_raw_data_absent() {
        assert!(extract_raw_data("<div>no data here</div>").is_none());
    }

    #[test]
    fn test_extract_raw_data_other_ids_ignored() {
        let fragment = r#"<textarea id="other">nope</textarea>"#;
        assert!(extract_raw_data(fragment).is_none());
    }

    #[test]
    fn test_inject_markdown() {
        let fragment = r#"<div id="markdown-output"></div>"#;
        let composed = inject_markdown(fragment, "<p>hi</p>").unwrap();
        assert_eq!(composed, r#"<div id="markdown-output"><p>hi</p></div>"#);
    }

    #[test]
    fn test_inject_markdown_absent() {
        assert!(inject_markdown("<div></div>", "<p>hi</p>").is_none());
    }

    #[test]
    fn test_apply_report_markdown_composes() {
        let (composed, cleaned) = apply_report_markdown(FRAGMENT);
        let cleaned = cleaned.unwrap();
        assert_eq!(cleaned, "# Report\nBody & more");
        assert!(composed.contains(r#"<div id="markdown-output"><h1>"#));
        assert!(composed.contains("Report"));
    }

    #[test]
    fn test_apply_report_markdown_missing_raw_data() {
        let fragment = r#"<div id="markdown-output"></div>"#;
        let (composed, cleaned) = apply_report_markdown(fragment);
        assert_eq!(composed, fragment);
        assert!(cleaned.is_none());
    }

    #[test]
    fn test_apply_report_markdown_missing_output_container() {
        let fragment = r#"<textarea id="raw-data">text</textarea>"#;
        let (composed, cleaned) = apply_report_markdown(fragment);
        assert_eq!(composed, fragment);
        assert!(cleaned.is_none());
    }
}
