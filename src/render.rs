//! HTML generation for the embedded WebKit views.
//!
//! Backend fragments are partial HTML snippets meant to be injected into an
//! existing page, so every view wraps them in a full document shell with a
//! restrictive Content-Security-Policy before handing them to WebKit.

use horrorshow::helper::doctype;
use horrorshow::{html, Raw};

const PAGE_STYLE: &str = "
    body {
        background-color: #f0f0f0;
        font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
        color: #222;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 24px;
    }
    .card, .shell {
        background: white;
        box-shadow: 0 4px 8px rgba(0,0,0,0.1);
        border-radius: 8px;
        padding: 24px;
        max-width: 760px;
        width: 100%;
    }
    #markdown-output h1, #markdown-output h2 { border-bottom: 1px solid #ddd; }
    #markdown-output code { background: #f4f4f4; padding: 1px 4px; }
    #markdown-output table { border-collapse: collapse; }
    #markdown-output th, #markdown-output td { border: 1px solid #ccc; padding: 4px 8px; }
    textarea#raw-data { display: none; }

    @media (prefers-color-scheme: dark) {
        body { background-color: #1e1e1e; color: #ddd; }
        .card, .shell { background: #2b2b2b; box-shadow: none; }
        #markdown-output code { background: #333; }
    }
";

fn wrap_page(body: &str) -> String {
    format!(
        "{}",
        html! {
            : doctype::HTML;
            html {
                head {
                    meta(charset="utf-8");
                    meta(http-equiv="Content-Security-Policy",
                         content="default-src 'self'; script-src 'none'; style-src 'unsafe-inline';");
                    meta(http-equiv="X-Frame-Options", content="DENY");
                    meta(http-equiv="X-Content-Type-Options", content="nosniff");
                    style {
                        : Raw(PAGE_STYLE)
                    }
                }
                body {
                    : Raw(body);
                }
            }
        }
    )
}

/// Wraps a result fragment in the page shell for the result view.
pub fn result_page(fragment: &str) -> String {
    wrap_page(&format!("<div class=\"shell\">{}</div>", fragment))
}

/// Wraps the fetched loading fragment in the page shell for the loading view.
pub fn loading_page(fragment: &str) -> String {
    wrap_page(fragment)
}

/// Static placeholder shown when the loading fragment cannot be fetched.
pub fn loading_fallback() -> String {
    wrap_page("<div class=\"card\"><h3>Loading...</h3></div>")
}

/// Renders markdown to HTML with tables and strikethrough enabled.
///
/// Scripts are already blocked by the page shell CSP; `javascript:` URLs are
/// stripped from the output as well.
pub fn markdown_to_html(md: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(md, opts);
    let mut out = String::new();
    html::push_html(&mut out, parser);

    out.replace("javascript:", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html_heading_and_list() {
        let html = markdown_to_html("# Executive Summary\n\n- alpha\n- beta");
        assert!(html.contains("<h1>Executive Summary</h1>"));
        assert!(html.contains("<li>alpha</li>"));
        assert!(html.contains("<li>beta</li>"));
    }

    #[test]
    fn test_markdown_to_html_table() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_markdown_to_html_strips_script_urls() {
        let html = markdown_to_html("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_markdown_to_html_escapes_entities() {
        let html = markdown_to_html("AT&T");
        assert!(html.contains("AT&amp;T"));
    }

    #[test]
    fn test_loading_fallback_contains_placeholder() {
        let page = loading_fallback();
        assert!(page.contains("Loading..."));
    }

    #[test]
    fn test_pages_carry_csp_and_body() {
        let page = result_page("<p>report</p>");
        assert!(page.contains("Content-Security-Policy"));
        assert!(page.contains("script-src 'none'"));
        assert!(page.contains("<p>report</p>"));

        let loading = loading_page("<div class=\"card\">Working</div>");
        assert!(loading.contains("Working"));
        assert!(loading.starts_with("<!DOCTYPE html>"));
    }
}
