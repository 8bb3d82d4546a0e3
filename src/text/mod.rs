//! Visible-text extraction
//!
//! Walks the parsed HTML tree collecting text nodes while skipping
//! configured boilerplate elements, then normalizes whitespace so the
//! spell checker sees clean prose.

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::Html;
use std::collections::HashSet;

/// Extracts the visible text of an HTML document
///
/// Text inside any element named in `ignore_elements` is dropped, including
/// all of its descendants. Runs of whitespace collapse to a single space
/// and the result is trimmed.
///
/// # Arguments
///
/// * `html` - Raw page HTML
/// * `ignore_elements` - Element names whose subtrees are skipped
pub fn extract_text(html: &str, ignore_elements: &[String]) -> String {
    let document = Html::parse_document(html);
    let ignored: HashSet<&str> = ignore_elements.iter().map(|s| s.as_str()).collect();

    let mut raw = String::new();
    collect_text(document.tree.root(), &ignored, &mut raw);

    // Unlikely to fail on a literal pattern, but avoid a panic path
    match Regex::new(r"\s+") {
        Ok(ws) => ws.replace_all(&raw, " ").trim().to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

/// Counts word tokens in extracted text
pub fn count_words(text: &str) -> u64 {
    match Regex::new(r"\b\w+\b") {
        Ok(word) => word.find_iter(text).count() as u64,
        Err(_) => 0,
    }
}

fn collect_text(node: NodeRef<'_, Node>, ignored: &HashSet<&str>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(element) => {
                if ignored.contains(element.name()) {
                    continue;
                }
                collect_text(child, ignored, out);
            }
            _ => collect_text(child, ignored, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_ignored() -> Vec<String> {
        ["script", "style", "nav", "footer", "header"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_extracts_body_text() {
        let html = "<html><body><p>Hello world</p></body></html>";
        assert_eq!(extract_text(html, &default_ignored()), "Hello world");
    }

    #[test]
    fn test_skips_ignored_subtrees() {
        let html = r#"
            <html><body>
                <script>var hidden = "code";</script>
                <style>.x { color: red; }</style>
                <nav><a href="/">Navigation text</a></nav>
                <p>Visible text</p>
                <footer>Footer text</footer>
            </body></html>
        "#;
        assert_eq!(extract_text(html, &default_ignored()), "Visible text");
    }

    #[test]
    fn test_collapses_whitespace() {
        let html = "<p>Multiple\n\n   spaced\t\twords</p>";
        assert_eq!(
            extract_text(html, &default_ignored()),
            "Multiple spaced words"
        );
    }

    #[test]
    fn test_joins_sibling_elements() {
        let html = "<p>First</p><p>Second</p>";
        assert_eq!(extract_text(html, &default_ignored()), "First Second");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_text("", &default_ignored()), "");
        assert_eq!(extract_text("<script>x</script>", &default_ignored()), "");
    }

    #[test]
    fn test_custom_ignore_list() {
        let html = "<aside>Sidebar</aside><p>Content</p>";
        let ignored = vec!["aside".to_string()];
        assert_eq!(extract_text(html, &ignored), "Content");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello world"), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one, two, three!"), 3);
        assert_eq!(count_words("hyphen-ated counts as two"), 5);
    }
}
