use crate::links::BrokenLink;
use crate::spelling::SpellingFinding;

/// Renders spelling findings as CSV
///
/// Columns: url, word, suggestions, context, confidence, timestamp.
/// Suggestions are joined with `; ` inside a single field.
pub fn render_findings(findings: &[SpellingFinding]) -> String {
    let mut out = String::from("url,word,suggestions,context,confidence,timestamp\n");

    for finding in findings {
        let row = [
            csv_field(&finding.source_page),
            csv_field(&finding.word),
            csv_field(&finding.suggestions.join("; ")),
            csv_field(&finding.context),
            format!("{:.2}", finding.confidence),
            csv_field(&finding.timestamp),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Renders broken links as CSV
///
/// Columns: url, status_code, reason, found_on, link_type, resource_type,
/// timestamp.
pub fn render_broken_links(broken_links: &[BrokenLink]) -> String {
    let mut out =
        String::from("url,status_code,reason,found_on,link_type,resource_type,timestamp\n");

    for link in broken_links {
        let row = [
            csv_field(&link.resource.url),
            csv_field(&link.status.to_string()),
            csv_field(&link.reason),
            csv_field(&link.resource.source_page),
            csv_field(link.locality.as_str()),
            csv_field(&link.resource.kind.to_string()),
            csv_field(&link.timestamp),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
