use crate::audit::AuditOutcome;
use html_escape::encode_text;

/// Renders the self-contained HTML report
///
/// The page carries summary stat boxes followed by a table of spelling
/// findings and a table of broken links. All user-visible values pass
/// through HTML escaping since page text and URLs are untrusted input.
pub fn render(outcome: &AuditOutcome) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Website Audit Report</title>
<style>
body { font-family: sans-serif; margin: 2em; color: #222; }
h1, h2 { color: #1a3c5e; }
.stats { display: flex; gap: 1em; margin: 1em 0; }
.stat-box { border: 1px solid #ccc; border-radius: 6px; padding: 1em 1.5em; text-align: center; }
.stat-box .value { font-size: 1.8em; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1em 0; }
th, td { border: 1px solid #ccc; padding: 0.5em; text-align: left; vertical-align: top; }
th { background: #f0f4f8; }
tr:nth-child(even) { background: #fafafa; }
.context { font-style: italic; color: #555; }
</style>
</head>
<body>
<h1>Website Audit Report</h1>
"#,
    );

    render_stats(outcome, &mut out);
    render_findings_table(outcome, &mut out);
    render_broken_links_table(outcome, &mut out);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_stats(outcome: &AuditOutcome, out: &mut String) {
    let stats = &outcome.stats;
    out.push_str("<div class=\"stats\">\n");

    for (label, value) in [
        ("Pages processed", stats.pages_processed),
        ("Pages failed", stats.pages_failed),
        ("Words checked", stats.words_checked),
        ("Spelling errors", stats.errors_found),
        ("Broken links", outcome.broken_links.len() as u64),
    ] {
        out.push_str(&format!(
            "<div class=\"stat-box\"><div class=\"value\">{}</div><div>{}</div></div>\n",
            value, label
        ));
    }

    out.push_str("</div>\n");
}

fn render_findings_table(outcome: &AuditOutcome, out: &mut String) {
    out.push_str("<h2>Spelling Errors</h2>\n");

    if outcome.findings.is_empty() {
        out.push_str("<p>No spelling errors found.</p>\n");
        return;
    }

    out.push_str(
        "<table>\n<tr><th>Page</th><th>Word</th><th>Suggestions</th><th>Context</th><th>Confidence</th></tr>\n",
    );

    for finding in &outcome.findings {
        out.push_str(&format!(
            "<tr><td><a href=\"{url}\">{url}</a></td><td>{word}</td><td>{suggestions}</td><td class=\"context\">{context}</td><td>{confidence:.2}</td></tr>\n",
            url = encode_text(&finding.source_page),
            word = encode_text(&finding.word),
            suggestions = encode_text(&finding.suggestions.join(", ")),
            context = encode_text(&finding.context),
            confidence = finding.confidence,
        ));
    }

    out.push_str("</table>\n");
}

fn render_broken_links_table(outcome: &AuditOutcome, out: &mut String) {
    out.push_str("<h2>Broken Links</h2>\n");

    if outcome.broken_links.is_empty() {
        out.push_str("<p>No broken links found.</p>\n");
        return;
    }

    out.push_str(
        "<table>\n<tr><th>URL</th><th>Status</th><th>Reason</th><th>Found On</th><th>Scope</th><th>Type</th></tr>\n",
    );

    for link in &outcome.broken_links {
        out.push_str(&format!(
            "<tr><td>{url}</td><td>{status}</td><td>{reason}</td><td>{found_on}</td><td>{scope}</td><td>{kind}</td></tr>\n",
            url = encode_text(&link.resource.url),
            status = encode_text(&link.status.to_string()),
            reason = encode_text(&link.reason),
            found_on = encode_text(&link.resource.source_page),
            scope = link.locality.as_str(),
            kind = link.resource.kind,
        ));
    }

    out.push_str("</table>\n");
}
