use crate::audit::AuditOutcome;
use crate::links::Locality;
use std::collections::HashMap;

/// Number of most-frequent misspellings shown in the summary
const TOP_WORDS: usize = 10;

/// Prints the end-of-run summary to stdout
pub fn print_summary(outcome: &AuditOutcome) {
    let stats = &outcome.stats;

    println!();
    println!("=== Audit Summary ===");
    println!("Pages processed:  {}", stats.pages_processed);
    println!("Pages failed:     {}", stats.pages_failed);
    println!("Words checked:    {}", stats.words_checked);
    println!("Spelling errors:  {}", stats.errors_found);
    println!("Broken links:     {}", outcome.broken_links.len());

    print_top_words(outcome);
    print_broken_link_breakdown(outcome);
}

fn print_top_words(outcome: &AuditOutcome) {
    if outcome.findings.is_empty() {
        return;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for finding in &outcome.findings {
        *counts.entry(finding.word_lower.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked.truncate(TOP_WORDS);

    println!();
    println!("Most frequent misspellings:");
    for (word, count) in ranked {
        println!("  {:>4}  {}", count, word);
    }
}

fn print_broken_link_breakdown(outcome: &AuditOutcome) {
    if outcome.broken_links.is_empty() {
        return;
    }

    let internal = outcome
        .broken_links
        .iter()
        .filter(|l| l.locality == Locality::Internal)
        .count();
    let external = outcome.broken_links.len() - internal;

    println!();
    println!("Broken links: {} internal, {} external", internal, external);

    let mut by_status: HashMap<String, usize> = HashMap::new();
    for link in &outcome.broken_links {
        *by_status.entry(link.status.to_string()).or_insert(0) += 1;
    }

    let mut statuses: Vec<(String, usize)> = by_status.into_iter().collect();
    statuses.sort_by(|a, b| a.0.cmp(&b.0));

    for (status, count) in statuses {
        println!("  {:>4}  {}", count, status);
    }
}
