//! End-to-end audit tests against mock HTTP servers

use tempfile::TempDir;
use webaudit::config::{
    Config, CrawlingConfig, FeaturesConfig, PerformanceConfig, ReportingConfig,
    SpellCheckingConfig, TextExtractionConfig, WebsiteConfig,
};
use webaudit::{run_audit, ProbeStatus, ResourceKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a base dictionary holding every word mock pages use correctly
fn write_dictionary(dir: &TempDir) {
    let words = [
        "another", "here", "should", "be", "flagged", "this", "page", "has", "only", "correct",
        "words", "with", "more", "text", "visit", "the", "shop", "read", "about", "us", "deeper",
    ];
    std::fs::write(dir.path().join("en.txt"), words.join("\n")).unwrap();
}

fn test_config(dictionary_dir: &str) -> Config {
    Config {
        features: FeaturesConfig::default(),
        crawling: CrawlingConfig {
            use_sitemap: true,
            sitemap_url: None,
            recursive_fallback: true,
            check_external_links: true,
            external_link_timeout_secs: 5,
            include_patterns: vec![],
            exclude_patterns: vec![],
        },
        website: WebsiteConfig {
            max_depth: 2,
            max_pages: 20,
            delay_ms: 0,
        },
        spell_checking: SpellCheckingConfig {
            language: "en".to_string(),
            dictionary_dir: dictionary_dir.to_string(),
            custom_dictionaries: vec![],
            min_word_length: 4,
            check_proper_nouns: false,
        },
        text_extraction: TextExtractionConfig::default(),
        performance: PerformanceConfig { max_workers: 4 },
        reporting: ReportingConfig {
            max_suggestions: 3,
            context_length: 50,
            output_dir: "./reports".to_string(),
            html_report: false,
            csv_report: false,
        },
    }
}

fn sitemap_body(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|u| format!("<url><loc>{}</loc></url>", u))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    )
}

#[tokio::test]
async fn sitemap_audit_finds_misspelling_and_broken_image() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_body(&[format!("{}/page1", server.uri())])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <p>Another mispelling here should be flagged</p>
                <img src="/missing.png">
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = test_config(dict.path().to_str().unwrap());
    let outcome = run_audit(config, &server.uri(), true, true).await.unwrap();

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].word, "mispelling");
    assert!(outcome.findings[0].confidence > 0.0);

    assert_eq!(outcome.broken_links.len(), 1);
    let broken = &outcome.broken_links[0];
    assert_eq!(broken.status, ProbeStatus::Http(404));
    assert_eq!(broken.resource.kind, ResourceKind::Image);
    assert!(broken.resource.url.ends_with("/missing.png"));

    assert_eq!(outcome.stats.pages_processed, 1);
    assert_eq!(outcome.stats.pages_failed, 0);
    assert_eq!(outcome.stats.errors_found, 1);
    assert!(outcome.stats.words_checked >= 6);
}

#[tokio::test]
async fn crawl_fallback_respects_depth_limit() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    // No sitemap anywhere
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap_index.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><p>this page has only correct words</p>
               <a href="{}/level1">more</a></body></html>"#,
            server.uri()
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><p>more correct words here</p>
               <a href="{}/level2">deeper</a></body></html>"#,
            server.uri()
        )))
        .mount(&server)
        .await;

    // Beyond max_depth; the audit must never request it
    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(dict.path().to_str().unwrap());
    config.website.max_depth = 1;

    let outcome = run_audit(config, &format!("{}/", server.uri()), true, false)
        .await
        .unwrap();

    assert_eq!(outcome.stats.pages_processed, 2);
    assert!(outcome.findings.is_empty());
}

#[tokio::test]
async fn shared_resource_probed_once_across_pages() {
    let site = MockServer::start().await;
    let cdn = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    let page_body = format!(
        r#"<html><body><p>this page has only correct words</p>
           <script src="{}/app.js"></script></body></html>"#,
        cdn.uri()
    );

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_body(&[
            format!("{}/page1", site.uri()),
            format!("{}/page2", site.uri()),
        ])))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_body.clone()))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_body))
        .mount(&site)
        .await;

    // Both pages reference this script; the probe must happen exactly once
    Mock::given(method("GET"))
        .and(path("/app.js"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&cdn)
        .await;

    let config = test_config(dict.path().to_str().unwrap());
    let outcome = run_audit(config, &site.uri(), false, true).await.unwrap();

    assert_eq!(outcome.broken_links.len(), 1);
    assert_eq!(outcome.broken_links[0].status, ProbeStatus::Http(404));
    assert_eq!(outcome.stats.pages_processed, 2);
}

#[tokio::test]
async fn disabling_external_link_checks_stops_all_probing() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_body(&[format!("{}/page1", server.uri())])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <p>this page has only correct words</p>
                <img src="/missing.png">
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    // Internal asset; the toggle must suppress even this probe
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(dict.path().to_str().unwrap());
    config.crawling.check_external_links = false;

    let outcome = run_audit(config, &server.uri(), true, true).await.unwrap();

    assert!(outcome.broken_links.is_empty());
    assert_eq!(outcome.stats.pages_processed, 1);
}

#[tokio::test]
async fn exclude_patterns_drop_pages() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_body(&[
            format!("{}/shop", server.uri()),
            format!("{}/draft/post", server.uri()),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shop"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>visit the shop</p></body></html>"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/draft/post"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(dict.path().to_str().unwrap());
    config.crawling.exclude_patterns = vec!["*/draft/*".to_string()];

    let outcome = run_audit(config, &server.uri(), true, false).await.unwrap();

    assert_eq!(outcome.stats.pages_processed, 1);
}

#[tokio::test]
async fn failed_page_recorded_as_broken_link() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_body(&[format!("{}/gone", server.uri())])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(dict.path().to_str().unwrap());
    let outcome = run_audit(config, &server.uri(), true, true).await.unwrap();

    assert_eq!(outcome.stats.pages_processed, 0);
    assert_eq!(outcome.stats.pages_failed, 1);
    assert_eq!(outcome.broken_links.len(), 1);

    let broken = &outcome.broken_links[0];
    assert_eq!(broken.status, ProbeStatus::Http(500));
    assert_eq!(broken.resource.source_page, "Sitemap discovery");
    assert_eq!(broken.resource.kind, ResourceKind::Hyperlink);
}

#[tokio::test]
async fn email_and_domain_fragments_not_flagged() {
    let server = MockServer::start().await;
    let dict = TempDir::new().unwrap();
    write_dictionary(&dict);

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_body(&[format!("{}/contact", server.uri())])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                <p>visit www.techcompany.com and read about us</p>
                <p>write to info@genealogyhelp.org with questions</p>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let config = test_config(dict.path().to_str().unwrap());
    let outcome = run_audit(config, &server.uri(), true, false).await.unwrap();

    // "techcompany", "info", "genealogyhelp" are not dictionary words but
    // all sit inside domain or email text
    let flagged: Vec<&str> = outcome.findings.iter().map(|f| f.word.as_str()).collect();
    assert!(!flagged.contains(&"techcompany"), "{:?}", flagged);
    assert!(!flagged.contains(&"info"), "{:?}", flagged);
    assert!(!flagged.contains(&"genealogyhelp"), "{:?}", flagged);
}
