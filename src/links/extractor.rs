use crate::links::{Resource, ResourceKind};
use scraper::{Html, Selector};
use url::Url;

/// File extensions treated as images when referenced by a plain anchor
const IMAGE_EXTENSIONS: [&str; 10] = [
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg", ".ico", ".tiff", ".tif",
];

/// File extensions treated as downloadable documents
const DOCUMENT_EXTENSIONS: [&str; 9] = [
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".zip", ".rar",
];

/// Extracts every checkable resource referenced by a page
///
/// Covers anchors, images, stylesheets, scripts, and embedded media.
/// Relative references are resolved against the page URL. Fragment-only,
/// `mailto:`, `tel:`, `javascript:`, and `data:` references are skipped.
///
/// Anchors pointing at files with an image extension are classified as
/// images, and anchors or references resolving to document extensions are
/// classified as documents.
///
/// # Arguments
///
/// * `html` - Raw page HTML
/// * `source_page` - URL of the page, used for resolution and attribution
pub fn extract_resources(html: &str, source_page: &Url) -> Vec<Resource> {
    let document = Html::parse_document(html);
    let mut resources = Vec::new();

    collect_anchors(&document, source_page, &mut resources);
    collect_attr(&document, source_page, "img[src]", "src", ResourceKind::Image, &mut resources);
    collect_attr(
        &document,
        source_page,
        "link[rel~='stylesheet'][href]",
        "href",
        ResourceKind::Stylesheet,
        &mut resources,
    );
    collect_attr(
        &document,
        source_page,
        "script[src]",
        "src",
        ResourceKind::Script,
        &mut resources,
    );
    collect_media(&document, source_page, &mut resources);

    resources
}

fn collect_anchors(document: &Html, source_page: &Url, out: &mut Vec<Resource>) {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) => href.trim(),
            None => continue,
        };

        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("javascript:")
        {
            continue;
        }

        let resolved = match source_page.join(href) {
            Ok(url) => url,
            Err(_) => continue,
        };

        let kind = classify_target(resolved.path(), ResourceKind::Hyperlink);
        out.push(Resource {
            url: resolved.to_string(),
            kind,
            source_page: source_page.to_string(),
        });
    }
}

fn collect_attr(
    document: &Html,
    source_page: &Url,
    selector_str: &str,
    attr: &str,
    kind: ResourceKind,
    out: &mut Vec<Resource>,
) {
    let selector = match Selector::parse(selector_str) {
        Ok(selector) => selector,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        let value = match element.value().attr(attr) {
            Some(value) => value.trim(),
            None => continue,
        };

        if value.is_empty() || value.starts_with("data:") || value.starts_with('#') {
            continue;
        }

        let resolved = match source_page.join(value) {
            Ok(url) => url,
            Err(_) => continue,
        };

        out.push(Resource {
            url: resolved.to_string(),
            kind,
            source_page: source_page.to_string(),
        });
    }
}

fn collect_media(document: &Html, source_page: &Url, out: &mut Vec<Resource>) {
    let selector = match Selector::parse("audio, video, source, object, embed") {
        Ok(selector) => selector,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        for attr in ["src", "data"] {
            let value = match element.value().attr(attr) {
                Some(value) => value.trim(),
                None => continue,
            };

            if value.is_empty() || value.starts_with("data:") || value.starts_with('#') {
                continue;
            }

            let resolved = match source_page.join(value) {
                Ok(url) => url,
                Err(_) => continue,
            };

            out.push(Resource {
                url: resolved.to_string(),
                kind: ResourceKind::Media,
                source_page: source_page.to_string(),
            });
        }
    }
}

/// Reclassifies a hyperlink target by its path extension
fn classify_target(path: &str, default: ResourceKind) -> ResourceKind {
    let lower = path.to_lowercase();

    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return ResourceKind::Image;
    }

    if DOCUMENT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return ResourceKind::Document;
    }

    default
}
