//! Link and resource integrity
//!
//! Extracts referenced resources from page HTML and probes them for
//! reachability. Probes are deduplicated globally so a resource shared by
//! many pages is requested once per run.

pub mod checker;
pub mod extractor;

pub use checker::LinkChecker;
pub use extractor::extract_resources;

use std::fmt;

/// Category of a referenced resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Hyperlink,
    Image,
    Stylesheet,
    Script,
    Media,
    Document,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Hyperlink => "hyperlink",
            ResourceKind::Image => "image",
            ResourceKind::Stylesheet => "stylesheet",
            ResourceKind::Script => "script",
            ResourceKind::Media => "media",
            ResourceKind::Document => "document",
        };
        write!(f, "{}", name)
    }
}

/// A resource referenced by a page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    /// Absolute resource URL
    pub url: String,
    /// Resource category derived from the referencing element
    pub kind: ResourceKind,
    /// URL of the page the reference was found on
    pub source_page: String,
}

/// Outcome of a failed reachability probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// HTTP response with an error status code
    Http(u16),
    /// The request timed out
    Timeout,
    /// The connection could not be established
    ConnectionError,
    /// Any other transport failure
    Error,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Http(code) => write!(f, "{}", code),
            ProbeStatus::Timeout => write!(f, "TIMEOUT"),
            ProbeStatus::ConnectionError => write!(f, "CONNECTION_ERROR"),
            ProbeStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Whether a resource lives on the audited site or elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locality {
    Internal,
    External,
}

impl Locality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locality::Internal => "internal",
            Locality::External => "external",
        }
    }
}

/// A resource that failed its reachability probe
#[derive(Debug, Clone)]
pub struct BrokenLink {
    pub resource: Resource,
    pub status: ProbeStatus,
    /// Human-readable failure description
    pub reason: String,
    pub locality: Locality,
    /// RFC 3339 timestamp of the probe
    pub timestamp: String,
}
