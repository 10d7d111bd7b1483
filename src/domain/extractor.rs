//! Registrable domain extractor.

use super::suffixes::SECOND_LEVEL_SUFFIXES;
use crate::error::{ScoreError, ScoreResult};
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use url::{Host, Url};

/// Built-in suffix set, built once on first use.
static BUILTIN: LazyLock<Arc<SuffixSet>> =
    LazyLock::new(|| Arc::new(SuffixSet::new(SECOND_LEVEL_SUFFIXES.iter().copied())));

/// An immutable set of second-level public suffixes.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    entries: HashSet<String>,
}

impl SuffixSet {
    /// Build a set from suffix strings. Entries are lowercased.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// The shared built-in set.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Check whether `suffix` is a known second-level suffix.
    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the registrable domain from page URLs.
///
/// For hosts with three or more labels the last two labels form a candidate.
/// The candidate is extended to three labels when it is a known suffix, or
/// when both of its labels are exactly two characters long. The second rule
/// is a heuristic for ccSLDs missing from the list and will also catch some
/// ordinary domains; cache keys depend on it, so it stays.
#[derive(Debug, Clone)]
pub struct DomainExtractor {
    suffixes: Arc<SuffixSet>,
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new(SuffixSet::builtin())
    }
}

impl DomainExtractor {
    /// Create an extractor over the given suffix set.
    pub fn new(suffixes: Arc<SuffixSet>) -> Self {
        Self { suffixes }
    }

    /// Extract the registrable domain from a page URL.
    ///
    /// Input without a scheme is treated as a bare host, so both
    /// `https://www.example.com/path` and `www.example.com` yield
    /// `example.com`. IP address hosts are returned unchanged.
    pub fn extract(&self, url: &str) -> ScoreResult<String> {
        let parsed = parse_url(url)?;

        match parsed.host() {
            Some(Host::Domain(host)) => {
                let domain = self.registrable_domain(host);
                if domain.is_empty() {
                    Err(url_error(url, "empty host"))
                } else {
                    Ok(domain)
                }
            }
            Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
            Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
            None => Err(url_error(url, "URL has no host")),
        }
    }

    /// Reduce an already-parsed host name to its registrable domain.
    pub fn registrable_domain(&self, host: &str) -> String {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let labels: Vec<&str> = host.split('.').collect();
        let len = labels.len();

        if len < 3 {
            return host;
        }

        let second = labels[len - 2];
        let top = labels[len - 1];
        let candidate = format!("{}.{}", second, top);

        if (second.len() == 2 && top.len() == 2) || self.suffixes.contains(&candidate) {
            format!("{}.{}", labels[len - 3], candidate)
        } else {
            candidate
        }
    }
}

/// Parse `input`, treating scheme-less input as a bare host.
///
/// `example.com:8080` parses as a URL with scheme `example.com`, no host and
/// path `8080`. A hostless URL without `//` whose path starts with a digit is
/// a host and port, so it goes through the same `http://` fallback as
/// `www.example.com`. `about:blank` and `mailto:` URLs still have no host.
fn parse_url(input: &str) -> ScoreResult<Url> {
    let input = input.trim();
    let with_scheme = || {
        Url::parse(&format!("http://{}", input)).map_err(|e| url_error(input, &e.to_string()))
    };

    match Url::parse(input) {
        Ok(url)
            if url.host().is_none()
                && !input.contains("//")
                && url.path().starts_with(|c: char| c.is_ascii_digit()) =>
        {
            with_scheme()
        }
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => with_scheme(),
        Err(e) => Err(url_error(input, &e.to_string())),
    }
}

fn url_error(url: &str, reason: &str) -> ScoreError {
    ScoreError::UrlParse {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> String {
        DomainExtractor::default().extract(url).unwrap()
    }

    #[test]
    fn test_strips_subdomain() {
        assert_eq!(extract("https://www.example.com/some/page?x=1"), "example.com");
        assert_eq!(extract("www.example.com"), "example.com");
    }

    #[test]
    fn test_short_hosts_unchanged() {
        assert_eq!(extract("https://example.com"), "example.com");
        assert_eq!(extract("http://localhost:8080/"), "localhost");
    }

    #[test]
    fn test_listed_suffix_extends() {
        assert_eq!(extract("https://sub.example.co.uk/"), "example.co.uk");
        assert_eq!(extract("https://shop.example.com.au"), "example.com.au");
        assert_eq!(extract("https://a.b.example.org.za"), "example.org.za");
    }

    #[test]
    fn test_two_letter_heuristic_extends() {
        // bc.de is not a listed suffix; both labels are two characters.
        assert!(!SuffixSet::builtin().contains("bc.de"));
        assert_eq!(extract("https://a.bc.de/"), "a.bc.de");
        assert_eq!(extract("https://x.a.bc.de/"), "a.bc.de");
    }

    #[test]
    fn test_heuristic_applies_without_list() {
        let extractor = DomainExtractor::new(Arc::new(SuffixSet::default()));
        assert_eq!(extractor.registrable_domain("sub.example.co.uk"), "example.co.uk");
        assert_eq!(extractor.registrable_domain("sub.example.com.au"), "com.au");
    }

    #[test]
    fn test_injected_suffix_set() {
        let extractor = DomainExtractor::new(Arc::new(SuffixSet::new(["blogspot.com"])));
        assert_eq!(extractor.registrable_domain("me.blogspot.com"), "me.blogspot.com");
        assert_eq!(extractor.registrable_domain("www.example.com"), "example.com");
    }

    #[test]
    fn test_case_and_trailing_dot() {
        let extractor = DomainExtractor::default();
        assert_eq!(extractor.registrable_domain("WWW.Example.COM."), "example.com");
    }

    #[test]
    fn test_bare_host_with_port() {
        assert_eq!(extract("example.com:8080"), "example.com");
        assert_eq!(extract("www.example.co.uk:443/path"), "example.co.uk");
        assert_eq!(extract("localhost:3000"), "localhost");
    }

    #[test]
    fn test_ip_hosts() {
        assert_eq!(extract("http://192.168.1.10/admin"), "192.168.1.10");
        assert_eq!(extract("http://[::1]:3000/"), "::1");
    }

    #[test]
    fn test_unparsable_urls() {
        let extractor = DomainExtractor::default();
        assert!(matches!(extractor.extract(""), Err(ScoreError::UrlParse { .. })));
        assert!(matches!(extractor.extract("about:blank"), Err(ScoreError::UrlParse { .. })));
        assert!(matches!(extractor.extract("http://exa mple.com"), Err(ScoreError::UrlParse { .. })));
        assert!(matches!(extractor.extract("http://"), Err(ScoreError::UrlParse { .. })));
        assert!(matches!(extractor.extract("mailto:a@b.com"), Err(ScoreError::UrlParse { .. })));
    }

    #[test]
    fn test_edu_au_is_a_suffix() {
        let extractor = DomainExtractor::default();
        assert_eq!(extractor.registrable_domain("x.uni.edu.au"), "uni.edu.au");
        assert_eq!(extractor.registrable_domain("www.olsztyn.pl"), "www.olsztyn.pl");
        assert_eq!(extractor.registrable_domain("a.shop.torun.pl"), "shop.torun.pl");
    }

    #[test]
    fn test_builtin_entries_have_two_labels() {
        for entry in SECOND_LEVEL_SUFFIXES {
            assert_eq!(entry.split('.').count(), 2, "{} cannot match a two-label candidate", entry);
        }
    }

    #[test]
    fn test_builtin_list_loaded() {
        let set = SuffixSet::builtin();
        assert!(set.len() > 500);
        assert!(set.contains("co.uk"));
        assert!(set.contains("com.au"));
        assert!(set.contains("org.za"));
        assert!(set.contains("edu.au"));
    }
}
