//! Best-effort check that a submitted URL points at a job application
//! page rather than a company homepage. Pattern-matching on path shape
//! is approximate by nature; this will both over- and under-reject and
//! is used as a filter on direct submissions only.

/// Path segments that mark a link as a generic site page, not a posting.
const GENERIC_SEGMENTS: &[&str] = &[
    "home", "index", "about", "about-us", "contact", "team", "blog", "pricing",
];

/// Trailing segments that name a listing index rather than a single posting.
const INDEX_SEGMENTS: &[&str] = &["careers", "jobs", "vacancies", "openings", "join-us"];

/// Returns true when the URL plausibly points at a single job
/// application page.
pub fn is_application_url(url: &str) -> bool {
    let rest = match url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        Some(rest) => rest,
        None => return false,
    };

    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, path),
        None => (rest, ""),
    };
    if host.is_empty() {
        return false;
    }

    // Strip query/fragment; path shape is what we classify on.
    let path = path.split(['?', '#']).next().unwrap_or("");
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        // Bare domain root is a homepage.
        [] => false,
        [only] => {
            let only = only.to_ascii_lowercase();
            !GENERIC_SEGMENTS.contains(&only.as_str()) && !INDEX_SEGMENTS.contains(&only.as_str())
        }
        // Deeper paths pass unless they end on a bare listing index.
        [.., last] => {
            let last = last.to_ascii_lowercase();
            !INDEX_SEGMENTS.contains(&last.as_str())
        }
    }
}
