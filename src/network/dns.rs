//! Domain name comparison for hosted-zone delegation.

/// Label separator in domain names.
const SEPARATOR: char = '.';

/// Returns `true` if `sub` equals `parent` or lies beneath it.
///
/// Trailing separators are ignored on both names. The comparison walks
/// labels from the right, so `coreos.com` never matches `notcoreos.com`.
/// Labels are compared case-sensitively. A parent with more labels than
/// the candidate child never matches.
///
/// # Examples
///
/// ```
/// use cluster_netcheck::network::dns::is_subdomain;
///
/// assert!(is_subdomain("a.b.c.staging.core-os.net", "staging.core-os.net"));
/// assert!(is_subdomain("staging.coreos.com.", "coreos.com"));
/// assert!(!is_subdomain("staging.coreos.com", "cgag.staging.coreos.com"));
/// ```
#[must_use]
pub fn is_subdomain(sub: &str, parent: &str) -> bool {
    let sub_labels: Vec<&str> = labels(sub).collect();
    let parent_labels: Vec<&str> = labels(parent).collect();

    if parent_labels.len() > sub_labels.len() {
        return false;
    }

    sub_labels
        .iter()
        .rev()
        .zip(parent_labels.iter().rev())
        .all(|(s, p)| s == p)
}

fn labels(name: &str) -> std::str::Split<'_, char> {
    name.trim_end_matches(SEPARATOR).split(SEPARATOR)
}

#[cfg(test)]
#[path = "dns_tests.rs"]
mod tests;
