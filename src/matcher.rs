//! Index-name matching capability used for bucket assignment.

/// Predicate over an index name. Bucket assignment consumes matching only
/// through this seam, so callers can substitute closures or their own
/// pattern engine.
pub trait IndexMatcher: Send + Sync {
    fn matches(&self, name: &str) -> bool;
}

impl<F> IndexMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// Minimal glob pattern: literal text with `*` matching any run of
/// characters, including the empty one. A pattern without `*` matches only
/// the exact name.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    parts: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
}

impl GlobMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            parts: pattern.split('*').map(str::to_string).collect(),
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
        }
    }
}

impl IndexMatcher for GlobMatcher {
    fn matches(&self, name: &str) -> bool {
        let mut rest = name;
        let last = self.parts.len() - 1;
        for (i, part) in self.parts.iter().enumerate() {
            if i == 0 && self.anchored_start {
                match rest.strip_prefix(part.as_str()) {
                    Some(r) => rest = r,
                    None => return false,
                }
                if i == last && self.anchored_end {
                    return rest.is_empty();
                }
                continue;
            }
            if i == last && self.anchored_end {
                return rest.ends_with(part.as_str());
            }
            if part.is_empty() {
                continue;
            }
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
        true
    }
}
