/// Substring-based domain admission for candidate links.
///
/// A link is rejected if it contains any deny pattern. When the allow list
/// is non-empty, a link must additionally contain at least one allow
/// pattern. An empty allow list admits everything the deny list lets
/// through.
pub struct DomainFilter {
    deny: Vec<String>,
    allow: Vec<String>,
}

impl DomainFilter {
    pub fn new(deny: Vec<String>, allow: Vec<String>) -> Self {
        Self { deny, allow }
    }

    pub fn admits(&self, href: &str) -> bool {
        if self.deny.iter().any(|pattern| href.contains(pattern)) {
            return false;
        }
        if self.allow.is_empty() {
            return true;
        }
        self.allow.iter().any(|pattern| href.contains(pattern))
    }
}
