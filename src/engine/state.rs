/// Current state of a crawl run.
///
/// URLs are kept as plain strings, compared by equality. Both collections
/// are small enough for linear containment checks at this scale.
pub struct CrawlState {
    /// Pages awaiting a visit. Popped from the end (depth-first order).
    pub frontier: Vec<String>,
    /// Pages already dispatched for a fetch attempt, in crawl order.
    /// Append-only; a page that failed to fetch still counts as visited.
    pub visited: Vec<String>,
    /// Number of visit attempts so far, successful or not.
    pub visit_count: usize,
}

impl CrawlState {
    pub fn new(seed_url: String) -> Self {
        Self {
            frontier: vec![seed_url],
            visited: Vec::new(),
            visit_count: 0,
        }
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.iter().any(|v| v == url)
    }

    pub fn in_frontier(&self, url: &str) -> bool {
        self.frontier.iter().any(|v| v == url)
    }
}
