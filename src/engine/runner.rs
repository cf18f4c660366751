use log2::*;
use tokio::time::{Duration, sleep};

use super::config::EngineConfig;
use super::extract::LinkExtractor;
use super::fetch::{FetchOutcome, Fetcher};
use super::filter::DomainFilter;
use super::state::CrawlState;

/// The crawl engine. Owns all frontier state and drives the loop; the
/// collaborators behind the trait seams do the actual HTTP and HTML work.
pub struct Engine<F, E> {
    pub config: EngineConfig,
    pub state: CrawlState,
    pub filter: DomainFilter,
    pub fetcher: F,
    pub extractor: E,
}

impl<F: Fetcher, E: LinkExtractor> Engine<F, E> {
    pub fn new(config: EngineConfig, fetcher: F, extractor: E) -> Self {
        let filter = DomainFilter::new(config.deny_list.clone(), config.allow_list.clone());
        let state = CrawlState::new(config.seed_url.clone());
        Self {
            config,
            state,
            filter,
            fetcher,
            extractor,
        }
    }

    /// Drive the crawl to completion and return the visited pages in crawl
    /// order. One page is processed fully before the next starts; the run
    /// stops when the visit budget is spent or the frontier empties. No
    /// error escapes: per-page failures are absorbed and logged.
    pub async fn run(&mut self) -> &[String] {
        loop {
            if self.state.visit_count >= self.config.max_visits {
                info!(
                    "Visit budget of {} exhausted, stopping",
                    self.config.max_visits
                );
                break;
            }

            let Some(url) = self.state.frontier.pop() else {
                info!(
                    "Frontier exhausted after {} visits, stopping",
                    self.state.visit_count
                );
                break;
            };

            // A URL can reach the frontier twice via two source pages.
            // Dropping it here must not consume budget.
            if self.state.is_visited(&url) {
                debug!("Skipping already visited {}", url);
                continue;
            }

            self.visit(url).await;
        }

        &self.state.visited
    }

    async fn visit(&mut self, url: String) {
        self.state.visit_count += 1;
        self.state.visited.push(url.clone());
        self.fetch_and_collect(&url).await;
    }

    async fn fetch_and_collect(&mut self, url: &str) {
        // Fixed politeness pause before every request.
        if self.config.request_delay_ms > 0 {
            sleep(Duration::from_millis(self.config.request_delay_ms)).await;
        }

        info!("Requesting {}", url);

        match self.fetcher.fetch(url).await {
            FetchOutcome::Body(body) => match self.extractor.extract_hrefs(&body) {
                Ok(hrefs) => self.admit_links(hrefs),
                Err(e) => warn!("Link extraction failed for {}: {}", url, e),
            },
            FetchOutcome::Empty => debug!("Empty body from {}", url),
            FetchOutcome::Failed(reason) => debug!("Fetch failed for {}: {}", url, reason),
        }
    }

    fn admit_links(&mut self, hrefs: Vec<String>) {
        for href in hrefs {
            if href.is_empty() {
                continue;
            }
            if self.state.is_visited(&href) {
                continue;
            }
            if self.state.in_frontier(&href) {
                continue;
            }
            if self.filter.admits(&href) {
                self.state.frontier.push(href);
            } else {
                debug!("Filtered out link: {}", href);
            }
        }
    }
}
