pub mod state;
pub mod config;
pub mod filter;
pub mod fetch;
pub mod extract;
pub mod runner;


pub use state::CrawlState;
pub use config::{EngineConfig, LINK_REQUEST_TIMEOUT_SEC};
pub use filter::DomainFilter;
pub use fetch::{FetchOutcome, Fetcher, HttpFetcher};
pub use extract::{HtmlLinkExtractor, LinkExtractor};
pub use runner::Engine;
