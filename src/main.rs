use anyhow::Result;
use crawlet::config;
use crawlet::engine::{Engine, EngineConfig, HtmlLinkExtractor, HttpFetcher};
use log2::*;
use std::time::Instant;

/// Indicates start time of the run, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("crawlet")) // include only modules having this pattern
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    info!("Target: {}", cfg.seed_url);
    info!("Max allowed visits: {}", cfg.max_visits);

    let engine_config = EngineConfig::new(cfg.seed_url.clone())
        .with_max_visits(cfg.max_visits)
        .with_request_delay(cfg.request_delay)
        .with_deny_list(cfg.deny.clone())
        .with_allow_list(cfg.allow.clone())
        .with_request_timeout(cfg.timeout);

    let fetcher = HttpFetcher::new(cfg.timeout);
    let extractor = HtmlLinkExtractor::new()?;
    let mut engine = Engine::new(engine_config, fetcher, extractor);

    let visited = engine.run().await;

    info!("Crawling finished, {} pages visited:", visited.len());
    for url in visited {
        info!("  {}", url);
    }

    if let Some(path) = cfg.output_file {
        std::fs::write(&path, visited.join("\n"))?;
        info!("Visited pages written to {:?}", path);
    }

    debug!("Total elapsed: {:?}", START_TIME.elapsed());

    Ok(())
}
