use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

/// Markup-to-links seam. Returns the raw `href` attribute values of anchor
/// elements in document order. Hrefs are NOT resolved against the page's
/// base URL; relative paths are returned verbatim. Known limitation,
/// preserved on purpose.
pub trait LinkExtractor {
    fn extract_hrefs(&self, body: &str) -> Result<Vec<String>>;
}

/// scraper-backed extractor selecting `<a>` elements.
pub struct HtmlLinkExtractor {
    selector: Selector,
}

impl HtmlLinkExtractor {
    pub fn new() -> Result<Self> {
        let selector = Selector::parse("a")
            .map_err(|e| anyhow!("Failed to parse <a> selector: {}", e))?;
        Ok(Self { selector })
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_hrefs(&self, body: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(body);
        let hrefs = document
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();
        Ok(hrefs)
    }
}
