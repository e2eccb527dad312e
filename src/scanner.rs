use crate::{PatternRegistry, SiteId};
use tracing::debug;

/// One detected site link within a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub site: SiteId,
    pub raw_id: String,
}

impl LinkMatch {
    pub fn new(site: SiteId, raw_id: impl Into<String>) -> Self {
        Self {
            site,
            raw_id: raw_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkScanner {
    registry: PatternRegistry,
}

impl LinkScanner {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// Finds every recognized link in `text`.
    ///
    /// Matches are grouped by site in registry order, then by position in
    /// the text. Repeated links are reported once per occurrence.
    pub fn scan(&self, text: &str) -> Vec<LinkMatch> {
        let mut matches = Vec::new();

        for descriptor in self.registry.all_descriptors() {
            for caps in descriptor.pattern.captures_iter(text) {
                if let Some(id) = caps.get(2) {
                    matches.push(LinkMatch::new(descriptor.site, id.as_str()));
                }
            }
        }

        debug!(count = matches.len(), "Scanned message for site links");
        matches
    }
}
