mod fur_affinity;
mod weasyl;

pub use fur_affinity::FurAffinityAdapter;
pub use weasyl::WeasylAdapter;

use crate::{Preview, RelayConfig, RelayError, SiteId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A metadata request for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Per-site knowledge of where submission metadata lives and what it looks like.
pub trait SiteAdapter: Send + Sync {
    fn site(&self) -> SiteId;

    fn build_request(&self, site_id: &str) -> FetchRequest;

    fn parse_response(&self, raw: &[u8]) -> Result<Preview, RelayError>;

    /// Whether previews from this site carry an author byline.
    fn shows_author(&self) -> bool {
        true
    }
}

type AdapterConstructor = fn(&RelayConfig) -> Result<Arc<dyn SiteAdapter>, RelayError>;

const ADAPTER_CONSTRUCTORS: &[(SiteId, AdapterConstructor)] = &[
    (SiteId::FurAffinity, fur_affinity_adapter),
    (SiteId::Weasyl, weasyl_adapter),
];

fn fur_affinity_adapter(_config: &RelayConfig) -> Result<Arc<dyn SiteAdapter>, RelayError> {
    Ok(Arc::new(FurAffinityAdapter::new()))
}

fn weasyl_adapter(config: &RelayConfig) -> Result<Arc<dyn SiteAdapter>, RelayError> {
    Ok(Arc::new(WeasylAdapter::new(&config.weasyl_api_key)?))
}

/// Site id to adapter lookup, built once at startup.
#[derive(Clone, Default)]
pub struct AdapterTable {
    adapters: HashMap<SiteId, Arc<dyn SiteAdapter>>,
}

impl AdapterTable {
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        let mut table = Self::default();
        for (site, construct) in ADAPTER_CONSTRUCTORS {
            debug!(site = %site, "Constructing site adapter");
            table.adapters.insert(*site, construct(config)?);
        }
        Ok(table)
    }

    pub fn with_adapter(mut self, adapter: Arc<dyn SiteAdapter>) -> Self {
        self.adapters.insert(adapter.site(), adapter);
        self
    }

    pub fn resolve(&self, site: SiteId) -> Result<&dyn SiteAdapter, RelayError> {
        self.adapters
            .get(&site)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| RelayError::UnrecognizedSite(site.to_string()))
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
