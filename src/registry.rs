use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Art-hosting sites the relay knows how to preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteId {
    FurAffinity,
    Weasyl,
}

impl SiteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteId::FurAffinity => "fur_affinity",
            SiteId::Weasyl => "weasyl",
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Group 1 is the matched URL fragment, group 2 the submission id.
// Order here is the order links are reported in.
const SITE_PATTERNS: &[(SiteId, &str)] = &[
    (SiteId::FurAffinity, r"(furaffinity\.net/view/(\d+))"),
    (SiteId::Weasyl, r"(weasyl\.com/~\w+/submissions/(\d+))"),
];

static DESCRIPTORS: LazyLock<Vec<SiteDescriptor>> = LazyLock::new(|| {
    SITE_PATTERNS
        .iter()
        .map(|(site, pattern)| SiteDescriptor {
            site: *site,
            pattern: Regex::new(pattern).expect("site pattern must compile"),
        })
        .collect()
});

#[derive(Debug, Clone)]
pub struct SiteDescriptor {
    pub site: SiteId,
    pub pattern: Regex,
}

/// Fixed, ordered table of site detection patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRegistry;

impl PatternRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn all_descriptors(&self) -> &'static [SiteDescriptor] {
        &DESCRIPTORS
    }
}
