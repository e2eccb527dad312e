//! Response payloads of the supported metadata endpoints.

use serde::Deserialize;

/// Submission as returned by the FurAffinity API mirror.
#[derive(Debug, Deserialize)]
pub struct FurAffinitySubmission {
    pub title: String,
    pub image_url: String,
    pub author: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize)]
pub struct WeasylSubmission {
    pub title: String,
    pub owner: String,
    pub owner_media: WeasylOwnerMedia,
    pub media: WeasylMedia,
}

#[derive(Debug, Deserialize)]
pub struct WeasylOwnerMedia {
    #[serde(default)]
    pub avatar: Vec<WeasylMediaLink>,
}

#[derive(Debug, Deserialize)]
pub struct WeasylMedia {
    #[serde(default)]
    pub submission: Vec<WeasylSubmissionMedia>,
}

#[derive(Debug, Deserialize)]
pub struct WeasylSubmissionMedia {
    pub links: WeasylSubmissionLinks,
}

#[derive(Debug, Deserialize)]
pub struct WeasylSubmissionLinks {
    #[serde(default)]
    pub cover: Vec<WeasylMediaLink>,
}

#[derive(Debug, Deserialize)]
pub struct WeasylMediaLink {
    pub url: String,
}
