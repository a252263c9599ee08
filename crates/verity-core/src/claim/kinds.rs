use serde::{Deserialize, Serialize};
use std::fmt;

/// Media kinds a claim can circulate as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Text,
    Image,
    Audio,
    Video,
}

impl MediaKind {
    /// All variants for iteration.
    pub const ALL: [MediaKind; 4] = [Self::Text, Self::Image, Self::Audio, Self::Video];

    /// Wire string, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platforms where claims originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Youtube,
    Tiktok,
    NewsWebsite,
    Podcast,
    Other,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::NewsWebsite => "news_website",
            Self::Podcast => "podcast",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete credibility classification derived from a trust score.
///
/// Bands are non-overlapping and total: every score in [0, 1] maps to
/// exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Verified,
    LikelyTrue,
    Uncertain,
    LikelyFalse,
    Debunked,
}

impl TrustLevel {
    pub const ALL: [TrustLevel; 5] = [
        Self::Verified,
        Self::LikelyTrue,
        Self::Uncertain,
        Self::LikelyFalse,
        Self::Debunked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::LikelyTrue => "likely_true",
            Self::Uncertain => "uncertain",
            Self::LikelyFalse => "likely_false",
            Self::Debunked => "debunked",
        }
    }

    /// Human-readable form, e.g. "Likely True".
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::LikelyTrue => "Likely True",
            Self::Uncertain => "Uncertain",
            Self::LikelyFalse => "Likely False",
            Self::Debunked => "Debunked",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
