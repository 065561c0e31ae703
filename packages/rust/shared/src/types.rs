//! Core domain types for the Gist feed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Gist
// ---------------------------------------------------------------------------

/// A single public Gist as returned by the GitHub listing API.
///
/// Only the fields the renderer consumes are modeled; everything else in the
/// response is ignored. `created_at` is kept as the raw string because the
/// renderer emits it verbatim, without formatting or localization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gist {
    /// Free-text description; often absent or empty.
    #[serde(default)]
    pub description: Option<String>,

    /// Creation timestamp exactly as the API sent it.
    #[serde(default)]
    pub created_at: String,

    /// Files in the gist, keyed by filename. Stored in a `BTreeMap`, so
    /// iteration (and thus rendering) is filename-sorted rather than in the
    /// API's JSON object order, which is not contractual.
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,

    /// Link to the gist's page on github.com.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    /// Whether the gist is public (always true for the unauthenticated listing).
    #[serde(default)]
    pub public: bool,
}

/// Per-file metadata within a [`Gist`].
///
/// Both fields are optional: a file missing its `raw_url` or `filename`
/// still renders, just with the corresponding attribute/text omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GistFile {
    /// The file's name, also used as the link text.
    #[serde(default)]
    pub filename: Option<String>,

    /// URL of the raw file content, used as the link target.
    #[serde(default)]
    pub raw_url: Option<String>,
}

// ---------------------------------------------------------------------------
// GistFeed
// ---------------------------------------------------------------------------

/// Outcome of loading a user's Gist listing.
///
/// Distinguishes "the account has no gists" from "the fetch failed" so the
/// rendering layer can show a different notice for each, instead of
/// collapsing both into an empty list.
#[derive(Debug, Clone)]
pub enum GistFeed {
    /// The listing was fetched and contained at least one gist.
    Loaded {
        gists: Vec<Gist>,
        fetched_at: DateTime<Utc>,
    },
    /// The listing was fetched successfully but was empty.
    Empty { fetched_at: DateTime<Utc> },
    /// The fetch failed (transport, status, or decode); the reason is kept
    /// for diagnostics but the feed is still renderable.
    Failed { reason: String },
}

impl GistFeed {
    /// The gists in the feed, empty for `Empty` and `Failed`.
    pub fn gists(&self) -> &[Gist] {
        match self {
            GistFeed::Loaded { gists, .. } => gists,
            GistFeed::Empty { .. } | GistFeed::Failed { .. } => &[],
        }
    }

    /// Whether the underlying fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, GistFeed::Failed { .. })
    }
}
