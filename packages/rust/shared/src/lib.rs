//! Shared types, error model, and configuration for Folio.
//!
//! This crate is the foundation depended on by the other Folio crates.
//! It provides:
//! - [`FolioError`] — the unified error type
//! - Domain types ([`Gist`], [`GistFile`], [`GistFeed`])
//! - Configuration ([`AppConfig`], [`SiteConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, GistsConfig, IMAGE_CDN_PREFIX, PROF_GITHUB, PROF_LINKEDIN, PROF_TWITTER,
    SITE_DESCRIPTION, SITE_TITLE, SiteConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{FolioError, Result};
pub use types::{Gist, GistFeed, GistFile};
