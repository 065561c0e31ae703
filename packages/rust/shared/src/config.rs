//! Application configuration for Folio.
//!
//! User config lives at `~/.folio/folio.toml`.
//! CLI flags override config file values, which override defaults.
//! The defaults are the site's canonical constants, so templates work
//! without any config file present.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "folio.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".folio";

// ---------------------------------------------------------------------------
// Site constants
// ---------------------------------------------------------------------------

/// Site title shown in the header and page `<title>`.
pub const SITE_TITLE: &str = "Krishan Thisera";

/// Site description used in meta tags and the landing page.
pub const SITE_DESCRIPTION: &str = "Hey there! I'm Krishan, your friendly DevOps engineer, \
dedicated to crafting a seamless online experience for you. Join me as I explore the art of \
building robust infrastructures, automating deployments, and optimizing workflows.";

/// LinkedIn profile link.
pub const PROF_LINKEDIN: &str = "https://www.linkedin.com/in/krishan-thisera/";

/// GitHub profile link.
pub const PROF_GITHUB: &str = "https://www.github.com/krishanthisera";

/// Twitter profile link.
pub const PROF_TWITTER: &str = "https://www.twitter.com/krishanthisera";

/// Prefix for images served through the image CDN.
pub const IMAGE_CDN_PREFIX: &str = "https://bizkt.imgix.net";

// ---------------------------------------------------------------------------
// Config structs (matching folio.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// `[site]` section — the Configuration Provider's constants.
    #[serde(default)]
    pub site: SiteConfig,

    /// `[gists]` section — Gist fetch settings.
    #[serde(default)]
    pub gists: GistsConfig,
}

/// `[site]` section. Fixed text constants consumed by page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_site_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default = "default_site_description")]
    pub description: String,

    /// LinkedIn profile URL.
    #[serde(default = "default_linkedin")]
    pub linkedin: String,

    /// GitHub profile URL.
    #[serde(default = "default_github")]
    pub github: String,

    /// Twitter profile URL.
    #[serde(default = "default_twitter")]
    pub twitter: String,

    /// Image CDN prefix for optimized images.
    #[serde(default = "default_image_cdn_prefix")]
    pub image_cdn_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: default_site_description(),
            linkedin: default_linkedin(),
            github: default_github(),
            twitter: default_twitter(),
            image_cdn_prefix: default_image_cdn_prefix(),
        }
    }
}

impl SiteConfig {
    /// Check the invariant that every site constant is a non-empty string.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("site.title", &self.title),
            ("site.description", &self.description),
            ("site.linkedin", &self.linkedin),
            ("site.github", &self.github),
            ("site.twitter", &self.twitter),
            ("site.image_cdn_prefix", &self.image_cdn_prefix),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(FolioError::validation(format!(
                    "{name} must not be empty"
                )));
            }
        }

        let links = [
            ("site.linkedin", &self.linkedin),
            ("site.github", &self.github),
            ("site.twitter", &self.twitter),
            ("site.image_cdn_prefix", &self.image_cdn_prefix),
        ];
        for (name, value) in links {
            url::Url::parse(value).map_err(|e| {
                FolioError::validation(format!("{name} is not a valid URL: {e}"))
            })?;
        }

        Ok(())
    }
}

fn default_site_title() -> String {
    SITE_TITLE.into()
}
fn default_site_description() -> String {
    SITE_DESCRIPTION.into()
}
fn default_linkedin() -> String {
    PROF_LINKEDIN.into()
}
fn default_github() -> String {
    PROF_GITHUB.into()
}
fn default_twitter() -> String {
    PROF_TWITTER.into()
}
fn default_image_cdn_prefix() -> String {
    IMAGE_CDN_PREFIX.into()
}

/// `[gists]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistsConfig {
    /// Default GitHub username whose public gists are fetched.
    #[serde(default = "default_username")]
    pub username: String,

    /// Base URL of the Gist listing API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GistsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_username() -> String {
    "krishanthisera".into()
}
fn default_api_base() -> String {
    "https://api.github.com".into()
}
fn default_timeout_secs() -> u64 {
    30
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.folio/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FolioError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.folio/folio.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| FolioError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| FolioError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| FolioError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| FolioError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_config_matches_constants() {
        let site = SiteConfig::default();
        assert_eq!(site.title, SITE_TITLE);
        assert_eq!(site.description, SITE_DESCRIPTION);
        assert_eq!(site.linkedin, PROF_LINKEDIN);
        assert_eq!(site.github, PROF_GITHUB);
        assert_eq!(site.twitter, PROF_TWITTER);
        assert_eq!(site.image_cdn_prefix, IMAGE_CDN_PREFIX);
    }

    #[test]
    fn default_site_config_is_valid() {
        SiteConfig::default().validate().expect("defaults validate");
    }

    #[test]
    fn empty_site_constant_fails_validation() {
        let mut site = SiteConfig::default();
        site.title = "  ".into();
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn malformed_profile_link_fails_validation() {
        let mut site = SiteConfig::default();
        site.github = "not a url".into();
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("site.github"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.site, config.site);
        assert_eq!(parsed.gists, config.gists);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[gists]
username = "someone-else"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.gists.username, "someone-else");
        assert_eq!(config.gists.api_base, "https://api.github.com");
        assert_eq!(config.gists.timeout_secs, 30);
        assert_eq!(config.site.title, SITE_TITLE);
    }
}
