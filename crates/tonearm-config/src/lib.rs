// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";
pub const DEFAULT_APPLICATION: &str = "Tonearm";
pub const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_CONTACT: &str = "https://github.com/tonearm-rs/tonearm";

/// Settings for talking to the MusicBrainz web service.
///
/// `application`, `version` and `contact` make up the `User-Agent` header.
/// MusicBrainz asks every client to identify itself, so real deployments
/// should override the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicBrainzConfig {
    pub base_url: String,
    pub application: String,
    pub version: String,
    pub contact: String,
    pub timeout_secs: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            version: DEFAULT_VERSION.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    pub musicbrainz: MusicBrainzConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: TONEARM_).
///
/// Opt-in for applications: the MusicBrainz client never calls this and never reads files or
/// the environment on its own. Pass the result to `MusicBrainzClientBuilder::from_config`.
pub fn load(config_path: Option<&Path>) -> Result<ClientConfig> {
    let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("TONEARM_").split("__"));

    let config: ClientConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_point_at_public_service() {
        let config = ClientConfig::default();
        assert_eq!(config.musicbrainz.base_url, "https://musicbrainz.org/ws/2");
        assert_eq!(config.musicbrainz.application, "Tonearm");
        assert_eq!(config.musicbrainz.timeout_secs, 30);
    }

    #[test]
    fn load_without_sources_returns_defaults() {
        Jail::expect_with(|_jail| {
            let config = load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, ClientConfig::default());
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "tonearm.toml",
                r#"
                [musicbrainz]
                application = "Crate Digger"
                version = "2.1.0"
                contact = "digger@example.org"
                "#,
            )?;

            let config = load(Some(Path::new("tonearm.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.musicbrainz.application, "Crate Digger");
            assert_eq!(config.musicbrainz.version, "2.1.0");
            assert_eq!(config.musicbrainz.contact, "digger@example.org");
            assert_eq!(config.musicbrainz.base_url, DEFAULT_BASE_URL);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "tonearm.toml",
                r#"
                [musicbrainz]
                base_url = "http://mirror.local/ws/2"
                timeout_secs = 5
                "#,
            )?;
            jail.set_env("TONEARM_MUSICBRAINZ__BASE_URL", "http://localhost:5000/ws/2");

            let config = load(Some(Path::new("tonearm.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.musicbrainz.base_url, "http://localhost:5000/ws/2");
            assert_eq!(config.musicbrainz.timeout_secs, 5);
            Ok(())
        });
    }
}
