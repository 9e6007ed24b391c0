use anyhow::{anyhow, Result};
use pawmap_core::{
    entities::{UserId, DEFAULT_PAGE_SIZE},
    panel::{BookmarkFailurePolicy, PanelOptions},
};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "pawmap.toml";

const ENV_NAME_API_URL: &str = "PAWMAP_API_URL";
const ENV_NAME_API_TOKEN: &str = "PAWMAP_API_TOKEN";
const ENV_NAME_VIEWER_ID: &str = "PAWMAP_VIEWER_ID";

pub struct Config {
    pub api: Api,
    pub panel: Panel,
    pub session: Session,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    /// Values looked up by environment variable name take precedence
    /// over the configuration file.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_NAME_API_URL) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_NAME_API_TOKEN) {
            self.api.token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Some(id) = lookup(ENV_NAME_VIEWER_ID) {
            let id = id
                .parse::<UserId>()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_VIEWER_ID} '{id}': {err}"))?;
            self.session.viewer_id = Some(id);
        }
        Ok(())
    }

    pub const fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            min_loading_duration: self.panel.min_loading_duration,
            page_size: self.panel.reviews_per_page,
            bookmark_failure: self.panel.bookmark_failure,
        }
    }
}

pub struct Api {
    /// Base URL of the remote place service.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    pub fetch_timeout: Option<Duration>,
}

pub struct Panel {
    pub min_loading_duration: Duration,
    pub reviews_per_page: u32,
    pub bookmark_failure: BookmarkFailurePolicy,
}

pub struct Session {
    /// Without a viewer the panel is read-only.
    pub viewer_id: Option<UserId>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            panel,
            session,
        } = from;

        let raw::Api {
            base_url,
            token,
            fetch_timeout,
        } = api.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(anyhow!("Missing API base URL"));
        }
        let api = Api {
            base_url,
            token,
            fetch_timeout,
        };

        let raw::Panel {
            min_loading_duration,
            reviews_per_page,
            bookmark_failure,
        } = panel.unwrap_or_default();
        let reviews_per_page = if reviews_per_page == 0 {
            log::warn!("Invalid reviews-per-page 0: use {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        } else {
            reviews_per_page
        };
        let bookmark_failure = match bookmark_failure {
            raw::BookmarkFailure::Rollback => BookmarkFailurePolicy::Rollback,
            raw::BookmarkFailure::Keep => BookmarkFailurePolicy::Keep,
        };
        let panel = Panel {
            min_loading_duration,
            reviews_per_page,
            bookmark_failure,
        };

        let raw::Session { viewer_id } = session.unwrap_or_default();
        let session = Session {
            viewer_id: viewer_id.map(UserId::from),
        };

        Ok(Self {
            api,
            panel,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        let opts = cfg.panel_options();
        assert_eq!(opts.min_loading_duration, Duration::from_secs(1));
        assert_eq!(opts.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(opts.bookmark_failure, BookmarkFailurePolicy::Rollback);
        assert!(cfg.session.viewer_id.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = load(
            r#"
            [session]
            viewer-id = 7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8080");
        assert_eq!(cfg.panel.reviews_per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.session.viewer_id, Some(UserId::new(7)));
    }

    #[test]
    fn keep_policy_and_zero_page_size() {
        let cfg = load(
            r#"
            [panel]
            min-loading-duration = "0s"
            reviews-per-page = 0
            bookmark-failure = "keep"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.panel.bookmark_failure, BookmarkFailurePolicy::Keep);
        assert_eq!(cfg.panel.reviews_per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.panel.min_loading_duration, Duration::ZERO);
    }

    #[test]
    fn reject_blank_base_url() {
        let res = load(
            r#"
            [api]
            base-url = " "
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let vars: HashMap<&str, &str> = [
            (ENV_NAME_API_URL, "https://pets.example.org"),
            (ENV_NAME_API_TOKEN, "secret"),
            (ENV_NAME_VIEWER_ID, " 42 "),
        ]
        .into_iter()
        .collect();
        cfg.apply_overrides(|name| vars.get(name).map(|v| (*v).to_owned()))
            .unwrap();
        assert_eq!(cfg.api.base_url, "https://pets.example.org");
        assert_eq!(cfg.api.token.as_deref(), Some("secret"));
        assert_eq!(cfg.session.viewer_id, Some(UserId::new(42)));
    }

    #[test]
    fn reject_malformed_viewer_override() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let res = cfg.apply_overrides(|name| (name == ENV_NAME_VIEWER_ID).then(|| "rex".to_owned()));
        assert!(res.is_err());
        assert!(cfg.session.viewer_id.is_none());
    }
}
