use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("pawmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub panel: Option<Panel>,
    pub session: Option<Session>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
    pub token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub fetch_timeout: Option<Duration>,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

// Missing keys are taken from the embedded default file, which
// must therefore contain all of them.
#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Panel {
    #[serde(deserialize_with = "deserialize_duration")]
    pub min_loading_duration: Duration,
    pub reviews_per_page: u32,
    pub bookmark_failure: BookmarkFailure,
}

impl Default for Panel {
    fn default() -> Self {
        Config::default().panel.expect("Panel configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookmarkFailure {
    Rollback,
    Keep,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub viewer_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_file() {
        let cfg = Config::default();
        let api = cfg.api.unwrap();
        assert_eq!(api.base_url, "http://localhost:8080");
        assert_eq!(api.fetch_timeout, Some(Duration::from_secs(30)));
        assert!(api.token.is_none());
        let panel = cfg.panel.unwrap();
        assert_eq!(panel.min_loading_duration, Duration::from_secs(1));
        assert_eq!(panel.reviews_per_page, 15);
        assert!(matches!(panel.bookmark_failure, BookmarkFailure::Rollback));
        assert!(cfg.session.unwrap().viewer_id.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [api]
            base-url = "https://api.example.org"

            [panel]
            min-loading-duration = "250ms"
            reviews-per-page = 5
            bookmark-failure = "keep"
            "#,
        )
        .unwrap();
        assert!(cfg.api.unwrap().fetch_timeout.is_none());
        assert!(cfg.session.is_none());
        let panel = cfg.panel.unwrap();
        assert_eq!(panel.min_loading_duration, Duration::from_millis(250));
        assert!(matches!(panel.bookmark_failure, BookmarkFailure::Keep));
    }

    #[test]
    fn incomplete_panel_section_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [panel]
            bookmark-failure = "keep"
            "#,
        )
        .unwrap();
        let panel = cfg.panel.unwrap();
        assert_eq!(panel.min_loading_duration, Duration::from_secs(1));
        assert_eq!(panel.reviews_per_page, 15);
        assert!(matches!(panel.bookmark_failure, BookmarkFailure::Keep));
    }

    #[test]
    fn reject_unknown_bookmark_policy() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            [panel]
            min-loading-duration = "1s"
            reviews-per-page = 15
            bookmark-failure = "retry"
            "#,
        );
        assert!(res.is_err());
    }
}
