use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::widgets::article_params::model::{ArticleField, ArticleState};
use crate::widgets::article_params::{ArticleParamsError, VisibilityMode};

const CONFIG_ENV: &str = "READVIEW_CONFIG";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Startup configuration of the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ReaderConfig {
    pub(crate) visibility_mode: VisibilityMode,
    pub(crate) article: ArticleState,
}

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ReaderConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: ReaderConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ReaderConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    panel: RawPanel,
    article: RawArticle,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPanel {
    visibility: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawArticle {
    font_family: Option<String>,
    font_size: Option<String>,
    font_color: Option<String>,
    background_color: Option<String>,
    content_width: Option<String>,
}

impl RawArticle {
    fn value(&self, field: ArticleField) -> Option<&str> {
        let value = match field {
            ArticleField::FontFamily => &self.font_family,
            ArticleField::FontSize => &self.font_size,
            ArticleField::FontColor => &self.font_color,
            ArticleField::BackgroundColor => &self.background_color,
            ArticleField::ContentWidth => &self.content_width,
        };
        value.as_deref()
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ReaderConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_config(&data) {
        Ok((config, problems)) if problems.is_empty() => {
            Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded))
        },
        Ok((config, problems)) => Ok(ConfigLoad::new(
            config,
            ConfigLoadStatus::Invalid(problems.join("; ")),
        )),
        Err(ConfigError::Json(err)) => Ok(ConfigLoad::new(
            ReaderConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
        Err(err) => Err(err),
    }
}

/// Parse a config payload. Unknown values fall back to their defaults and
/// are reported in the returned problem list.
fn parse_config(
    data: &str,
) -> Result<(ReaderConfig, Vec<String>), ConfigError> {
    let raw: RawConfig = serde_json::from_str(data)?;
    let mut problems = Vec::new();

    let visibility_mode = match raw.panel.visibility.as_deref() {
        None => VisibilityMode::default(),
        Some(value) => parse_visibility(value).unwrap_or_else(|| {
            problems.push(format!("unknown panel visibility: {value}"));
            VisibilityMode::default()
        }),
    };

    let mut article = ArticleState::default();
    for field in ArticleField::ALL {
        let Some(value) = raw.article.value(field) else {
            continue;
        };
        match field.option_by_value(value) {
            Ok(option) => article.set(field, option),
            Err(err @ ArticleParamsError::UnknownOption { .. }) => {
                problems.push(err.to_string());
            },
        }
    }

    Ok((
        ReaderConfig {
            visibility_mode,
            article,
        },
        problems,
    ))
}

fn parse_visibility(value: &str) -> Option<VisibilityMode> {
    match value {
        "panel-owned" => Some(VisibilityMode::PanelOwned),
        "owner-controlled" => Some(VisibilityMode::OwnerControlled),
        _ => None,
    }
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("readview")
            .join("config.json");
    }

    std::env::temp_dir().join("readview").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        ConfigLoadStatus, ReaderConfig, VisibilityMode, load_config_from_path,
        parse_config,
    };
    use crate::widgets::article_params::model::{
        ArticleField, ArticleState, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS,
        FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
    };

    #[test]
    fn given_valid_config_when_load_then_values_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("config.json");
        fs::write(
            &path,
            r##"{
                "panel": { "visibility": "owner-controlled" },
                "article": {
                    "font_family": "merriweather",
                    "font_size": "38px",
                    "background_color": "#C4C4C4",
                    "content_width": "948px"
                }
            }"##,
        )
        .expect("config payload should be written");

        let loaded =
            load_config_from_path(&path).expect("config should load");
        let (config, status) = loaded.into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.visibility_mode, VisibilityMode::OwnerControlled);
        let expected = ArticleState::default()
            .with(ArticleField::FontFamily, FONT_FAMILY_OPTIONS[4])
            .with(ArticleField::FontSize, FONT_SIZE_OPTIONS[2])
            .with(ArticleField::BackgroundColor, BACKGROUND_COLORS[2])
            .with(ArticleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);
        assert_eq!(config.article, expected);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_load_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("absent.json");

        let loaded = load_config_from_path(&path)
            .expect("missing config should not be an error");
        let (config, status) = loaded.into_parts();

        assert_eq!(status, ConfigLoadStatus::Missing);
        assert_eq!(config, ReaderConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, ReaderConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_option_when_parsed_then_only_that_field_falls_back() {
        let (config, problems) = parse_config(
            r#"{ "article": { "font_size": "99px", "content_width": "948px" } }"#,
        )
        .expect("payload is valid json");

        assert_eq!(
            config.article,
            ArticleState::default()
                .with(ArticleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1])
        );
        assert_eq!(problems, vec![String::from(
            "unknown font_size option: 99px"
        )]);
    }

    #[test]
    fn given_unknown_visibility_when_parsed_then_panel_owned_is_used() {
        let (config, problems) =
            parse_config(r#"{ "panel": { "visibility": "sometimes" } }"#)
                .expect("payload is valid json");

        assert_eq!(config.visibility_mode, VisibilityMode::PanelOwned);
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn given_empty_object_when_parsed_then_defaults_without_problems() {
        let (config, problems) =
            parse_config("{}").expect("payload is valid json");

        assert_eq!(config, ReaderConfig::default());
        assert!(problems.is_empty());
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "readview-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
