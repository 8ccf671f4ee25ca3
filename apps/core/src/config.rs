//! Application configuration.
//!
//! Everything the shell and the export tool need is carried in an explicit
//! [`AppConfig`] that callers construct once and pass down. Credentials are
//! read from the environment (with `.env` support via `dotenv` in `main`);
//! nothing in this crate reads configuration from a global.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;
use validator::Validate;

/// Environment variable holding the Figma personal access token.
pub const FIGMA_TOKEN_VAR: &str = "FIGMA_TOKEN";
/// Environment variable holding the Figma file key (from the file URL).
pub const FIGMA_FILE_KEY_VAR: &str = "FIGMA_FILE_KEY";

/// Optional settings file overriding the default export targets.
pub const EXPORT_SETTINGS_FILE: &str = "export-settings.json";

const DEFAULT_NAV_DELAY_MS: u64 = 500;
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;

/// Optional overrides for the shell timings, all in milliseconds.
pub const NAV_DELAY_VAR: &str = "SHELL_NAV_DELAY_MS";
pub const NOTIFICATION_TTL_VAR: &str = "SHELL_NOTIFICATION_TTL_MS";
pub const RESIZE_DEBOUNCE_VAR: &str = "SHELL_RESIZE_DEBOUNCE_MS";

/// Credentials for the Figma REST API.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FigmaConfig {
    /// Personal access token sent as the `X-Figma-Token` header.
    #[validate(length(min = 1))]
    pub token: String,
    /// Key of the file to export from.
    #[validate(length(min = 1))]
    pub file_key: String,
}

impl FigmaConfig {
    /// Reads credentials from the environment.
    ///
    /// Fails fast when either variable is missing or empty, so the export
    /// run never gets as far as a doomed network call.
    pub fn from_env() -> Result<Self, AppError> {
        let token = env::var(FIGMA_TOKEN_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", FIGMA_TOKEN_VAR)))?;
        let file_key = env::var(FIGMA_FILE_KEY_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", FIGMA_FILE_KEY_VAR)))?;

        let config = Self { token, file_key };
        config.validate()?;
        Ok(config)
    }
}

/// Output format for exported assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// The value the Figma images endpoint expects, which doubles as the
    /// file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// One export step: which Figma pages to pull from and where the files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTarget {
    pub format: ImageFormat,
    /// Render scale passed to the API (`None` means the API default of 1x).
    pub scale: Option<String>,
    pub output_dir: PathBuf,
    /// Figma page names whose top-level children are exported.
    pub pages: Vec<String>,
}

/// Settings for the asset export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    pub icons: ExportTarget,
    pub images: ExportTarget,
    /// Destination of the generated color-token stylesheet.
    pub tokens_path: PathBuf,
}

impl ExportSettings {
    /// Reads a full settings override from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            icons: ExportTarget {
                format: ImageFormat::Svg,
                scale: None,
                output_dir: PathBuf::from("./assets/icons/"),
                pages: vec!["Icons".to_string(), "Components".to_string()],
            },
            images: ExportTarget {
                format: ImageFormat::Png,
                scale: Some("2".to_string()),
                output_dir: PathBuf::from("./assets/images/"),
                pages: vec!["Assets".to_string(), "Images".to_string()],
            },
            tokens_path: PathBuf::from("./assets/tokens/figma-tokens.css"),
        }
    }
}

/// Timings for the interactive shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Pause between a routed notification and the navigation it announces.
    pub nav_delay: Duration,
    /// How long a posted notification stays visible.
    pub notification_ttl: Duration,
    /// Quiet period used to coalesce viewport resize bursts.
    pub resize_debounce: Duration,
}

impl ShellConfig {
    /// Defaults, with per-timing overrides read from the environment.
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self {
            nav_delay: millis_from_env(NAV_DELAY_VAR, DEFAULT_NAV_DELAY_MS),
            notification_ttl: millis_from_env(NOTIFICATION_TTL_VAR, DEFAULT_NOTIFICATION_TTL_MS),
            resize_debounce: millis_from_env(RESIZE_DEBOUNCE_VAR, DEFAULT_RESIZE_DEBOUNCE_MS),
        }
    }
}

fn millis_from_env(var: &str, default_ms: u64) -> Duration {
    let ms = match env::var(var) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(ms) => ms,
            Err(_) => {
                warn!(var, value = %raw, "ignoring unparsable timing override");
                default_ms
            }
        },
        Err(_) => default_ms,
    };
    Duration::from_millis(ms)
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            nav_delay: Duration::from_millis(DEFAULT_NAV_DELAY_MS),
            notification_ttl: Duration::from_millis(DEFAULT_NOTIFICATION_TTL_MS),
            resize_debounce: Duration::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS),
        }
    }
}

/// Top-level configuration, assembled in `main` and injected everywhere else.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub export: ExportSettings,
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Builds the configuration: defaults, with export targets overridden by
    /// an `export-settings.json` in the working directory when present.
    pub fn load() -> Result<Self, AppError> {
        let settings_file = Path::new(EXPORT_SETTINGS_FILE);
        let export = if settings_file.exists() {
            ExportSettings::from_file(settings_file)?
        } else {
            ExportSettings::default()
        };
        Ok(Self {
            export,
            shell: ShellConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fail() {
        temp_env::with_vars_unset([FIGMA_TOKEN_VAR, FIGMA_FILE_KEY_VAR], || {
            let result = FigmaConfig::from_env();
            assert!(matches!(result, Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_empty_token_rejected() {
        temp_env::with_vars(
            [(FIGMA_TOKEN_VAR, Some("")), (FIGMA_FILE_KEY_VAR, Some("abc123"))],
            || {
                let result = FigmaConfig::from_env();
                assert!(matches!(result, Err(AppError::Config(_))));
            },
        );
    }

    #[test]
    fn test_credentials_read_from_env() {
        temp_env::with_vars(
            [
                (FIGMA_TOKEN_VAR, Some("figd_secret")),
                (FIGMA_FILE_KEY_VAR, Some("abc123")),
            ],
            || {
                let config = FigmaConfig::from_env().expect("credentials should load");
                assert_eq!(config.token, "figd_secret");
                assert_eq!(config.file_key, "abc123");
            },
        );
    }

    #[test]
    fn test_shell_timings_default_without_overrides() {
        temp_env::with_vars_unset(
            [NAV_DELAY_VAR, NOTIFICATION_TTL_VAR, RESIZE_DEBOUNCE_VAR],
            || {
                let shell = ShellConfig::from_env();
                assert_eq!(shell.nav_delay, Duration::from_millis(500));
                assert_eq!(shell.notification_ttl, Duration::from_millis(3000));
                assert_eq!(shell.resize_debounce, Duration::from_millis(150));
            },
        );
    }

    #[test]
    fn test_shell_timing_override_from_env() {
        temp_env::with_vars(
            [
                (NAV_DELAY_VAR, Some("250")),
                (NOTIFICATION_TTL_VAR, None),
                (RESIZE_DEBOUNCE_VAR, Some("not-a-number")),
            ],
            || {
                let shell = ShellConfig::from_env();
                assert_eq!(shell.nav_delay, Duration::from_millis(250));
                assert_eq!(shell.notification_ttl, Duration::from_millis(3000));
                // Unparsable overrides fall back to the default.
                assert_eq!(shell.resize_debounce, Duration::from_millis(150));
            },
        );
    }

    #[test]
    fn test_default_export_settings() {
        let settings = ExportSettings::default();
        assert_eq!(settings.icons.format, ImageFormat::Svg);
        assert_eq!(settings.images.format, ImageFormat::Png);
        assert_eq!(settings.images.scale.as_deref(), Some("2"));
        assert!(settings.icons.pages.contains(&"Icons".to_string()));
    }

    #[test]
    fn test_export_settings_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("export-settings.json");
        std::fs::write(
            &path,
            r#"{
                "icons": {
                    "format": "svg",
                    "scale": null,
                    "output_dir": "./out/icons/",
                    "pages": ["Glyphs"]
                },
                "images": {
                    "format": "png",
                    "scale": "3",
                    "output_dir": "./out/images/",
                    "pages": ["Artwork"]
                },
                "tokens_path": "./out/tokens.css"
            }"#,
        )
        .unwrap();

        let settings = ExportSettings::from_file(&path).unwrap();
        assert_eq!(settings.icons.pages, vec!["Glyphs".to_string()]);
        assert_eq!(settings.images.scale.as_deref(), Some("3"));
        assert_eq!(settings.tokens_path, PathBuf::from("./out/tokens.css"));
    }

    #[test]
    fn test_malformed_settings_file_is_a_validation_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("export-settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ExportSettings::from_file(&path),
            Err(AppError::Validation(_))
        ));
    }
}
