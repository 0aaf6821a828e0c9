use std::path::Path;

use httpscrub_core::Settings;
use tracing::debug;

use crate::error::ConfigError;
use crate::matcher::ANY;

/// Serialization formats a settings document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// File extensions handled by this format.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
            Self::Toml => &["toml"],
        }
    }

    /// Pick the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Result<Self, ConfigError> {
        let ext = ext.to_ascii_lowercase();
        [Self::Json, Self::Yaml, Self::Toml]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
            .ok_or(ConfigError::UnsupportedFormat(ext))
    }

    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Parse and validate a settings document.
    pub fn parse(self, content: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {e}")))?,
            Self::Yaml => serde_yaml_ng::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("YAML parse error: {e}")))?,
            Self::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {e}")))?,
        };
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Read, parse and validate a settings file. The format follows the file
/// extension.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("cannot read {}: {e}", path.display())))?;

    let settings = format.parse(&content).map_err(|e| match e {
        ConfigError::Parse(msg) => ConfigError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    debug!(
        path = %path.display(),
        hosts = settings.redactions.hosts().len(),
        rules = settings.redactions.rule_count(),
        whitelist = settings.whitelist.len(),
        "loaded settings"
    );
    Ok(settings)
}

/// Reject entries the engine could not act on: empty hosts, paths or match
/// values.
pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    for (h, host) in settings.redactions.hosts().iter().enumerate() {
        if host.host.trim().is_empty() {
            return Err(ConfigError::Validation(format!("redactions[{h}]: empty host")));
        }
        for (p, path) in host.paths.iter().enumerate() {
            if path.path.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "redactions[{h}].paths[{p}]: empty path"
                )));
            }
            if path.glob && path.path == ANY {
                debug!(host = %host.host, "glob flag on '*' path is redundant");
            }
            for (r, rule) in path.rules.iter().enumerate() {
                if rule.match_value.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "redactions[{h}].paths[{p}].redactions[{r}]: empty value"
                    )));
                }
            }
        }
    }

    for (w, entry) in settings.whitelist.iter().enumerate() {
        if entry.host.trim().is_empty() {
            return Err(ConfigError::Validation(format!("whitelist[{w}]: empty host")));
        }
        if let Some(p) = entry.paths.iter().position(|path| path.path.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "whitelist[{w}].paths[{p}]: empty path"
            )));
        }
    }

    Ok(())
}
