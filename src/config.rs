//! User configuration: palette, timing and card geometry.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/card-deck/config.toml` (default
//! `~/.config/card-deck/config.toml`).  Unknown keys and bad values are
//! ignored and the default is kept.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::palette::{Palette, Swatch};
use crate::core::slider::Timing;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Background colour for each card index.
    pub palette: Palette,
    /// Snap-back / reset transition length and cleanup delay.
    pub settle_ms: u64,
    /// Delay before a freshly committed card's parts ease home.
    pub restage_ms: u64,
    /// Card width as a percentage of the terminal width.
    pub card_width_pct: u16,
    /// Frame interval for redraws and eased motion.
    pub frame_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            settle_ms: 500,
            restage_ms: 50,
            card_width_pct: 40,
            frame_ms: 16,
        }
    }
}

impl AppConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            settle: Duration::from_millis(self.settle_ms),
            restage: Duration::from_millis(self.restage_ms),
        }
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path` (or the default location), falling back to
    /// defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(err) => {
                tracing::debug!("no config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Persist current config to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "palette" => {
                    let mut swatches = Vec::new();
                    for part in value.split(',') {
                        match part.trim().trim_matches('"').parse::<Swatch>() {
                            Ok(swatch) => swatches.push(swatch),
                            Err(err) => tracing::warn!("skipping palette entry: {err}"),
                        }
                    }
                    if !swatches.is_empty() {
                        config.palette = Palette::new(swatches);
                    }
                }
                "settle_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.settle_ms = v.clamp(50, 5000);
                    }
                }
                "restage_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.restage_ms = v.min(1000);
                    }
                }
                "card_width_pct" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.card_width_pct = v.clamp(10, 90);
                    }
                }
                "frame_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        // Keep this bounded for predictable motion.
                        config.frame_ms = v.clamp(8, 100);
                    }
                }
                _ => tracing::debug!("unknown config key `{key}`"),
            }
        }

        config
    }

    pub fn serialise(&self) -> String {
        let palette: Vec<String> = self.palette.swatches().iter().map(|s| s.to_string()).collect();
        let lines = vec![
            "# card-deck configuration".to_string(),
            String::new(),
            "# Background colour per card, in deck order".to_string(),
            format!("palette = {}", palette.join(", ")),
            String::new(),
            "# Timing (milliseconds)".to_string(),
            format!("settle_ms = {}", self.settle_ms),
            format!("restage_ms = {}", self.restage_ms),
            format!("frame_ms = {}", self.frame_ms),
            String::new(),
            "# Card width as a percentage of the terminal width".to_string(),
            format!("card_width_pct = {}", self.card_width_pct),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/card-deck/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("card-deck").join("config.toml")
}
