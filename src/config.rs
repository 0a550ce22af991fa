use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::design::{PageSize, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
use crate::error::{FigInvoiceError, Result};
use crate::figma::{DEFAULT_BASE_URL, DEFAULT_THUMBNAIL_SCALE, DEFAULT_TIMEOUT};
use crate::invoice::CurrencyFormat;

pub const DEFAULT_STORE_DIR: &str = ".figinvoice/templates";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub currency: CurrencyFormat,
    pub figma: FigmaConfig,
    pub store: StoreConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

impl From<PageConfig> for PageSize {
    fn from(page: PageConfig) -> Self {
        PageSize {
            width: page.width,
            height: page.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigmaConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    pub thumbnail_scale: f32,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_STORE_DIR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub zoom: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Config {
    /// `$HOME/.config/figinvoice/config.toml`, when `HOME` is set.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(".config/figinvoice/config.toml"))
    }

    /// Load from `path`, else the central config if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::central_config_path().filter(|p| p.is_file()) {
                Some(central) => Self::from_file(&central),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.page.width > 0.0 && self.page.height > 0.0) {
            return Err(FigInvoiceError::Config(format!(
                "page size must be positive, got {}x{}",
                self.page.width, self.page.height
            )));
        }
        if !(self.preview.zoom > 0.0) {
            return Err(FigInvoiceError::Config(format!(
                "preview zoom must be greater than zero, got {}",
                self.preview.zoom
            )));
        }
        if !(self.figma.thumbnail_scale > 0.0) {
            return Err(FigInvoiceError::Config(format!(
                "thumbnail scale must be greater than zero, got {}",
                self.figma.thumbnail_scale
            )));
        }
        if self.currency.decimals > 6 {
            return Err(FigInvoiceError::Config(format!(
                "currency decimals must be at most 6, got {}",
                self.currency.decimals
            )));
        }
        if self.figma.timeout.is_zero() {
            return Err(FigInvoiceError::Config(
                "figma timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
