use std::path::{Path, PathBuf};

use figinvoice_lib::{Config, FigInvoiceError, FsTemplateStore};
use tracing::debug;

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/figinvoice/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigInvoiceError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        FigInvoiceError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FigInvoiceError::Config(prefix)
    })?;

    debug!("{}", format_effective_config(&cfg, path));
    Ok(cfg)
}

/// CLI `--store-dir` wins over `[store] dir`.
pub fn resolve_store_dir(cli_store_dir: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_store_dir.unwrap_or_else(|| config.store.dir.clone())
}

pub fn open_store(cli_store_dir: Option<PathBuf>, config: &Config) -> FsTemplateStore {
    FsTemplateStore::new(resolve_store_dir(cli_store_dir, config))
}

/// Format effective config as a single-line string.
pub fn format_effective_config(config: &Config, config_source: Option<&Path>) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: page={}x{}, currency={} ({} decimals), figma={} (timeout {}s, thumbnail scale {}), store={}, zoom={}",
        config.page.width,
        config.page.height,
        config.currency.symbol,
        config.currency.decimals,
        config.figma.base_url,
        config.figma.timeout.as_secs(),
        config.figma.thumbnail_scale,
        config.store.dir.display(),
        config.preview.zoom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_dir_prefers_cli_flag() {
        let cfg = Config::default();
        assert_eq!(
            resolve_store_dir(Some(PathBuf::from("/tmp/x")), &cfg),
            PathBuf::from("/tmp/x")
        );
        assert_eq!(
            resolve_store_dir(None, &cfg),
            PathBuf::from(".figinvoice/templates")
        );
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/figinvoice.toml"))).unwrap_err();
        match err {
            FigInvoiceError::Config(msg) => assert!(msg.contains("Failed to read config")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_values_are_reported_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[preview]\nzoom = 0").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn format_effective_config_includes_all_fields() {
        let summary = format_effective_config(&Config::default(), Some(Path::new("fi.toml")));
        assert!(summary.contains("page=800x1200"));
        assert!(summary.contains("timeout 30s"));
        assert!(summary.contains("thumbnail scale 0.5"));
        assert!(summary.contains("store=.figinvoice/templates"));
        assert!(summary.contains("fi.toml"));
    }
}
