#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets_dir: String,
    pub log_spec: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            log_spec: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_assets_and_info_logging() {
        let config = AppConfig::default();
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.log_spec, "info");
    }
}
