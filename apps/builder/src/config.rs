use std::path::PathBuf;

/// Build configuration loaded from environment variables.
/// Every variable is optional; unset ones take the documented default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for profile documents.
    pub resume_data_dir: PathBuf,
    /// Fixed-path layout document.
    pub layout_config: PathBuf,
    /// Directory the generated `<stem>.html` is written to.
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            resume_data_dir: env_or("RESUME_DATA_DIR", "resume-data").into(),
            layout_config: env_or("LAYOUT_CONFIG", "layout-config.yml").into(),
            output_dir: env_or("OUTPUT_DIR", ".").into(),
            rust_log: env_or("RUST_LOG", "info"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(
            env_or("RESUME_BUILDER_TEST_SURELY_UNSET_VAR", "resume-data"),
            "resume-data"
        );
    }
}
