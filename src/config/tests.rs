#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site_url, "https://www.example.com/");
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert!(config.profile.is_none());
        assert!(!config.build.archive);
        assert!(config.build.sitemap_lastmod);
        assert_eq!(config.serve.addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
site_url = "https://cjsautodetailing.github.io/CJ-s-Auto-Detailing"

[build]
archive = true
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.build.archive);
        assert!(config.build.sitemap_lastmod);
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(
            config.site_url().unwrap().as_str(),
            "https://cjsautodetailing.github.io/CJ-s-Auto-Detailing/"
        );
    }

    #[test]
    fn test_invalid_site_url_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "site_url = \"ftp://example.com/\"\n").unwrap();

        let result = Config::load(Some(&path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();
        let result = Config::load(Some(&path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }
}
