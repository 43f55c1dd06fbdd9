//! Application configuration
//!
//! Built once at startup from a key lookup (Shuttle secrets, then the
//! process environment). Blank values count as unset.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the completion-service credential
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Groq connection settings (present only when a credential is configured)
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Locations of the static site files
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub resume_path: PathBuf,
    /// File name offered to the browser for the resume download
    pub resume_download_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            resume_path: PathBuf::from("resume.pdf"),
            resume_download_name: "Akash_Swain_Resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// `None` when no credential was supplied; chat then fails closed.
    pub groq: Option<GroqConfig>,
    pub site: SiteConfig,
}

impl AppConfig {
    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let groq = match get(GROQ_API_KEY) {
            Some(api_key) => {
                let mut groq = GroqConfig::new(api_key.trim());
                if let Some(base_url) = get("GROQ_BASE_URL") {
                    groq = groq.with_base_url(base_url.trim_end_matches('/'));
                }
                if let Some(model) = get("GROQ_MODEL") {
                    groq = groq.with_model(model);
                }
                if let Some(raw) = get("GROQ_TEMPERATURE") {
                    groq.temperature = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("GROQ_TEMPERATURE must be a number, got {raw:?}"))?;
                }
                Some(groq)
            }
            None => None,
        };

        let mut site = SiteConfig::default();
        if let Some(dir) = get("SITE_TEMPLATES_DIR") {
            site.templates_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("SITE_STATIC_DIR") {
            site.static_dir = PathBuf::from(dir);
        }
        if let Some(path) = get("SITE_RESUME_PATH") {
            site.resume_path = PathBuf::from(path);
        }

        Ok(Self { groq, site })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_key_disables_groq() {
        let config = config_from(&[("GROQ_MODEL", "llama-3.3-70b-versatile")]).unwrap();
        assert!(config.groq.is_none());
        assert_eq!(config.site.resume_path, PathBuf::from("resume.pdf"));
    }

    #[test]
    fn test_blank_key_disables_groq() {
        let config = config_from(&[(GROQ_API_KEY, "   ")]).unwrap();
        assert!(config.groq.is_none());
    }

    #[test]
    fn test_defaults_with_key() {
        let config = config_from(&[(GROQ_API_KEY, "gsk_test")]).unwrap();
        let groq = config.groq.unwrap();
        assert_eq!(groq.api_key, "gsk_test");
        assert_eq!(groq.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(groq.model, "llama-3.1-8b-instant");
        assert_eq!(groq.temperature, 0.2);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (GROQ_API_KEY, "gsk_test"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1/"),
            ("GROQ_MODEL", "llama-3.3-70b-versatile"),
            ("GROQ_TEMPERATURE", "0.5"),
            ("SITE_STATIC_DIR", "/srv/static"),
        ])
        .unwrap();
        let groq = config.groq.unwrap();
        assert_eq!(groq.base_url, "http://localhost:9000/v1");
        assert_eq!(groq.model, "llama-3.3-70b-versatile");
        assert_eq!(groq.temperature, 0.5);
        assert_eq!(config.site.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn test_bad_temperature_is_rejected() {
        let err = config_from(&[(GROQ_API_KEY, "gsk_test"), ("GROQ_TEMPERATURE", "warm")])
            .unwrap_err();
        assert!(err.to_string().contains("GROQ_TEMPERATURE"));
    }
}
