use types::Result;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: Url,
}

impl Config {
    /// Reads `PORTAL_API_URL` at build time. The browser has no process
    /// environment, so this is the only override point.
    pub fn from_env() -> Result<Self> {
        Self::with_api_url(option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let mut api_url = Url::parse(api_url)?;
        // Endpoint paths are joined relative to the base, which drops the
        // last segment unless it ends in a slash.
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        Ok(Self { api_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse("http://localhost:8000/api/").expect("default api url is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_gets_trailing_slash() {
        let config = Config::with_api_url("http://localhost:8000/api").unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/api/");
        assert_eq!(
            config.api_url.join("secret-data").unwrap().as_str(),
            "http://localhost:8000/api/secret-data"
        );
    }

    #[test]
    fn default_matches_default_url() {
        assert_eq!(Config::default(), Config::with_api_url(DEFAULT_API_URL).unwrap());
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(Config::with_api_url("not a url").is_err());
    }
}
