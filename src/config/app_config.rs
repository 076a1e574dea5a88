use std::fmt;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub okta_org_name: String,
    pub okta_base_url: String,
    pub okta_org_url: Option<String>,
    pub okta_api_token: String,
    pub okta_request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            okta_org_name: std::env::var("OKTA_ORG_NAME").unwrap_or_default(),
            okta_base_url: std::env::var("OKTA_BASE_URL")
                .unwrap_or_else(|_| "okta.com".to_string()),
            okta_org_url: std::env::var("OKTA_ORG_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            okta_api_token: std::env::var("OKTA_API_TOKEN").unwrap_or_default(),
            okta_request_timeout_secs: std::env::var("OKTA_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// `OKTA_ORG_URL` when set, otherwise `https://{OKTA_ORG_NAME}.{OKTA_BASE_URL}`.
    pub fn okta_api_base_url(&self) -> Result<String, String> {
        if let Some(url) = &self.okta_org_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        if self.okta_org_name.trim().is_empty() {
            return Err("either OKTA_ORG_URL or OKTA_ORG_NAME must be set".to_string());
        }
        Ok(format!(
            "https://{}.{}",
            self.okta_org_name.trim(),
            self.okta_base_url.trim()
        ))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("okta_org_name", &self.okta_org_name)
            .field("okta_base_url", &self.okta_base_url)
            .field("okta_org_url", &self.okta_org_url)
            .field("okta_api_token", &"<redacted>")
            .field("okta_request_timeout_secs", &self.okta_request_timeout_secs)
            .finish()
    }
}
