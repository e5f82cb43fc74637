use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::{api::gemini, prelude::*};

#[derive(Parser)]
pub struct GeminiArgs {
    #[clap(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[clap(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub model: String,

    #[clap(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub base_url: Url,

    /// Request timeout in seconds.
    #[clap(long = "gemini-timeout", env = "GEMINI_TIMEOUT", default_value = "60")]
    pub timeout_secs: u64,
}

impl GeminiArgs {
    pub fn new_client(&self) -> Result<gemini::Api> {
        gemini::Api::builder()
            .api_key(&self.api_key)
            .base_url(self.base_url.clone())
            .model(self.model.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }
}
