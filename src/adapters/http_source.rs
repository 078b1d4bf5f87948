use crate::domain::ports::{ConfigProvider, ContributionSource};
use crate::utils::error::{ContribError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://github.com/users";

/// 透過 HTTP 取得 `<base>/<name>/contributions`
#[derive(Debug, Clone)]
pub struct HttpContributionSource {
    client: Client,
    base_url: Url,
}

impl HttpContributionSource {
    pub fn new(base_url: &str, timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ContribError::InvalidConfigValueError {
            field: "source.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ContribError::InvalidConfigValueError {
                field: "source.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.source_base_url(),
            config.request_timeout(),
            config.user_agent(),
        )
    }

    /// 使用者名稱會被編碼成單一路徑片段，不會跳出 base 路徑
    pub fn contributions_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        // new() 已排除 cannot-be-a-base 的 URL
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name).push("contributions");
        }
        url
    }
}

#[async_trait]
impl ContributionSource for HttpContributionSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let url = self.contributions_url(name);
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Source response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(ContribError::NotFound {
                name: name.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ContribError::FetchFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
