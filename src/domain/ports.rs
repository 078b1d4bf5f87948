use crate::domain::model::ActivityRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// 取得某位使用者貢獻頁面的原始 HTML
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// 遠端回 404 時為 `ContribError::NotFound`，其他失敗為抓取錯誤
    async fn fetch(&self, name: &str) -> Result<String>;
}

pub trait MarkupExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> Vec<ActivityRecord>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn source_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
}
