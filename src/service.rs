use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tower::Service;
use tracing::info;

use crate::applied::AppliedReport;
use crate::config::{Credentials, ScraperConfig, DEFAULT_MAX_PAGES};
use crate::error::ScraperError;
use crate::jobcan::JobcanScraper;
use crate::traits::Scraper;

/// スクレイピングリクエスト
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub credentials: Credentials,
    pub headless: bool,
    pub max_pages: usize,
}

impl ScrapeRequest {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            headless: true,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScraperConfig::new(req.credentials)
            .with_headless(req.headless)
            .with_max_pages(req.max_pages)
            .with_timeout(Duration::from_secs(60))
    }
}

/// tower::Serviceを実装したスクレイパーサービス
#[derive(Debug, Clone, Default)]
pub struct ScraperService {}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = AppliedReport;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!(
            "スクレイピングリクエスト受信: client_login_id={}",
            req.credentials.client_login_id
        );

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let mut scraper = JobcanScraper::new(config);

            let report = scraper.execute().await?;

            info!(
                "スクレイピング完了: 休暇申請={}件, 残業申請={}件",
                report.holiday.len(),
                report.over_work.len()
            );

            Ok(report)
        })
    }
}
