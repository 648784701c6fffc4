use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::Page;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::ScraperError;
use crate::traits::ListPage;

/// ネットワークアイドル待機のタイムアウト（ミリ秒）
const NETWORK_IDLE_TIMEOUT_MS: u64 = 30000;
/// ネットワークアイドル判定のインターバル（ミリ秒）
const NETWORK_IDLE_CHECK_INTERVAL_MS: u64 = 500;
/// 連続でアイドルと判定された回数がこれに達したら完了
const REQUIRED_IDLE_CHECKS: u32 = 3;

/// chromiumoxideのページにナビゲーションのタイムアウトを付けたもの
#[derive(Clone)]
pub struct BrowserPage {
    page: Page,
    timeout: Duration,
}

impl BrowserPage {
    pub fn new(page: Page, timeout: Duration) -> Self {
        Self { page, timeout }
    }

    pub fn inner(&self) -> &Page {
        &self.page
    }

    /// 現在のナビゲーションの完了を待機
    pub async fn wait_for_navigation(&self) -> Result<(), ScraperError> {
        tokio::time::timeout(self.timeout, self.page.wait_for_navigation())
            .await
            .map_err(|_| {
                ScraperError::Timeout(format!(
                    "ナビゲーションが{}秒以内に完了しませんでした",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;
        Ok(())
    }

    /// ネットワークリクエストがアイドル状態になるまで待機
    pub async fn wait_network_idle(&self) -> Result<(), ScraperError> {
        info!("ネットワークのアイドル待機中...");
        let start = Instant::now();
        let timeout = Duration::from_millis(NETWORK_IDLE_TIMEOUT_MS);
        let mut idle_count = 0;

        while start.elapsed() < timeout {
            let result = self
                .page
                .evaluate(
                    r#"
                    (() => {
                        // 直近500ms以内に開始され未完了のリクエストがあるか
                        const now = performance.now();
                        const pending = performance.getEntriesByType('resource').filter(e => {
                            return (now - e.startTime) < 500 && e.duration === 0;
                        });
                        return pending.length === 0 && document.readyState === 'complete';
                    })()
                "#,
                )
                .await;

            match result {
                Ok(val) => {
                    if val.into_value::<bool>().unwrap_or(false) {
                        idle_count += 1;
                        if idle_count >= REQUIRED_IDLE_CHECKS {
                            debug!("ネットワークアイドル: {:?}", start.elapsed());
                            return Ok(());
                        }
                    } else {
                        idle_count = 0;
                    }
                }
                Err(e) => {
                    debug!("アイドル判定エラー: {}", e);
                    idle_count = 0;
                }
            }

            sleep(Duration::from_millis(NETWORK_IDLE_CHECK_INTERVAL_MS)).await;
        }

        warn!(
            "ネットワークアイドル待機がタイムアウトしました ({:?})、続行します",
            start.elapsed()
        );
        Ok(())
    }
}

#[async_trait]
impl ListPage for BrowserPage {
    async fn goto(&self, url: &str) -> Result<(), ScraperError> {
        tokio::time::timeout(self.timeout, self.page.goto(url))
            .await
            .map_err(|_| {
                ScraperError::Timeout(format!(
                    "{} の読み込みが{}秒以内に完了しませんでした",
                    url,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ScraperError::Navigation(format!("{}: {}", url, e)))?;
        Ok(())
    }

    async fn content(&self) -> Result<String, ScraperError> {
        self.page
            .content()
            .await
            .map_err(|e| ScraperError::Navigation(format!("HTML取得: {}", e)))
    }

    async fn current_url(&self) -> Result<Option<String>, ScraperError> {
        self.page
            .url()
            .await
            .map_err(|e| ScraperError::Navigation(format!("URL取得: {}", e)))
    }
}
