use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::applied::{collect_report, AppliedReport};
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::{ListPage, Scraper};

use super::page::BrowserPage;

const LOGIN_URL: &str = "https://ssl.jobcan.jp/login/client/";

/// Jobcan管理画面のスクレイパー
pub struct JobcanScraper {
    config: ScraperConfig,
    browser: Option<Browser>,
    page: Option<BrowserPage>,
}

impl JobcanScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            browser: None,
            page: None,
        }
    }

    fn get_page(&self) -> Result<&BrowserPage, ScraperError> {
        self.page
            .as_ref()
            .ok_or_else(|| ScraperError::BrowserInit("ブラウザが初期化されていません".into()))
    }

    /// デバッグ用にスクリーンショットをbase64でログ出力
    async fn log_screenshot(&self, page: &BrowserPage, label: &str) {
        if !self.config.debug {
            return;
        }
        match page
            .inner()
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
        {
            Ok(screenshot) => {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(&screenshot);
                debug!("{} screenshot: data:image/png;base64,{}", label, encoded);
            }
            Err(e) => debug!("スクリーンショット取得失敗: {}", e),
        }
    }

    /// 入力欄を探して文字列を入力
    async fn type_into(
        &self,
        page: &BrowserPage,
        selector: &str,
        value: &str,
        label: &str,
    ) -> Result<(), ScraperError> {
        page.inner()
            .find_element(selector)
            .await
            .map_err(|e| ScraperError::ElementNotFound(format!("{}入力欄: {}", label, e)))?
            .type_str(value)
            .await
            .map_err(|e| ScraperError::Login(format!("{}入力: {}", label, e)))?;
        debug!("{}入力完了", label);
        Ok(())
    }
}

#[async_trait]
impl Scraper for JobcanScraper {
    async fn initialize(&mut self) -> Result<(), ScraperError> {
        info!("ブラウザを初期化中...");

        // 同時実行時にプロファイルが衝突しないよう一意なディレクトリを使う
        let unique_id = format!(
            "{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );
        let user_data_dir = std::env::temp_dir().join(format!("applied-scraper-{}", unique_id));

        let mut builder = BrowserConfig::builder()
            .user_data_dir(&user_data_dir)
            .window_size(1280, 800)
            .request_timeout(self.config.timeout)
            .no_sandbox();

        if let Some(chrome_path) = &self.config.chrome_path {
            builder = builder.chrome_executable(chrome_path);
        }

        if !self.config.headless {
            builder = builder.with_head();
        }

        let config = builder
            .build()
            .map_err(|e| ScraperError::BrowserInit(format!("ブラウザ設定エラー: {}", e)))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        // ブラウザイベントハンドラをバックグラウンドで実行
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        self.browser = Some(browser);
        self.page = Some(BrowserPage::new(page, self.config.timeout));

        info!("ブラウザ初期化完了");
        Ok(())
    }

    async fn login(&mut self) -> Result<(), ScraperError> {
        let page = self.get_page()?.clone();
        let credentials = self.config.credentials.clone();
        info!(
            "ログイン処理開始: 会社ID={}, 管理者ID={}",
            credentials.client_login_id, credentials.client_manager_login_id
        );

        page.goto(LOGIN_URL).await?;

        self.type_into(&page, "#client_login_id", &credentials.client_login_id, "勤務会社ID")
            .await?;
        self.type_into(
            &page,
            "#client_manager_login_id",
            &credentials.client_manager_login_id,
            "グループ管理者ログインID",
        )
        .await?;
        self.type_into(&page, "#client_login_password", &credentials.password, "パスワード")
            .await?;

        // パスワード欄でEnterを押して送信
        page.inner()
            .find_element("#client_login_password")
            .await
            .map_err(|e| ScraperError::ElementNotFound(format!("パスワード入力欄: {}", e)))?
            .press_key("Enter")
            .await
            .map_err(|e| ScraperError::Login(format!("送信: {}", e)))?;

        page.wait_for_navigation().await?;
        page.wait_network_idle().await?;
        self.log_screenshot(&page, "Login").await;

        let current_url = page.current_url().await?.unwrap_or_default();
        debug!("ログイン後のURL: {}", current_url);
        if current_url.contains("/login") {
            return Err(ScraperError::Login(format!(
                "ログイン後もログインページのままです: {}",
                current_url
            )));
        }

        info!("ログイン完了");
        Ok(())
    }

    async fn collect(&mut self) -> Result<AppliedReport, ScraperError> {
        let page = self.get_page()?.clone();
        info!("申請一覧の取得開始...");
        collect_report(&page, self.config.max_pages).await
    }

    async fn close(&mut self) -> Result<(), ScraperError> {
        info!("ブラウザを終了中...");

        self.page = None;
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!("ブラウザ終了エラー: {}", e);
            }
            // 子プロセスの終了を待つ（タイムアウトは無視）
            let _ = tokio::time::timeout(Duration::from_secs(5), browser.wait()).await;
        }

        info!("ブラウザ終了完了");
        Ok(())
    }
}
