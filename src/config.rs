use std::time::Duration;

use crate::error::ScraperError;

pub const ENV_CLIENT_LOGIN_ID: &str = "CLIENT_LOGIN_ID";
pub const ENV_CLIENT_MANAGER_LOGIN_ID: &str = "CLIENT_MANAGER_LOGIN_ID";
pub const ENV_CLIENT_LOGIN_PASSWORD: &str = "CLIENT_LOGIN_PASSWORD";

/// 一覧を辿るページ数の上限（既定値）
pub const DEFAULT_MAX_PAGES: usize = 100;

/// ログイン認証情報
#[derive(Clone)]
pub struct Credentials {
    /// 勤務会社ID
    pub client_login_id: String,
    /// グループ管理者ログインID
    pub client_manager_login_id: String,
    /// パスワード
    pub password: String,
}

impl Credentials {
    pub fn new(
        client_login_id: impl Into<String>,
        client_manager_login_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_login_id: client_login_id.into(),
            client_manager_login_id: client_manager_login_id.into(),
            password: password.into(),
        }
    }

    /// 環境変数（.envを含む）から読み込む
    pub fn from_env() -> Result<Self, ScraperError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から読み込む。未設定・空文字はエラー。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScraperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ScraperError::Config(format!("環境変数 {} が設定されていません", key)))
        };

        Ok(Self {
            client_login_id: get(ENV_CLIENT_LOGIN_ID)?,
            client_manager_login_id: get(ENV_CLIENT_MANAGER_LOGIN_ID)?,
            password: get(ENV_CLIENT_LOGIN_PASSWORD)?,
        })
    }
}

// パスワードをログに出さない
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_login_id", &self.client_login_id)
            .field("client_manager_login_id", &self.client_manager_login_id)
            .field("password", &"********")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub credentials: Credentials,
    pub headless: bool,
    pub timeout: Duration,
    pub max_pages: usize,
    pub debug: bool,
    pub chrome_path: Option<String>,
}

impl ScraperConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            headless: true,
            timeout: Duration::from_secs(60),
            max_pages: DEFAULT_MAX_PAGES,
            debug: false,
            chrome_path: std::env::var("CHROME_PATH")
                .or_else(|_| std::env::var("CHROMIUM_PATH"))
                .ok(),
        }
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}
