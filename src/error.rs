use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("ブラウザ初期化エラー: {0}")]
    BrowserInit(String),

    #[error("ナビゲーションエラー: {0}")]
    Navigation(String),

    #[error("ログインエラー: {0}")]
    Login(String),

    #[error("タイムアウト: {0}")]
    Timeout(String),

    #[error("要素が見つかりません: {0}")]
    ElementNotFound(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("showDetailのパラメータが見つかりません: {0}")]
    DetailParamsNotFound(String),

    #[error("名前と操作ボタンの件数が一致しません: 名前={names}, ボタン={controls}")]
    RowCountMismatch { names: usize, controls: usize },

    #[error("ページ数の上限({0})を超えました")]
    PageLimitExceeded(usize),

    #[error("JSON変換エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URLエラー: {0}")]
    Url(#[from] url::ParseError),
}
