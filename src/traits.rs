use async_trait::async_trait;

use crate::applied::AppliedReport;
use crate::error::ScraperError;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// ブラウザ初期化
    async fn initialize(&mut self) -> Result<(), ScraperError>;

    /// ログイン実行
    async fn login(&mut self) -> Result<(), ScraperError>;

    /// 休暇申請・残業申請一覧の取得
    async fn collect(&mut self) -> Result<AppliedReport, ScraperError>;

    /// リソース解放
    async fn close(&mut self) -> Result<(), ScraperError>;

    /// 一括実行（initialize → login → collect → close）
    ///
    /// 途中で失敗してもブラウザは閉じる。
    async fn execute(&mut self) -> Result<AppliedReport, ScraperError> {
        let mut ready = self.initialize().await;
        if ready.is_ok() {
            ready = self.login().await;
        }
        let result = match ready {
            Ok(()) => self.collect().await,
            Err(e) => Err(e),
        };
        let closed = self.close().await;
        let report = result?;
        closed?;
        Ok(report)
    }
}

/// 一覧ページを表示しているブラウザのページ
///
/// 抽出処理はこのトレイト越しにHTMLを取得するので、テストではメモリ上の
/// フィクスチャに差し替えられる。
#[async_trait]
pub trait ListPage: Send + Sync {
    /// 指定URLへ遷移し、読み込み完了まで待機
    async fn goto(&self, url: &str) -> Result<(), ScraperError>;

    /// 現在のドキュメントのHTML
    async fn content(&self) -> Result<String, ScraperError>;

    /// 現在のURL
    async fn current_url(&self) -> Result<Option<String>, ScraperError>;
}
