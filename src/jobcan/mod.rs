//! Jobcan管理画面モジュール
//!
//! ブラウザを起動してログインし、休暇申請・残業申請一覧を取得する

mod page;
mod scraper;

pub use page::BrowserPage;
pub use scraper::JobcanScraper;
