//! Jobcan 申請一覧スクレイパー
//!
//! - 管理画面にログイン
//! - 休暇申請・残業申請の一覧を全ページ取得
//! - 名前順に並べた詳細ページへのリンクを出力
//!
//! # 使用例
//!
//! ```rust,ignore
//! use applied_scraper::{Credentials, JobcanScraper, Scraper, ScraperConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = Credentials::from_env().unwrap();
//!     let config = ScraperConfig::new(credentials).with_headless(false);
//!
//!     let mut scraper = JobcanScraper::new(config);
//!     let report = scraper.execute().await.unwrap();
//!     print!("{}", report);
//! }
//! ```
//!
//! # tower::Service として使う
//!
//! ```rust,ignore
//! use applied_scraper::{ScrapeRequest, ScraperService};
//! use tower::Service;
//!
//! let mut service = ScraperService::new();
//! let report = service.call(ScrapeRequest::new(credentials)).await?;
//! ```

pub mod applied;
pub mod config;
pub mod error;
pub mod jobcan;
pub mod service;
pub mod traits;

// 主要な型をリエクスポート
pub use applied::{AppliedKind, AppliedLink, AppliedReport, ListRow};
pub use config::{Credentials, ScraperConfig};
pub use error::ScraperError;
pub use jobcan::JobcanScraper;
pub use service::{ScrapeRequest, ScraperService};
pub use traits::{ListPage, Scraper};
