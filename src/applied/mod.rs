//! 申請一覧モジュール
//!
//! 休暇申請・残業申請の一覧ページを全ページ辿り、名前と詳細ページURLの一覧を作る

mod extract;
mod pagination;
mod report;
mod types;

use tracing::info;

use crate::error::ScraperError;
use crate::traits::ListPage;

pub use extract::{
    extract_names, extract_params, merge_rows, next_page_url, parse_detail_params,
    parse_list_page, ListPageData,
};
pub use pagination::scrape_list;
pub use report::{sort_by_name, to_sorted_links, AppliedLink, AppliedReport};
pub use types::{AppliedKind, DetailParams, ListRow, NameCell, OVER_WORK_DETAIL_URL};

/// 一覧ページへ遷移して全ページを取得し、名前順のリンク一覧を返す
pub async fn collect_links<P>(
    page: &P,
    kind: AppliedKind,
    max_pages: usize,
) -> Result<Vec<AppliedLink>, ScraperError>
where
    P: ListPage + ?Sized,
{
    info!("{} 一覧へ遷移: {}", kind.header(), kind.list_url());
    page.goto(kind.list_url()).await?;
    let rows = scrape_list(page, kind.name_cell(), max_pages).await?;
    Ok(to_sorted_links(rows))
}

/// 休暇申請 → 残業申請の順に取得
pub async fn collect_report<P>(page: &P, max_pages: usize) -> Result<AppliedReport, ScraperError>
where
    P: ListPage + ?Sized,
{
    let holiday = collect_links(page, AppliedKind::Holiday, max_pages).await?;
    let over_work = collect_links(page, AppliedKind::OverWork, max_pages).await?;

    info!(
        "取得完了: 休暇申請 {} 件, 残業申請 {} 件",
        holiday.len(),
        over_work.len()
    );
    Ok(AppliedReport { holiday, over_work })
}
