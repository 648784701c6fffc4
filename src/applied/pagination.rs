//! 複数ページにまたがる申請一覧の取得

use tracing::{debug, info};

use crate::error::ScraperError;
use crate::traits::ListPage;

use super::extract::parse_list_page;
use super::types::{ListRow, NameCell};

/// 一覧の先頭ページを表示している `page` から、全ページの行を取得する
///
/// ページ順・ページ内の行順で返す。重複除去や並び替えはしない。
/// 次ページリンクが残ったまま `max_pages` に達した場合はエラー。
/// `max_pages` が0でも先頭ページは読む。
pub async fn scrape_list<P>(
    page: &P,
    name_cell: NameCell,
    max_pages: usize,
) -> Result<Vec<ListRow>, ScraperError>
where
    P: ListPage + ?Sized,
{
    let mut rows: Vec<ListRow> = Vec::new();
    let mut visited = 0;

    loop {
        let html = page.content().await?;
        let current_url = page.current_url().await?;
        let data = parse_list_page(&html, name_cell, current_url.as_deref())?;
        visited += 1;

        debug!(
            "ページ{}: {} 件 (url={:?})",
            visited,
            data.rows.len(),
            current_url
        );
        rows.extend(data.rows);

        let Some(next_url) = data.next_url else {
            break;
        };

        if visited >= max_pages {
            return Err(ScraperError::PageLimitExceeded(max_pages));
        }

        info!("次のページへ: {}", next_url);
        page.goto(&next_url).await?;
    }

    info!("一覧取得完了: {} ページ, {} 件", visited, rows.len());
    Ok(rows)
}
