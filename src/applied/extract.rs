//! 一覧ページ1枚分のHTMLから行と次ページURLを取り出す

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::ScraperError;

use super::types::{DetailParams, ListRow, NameCell};

const LIST_SELECTOR: &str = "#applied-list";
const NAME_CELL_SELECTOR: &str = "#applied-list > tr.applied-row > td:nth-child(3)";
const NAME_SPAN_SELECTOR: &str = "span:nth-child(1)";
const CONTROL_SELECTOR: &str = "#applied-list > tr.applied-row > td > input.btn";
const NEXT_PAGE_SELECTOR: &str = ".pager > :nth-last-child(2)";

static SHOW_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    // 先頭の `.*` で最後の showDetail( を拾う
    Regex::new(r".*showDetail\((\d+),\s*(\d+),\s*(\d+)").expect("showDetail pattern")
});

/// 一覧ページ1枚の抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPageData {
    pub rows: Vec<ListRow>,
    pub next_url: Option<String>,
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css)
        .map_err(|e| ScraperError::ElementNotFound(format!("セレクタ {}: {:?}", css, e)))
}

/// ASCIIの空白だけを詰めたテキスト（innerText相当）
///
/// 全角スペース（U+3000）は名前の一部なのでそのまま残す。
fn cell_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split(|c: char| c.is_ascii_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 3列目の名前一覧を取得
pub fn extract_names(doc: &Html, name_cell: NameCell) -> Result<Vec<String>, ScraperError> {
    let cells = selector(NAME_CELL_SELECTOR)?;
    let span = selector(NAME_SPAN_SELECTOR)?;

    Ok(doc
        .select(&cells)
        .map(|td| match name_cell {
            NameCell::CellText => cell_text(td),
            NameCell::FirstSpan => td
                .select(&span)
                .next()
                .map(cell_text)
                .unwrap_or_else(|| cell_text(td)),
        })
        .collect())
}

/// 操作ボタンのマークアップから `showDetail(a, b, c)` の引数を取り出す
pub fn parse_detail_params(markup: &str) -> Result<DetailParams, ScraperError> {
    let caps = SHOW_DETAIL
        .captures(markup)
        .ok_or_else(|| ScraperError::DetailParamsNotFound(markup.to_string()))?;

    Ok(DetailParams {
        employee_id: caps[1].to_string(),
        applied_id: caps[2].to_string(),
        offset: caps[3].to_string(),
    })
}

/// 各行の操作ボタンからパラメータ一覧を取得
pub fn extract_params(doc: &Html) -> Result<Vec<DetailParams>, ScraperError> {
    let controls = selector(CONTROL_SELECTOR)?;
    doc.select(&controls)
        .map(|button| parse_detail_params(&button.html()))
        .collect()
}

/// 名前とパラメータを行順にマージ。件数が違えばエラー。
pub fn merge_rows(
    names: Vec<String>,
    params: Vec<DetailParams>,
) -> Result<Vec<ListRow>, ScraperError> {
    if names.len() != params.len() {
        return Err(ScraperError::RowCountMismatch {
            names: names.len(),
            controls: params.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(params)
        .map(|(name, params)| ListRow { name, params })
        .collect())
}

/// ページャーの後ろから2番目の要素のhrefを次ページURLとして返す
///
/// 相対URLは `base_url` を基準に解決する。hrefが無い・空なら最終ページ。
pub fn next_page_url(doc: &Html, base_url: Option<&str>) -> Result<Option<String>, ScraperError> {
    let pager = selector(NEXT_PAGE_SELECTOR)?;

    let href = match doc
        .select(&pager)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::trim)
    {
        Some(href) if !href.is_empty() => href,
        _ => return Ok(None),
    };

    let url = match base_url {
        Some(base) => Url::parse(base)?.join(href)?,
        None => Url::parse(href)?,
    };
    Ok(Some(url.to_string()))
}

/// 一覧ページ1枚分を解析
pub fn parse_list_page(
    html: &str,
    name_cell: NameCell,
    base_url: Option<&str>,
) -> Result<ListPageData, ScraperError> {
    let doc = Html::parse_document(html);

    if doc.select(&selector(LIST_SELECTOR)?).next().is_none() {
        return Err(ScraperError::ElementNotFound(format!(
            "申請一覧 ({})",
            LIST_SELECTOR
        )));
    }

    let names = extract_names(&doc, name_cell)?;
    let params = extract_params(&doc)?;
    debug!("名前 {} 件, パラメータ {} 件", names.len(), params.len());

    let rows = merge_rows(names, params)?;
    let next_url = next_page_url(&doc, base_url)?;

    Ok(ListPageData { rows, next_url })
}
