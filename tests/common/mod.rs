//! メモリ上のHTMLでブラウザのページを代替するフィクスチャ

use std::collections::HashMap;
use std::sync::Mutex;

use applied_scraper::{ListPage, ScraperError};
use async_trait::async_trait;

pub struct FixturePage {
    pages: HashMap<String, String>,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    current: Option<String>,
    visits: Vec<String>,
}

#[allow(dead_code)]
impl FixturePage {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    /// 指定URLを表示している状態にする
    pub fn open(self, url: &str) -> Self {
        self.state.lock().unwrap().current = Some(url.to_string());
        self
    }

    pub fn visits(&self) -> Vec<String> {
        self.state.lock().unwrap().visits.clone()
    }
}

#[async_trait]
impl ListPage for FixturePage {
    async fn goto(&self, url: &str) -> Result<(), ScraperError> {
        if !self.pages.contains_key(url) {
            return Err(ScraperError::Navigation(format!("not found: {}", url)));
        }
        let mut state = self.state.lock().unwrap();
        state.current = Some(url.to_string());
        state.visits.push(url.to_string());
        Ok(())
    }

    async fn content(&self) -> Result<String, ScraperError> {
        let state = self.state.lock().unwrap();
        state
            .current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .cloned()
            .ok_or_else(|| ScraperError::Navigation("no page loaded".into()))
    }

    async fn current_url(&self) -> Result<Option<String>, ScraperError> {
        Ok(self.state.lock().unwrap().current.clone())
    }
}

pub struct Row<'a> {
    pub name: &'a str,
    pub ids: (u32, u32, u32),
}

#[allow(dead_code)]
pub fn row(name: &str, ids: (u32, u32, u32)) -> Row<'_> {
    Row { name, ids }
}

fn button((e, a, o): (u32, u32, u32)) -> String {
    format!(
        r#"<td><input type="button" class="btn btn-default" value="詳細" onclick="showDetail({e}, {a}, {o});"></td>"#
    )
}

fn pager(next: Option<&str>) -> String {
    let next = match next {
        Some(href) => format!(r#"<a href="{href}">&gt;</a>"#),
        None => r#"<span class="disabled">&gt;</span>"#.to_string(),
    };
    format!(r#"<div class="pager"><a href="?page=1">1</a><span>2</span>{next}<span>&gt;&gt;</span></div>"#)
}

fn page(body: String, next: Option<&str>) -> String {
    format!(
        r#"<html><body><table class="table"><thead><tr><th>日付</th><th>種別</th><th>氏名</th><th></th></tr></thead><tbody id="applied-list">{body}</tbody></table>{pager}</body></html>"#,
        pager = pager(next)
    )
}

/// 休暇申請一覧（名前セルはテキストのみ）
#[allow(dead_code)]
pub fn holiday_page(rows: &[Row<'_>], next: Option<&str>) -> String {
    let body: String = rows
        .iter()
        .map(|r| {
            format!(
                r#"<tr class="applied-row"><td>2024/04/01</td><td>有給休暇</td><td>{}</td>{}</tr>"#,
                r.name,
                button(r.ids)
            )
        })
        .collect();
    page(body, next)
}

/// 残業申請一覧（名前セルは先頭のspan）
#[allow(dead_code)]
pub fn over_work_page(rows: &[Row<'_>], next: Option<&str>) -> String {
    let body: String = rows
        .iter()
        .map(|r| {
            format!(
                r#"<tr class="applied-row"><td>2024/04/01</td><td>残業</td><td><span>{}</span><br><span class="text-muted">2.0h</span></td>{}</tr>"#,
                r.name,
                button(r.ids)
            )
        })
        .collect();
    page(body, next)
}
