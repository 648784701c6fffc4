//! 出力用のリンク一覧

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{AppliedKind, ListRow};

/// 名前と詳細ページURL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedLink {
    pub name: String,
    pub url: String,
}

impl From<ListRow> for AppliedLink {
    fn from(row: ListRow) -> Self {
        Self {
            url: row.params.detail_url(),
            name: row.name,
        }
    }
}

/// 行をリンクに変換し、名前順に並べる（同名は元の順序を保つ）
pub fn to_sorted_links(rows: Vec<ListRow>) -> Vec<AppliedLink> {
    let mut links: Vec<AppliedLink> = rows.into_iter().map(AppliedLink::from).collect();
    sort_by_name(&mut links);
    links
}

pub fn sort_by_name(links: &mut [AppliedLink]) {
    links.sort_by(|a, b| a.name.cmp(&b.name));
}

/// 休暇申請・残業申請の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedReport {
    pub holiday: Vec<AppliedLink>,
    pub over_work: Vec<AppliedLink>,
}

impl AppliedReport {
    pub fn links(&self, kind: AppliedKind) -> &[AppliedLink] {
        match kind {
            AppliedKind::Holiday => &self.holiday,
            AppliedKind::OverWork => &self.over_work,
        }
    }

    pub fn len(&self) -> usize {
        self.holiday.len() + self.over_work.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for AppliedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in [AppliedKind::Holiday, AppliedKind::OverWork] {
            writeln!(f, "{}", kind.header())?;
            for link in self.links(kind) {
                writeln!(f, "{}: {}", link.name, link.url)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applied::types::DetailParams;

    fn link(name: &str, url: &str) -> AppliedLink {
        AppliedLink {
            name: name.into(),
            url: url.into(),
        }
    }

    #[test]
    fn test_sort_by_name() {
        let mut links = vec![link("Tanaka", "u1"), link("Abe", "u2")];
        sort_by_name(&mut links);
        assert_eq!(links[0].name, "Abe");
        assert_eq!(links[1].name, "Tanaka");
    }

    #[test]
    fn test_sort_keeps_order_of_same_names() {
        let mut links = vec![link("Sato", "first"), link("Abe", "x"), link("Sato", "second")];
        sort_by_name(&mut links);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_to_sorted_links_builds_detail_url() {
        let rows = vec![ListRow {
            name: "Abe".into(),
            params: DetailParams {
                employee_id: "1".into(),
                applied_id: "2".into(),
                offset: "0".into(),
            },
        }];
        let links = to_sorted_links(rows);
        assert_eq!(
            links[0].url,
            "https://ssl.jobcan.jp/client/employee-over-work-applied/detail/?employee_id=1&applied_id=2&offset=0"
        );
    }

    #[test]
    fn test_display() {
        let report = AppliedReport {
            holiday: vec![link("Abe", "u2"), link("Tanaka", "u1")],
            over_work: vec![],
        };
        assert_eq!(
            report.to_string(),
            "【休暇申請】\nAbe: u2\nTanaka: u1\n【残業申請】\n"
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_json() {
        let report = AppliedReport {
            holiday: vec![],
            over_work: vec![link("Abe", "u")],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["over_work"][0]["name"], "Abe");
        assert_eq!(json["holiday"].as_array().map(Vec::len), Some(0));
    }
}
