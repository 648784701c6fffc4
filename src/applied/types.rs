//! 申請一覧の型定義

use serde::{Deserialize, Serialize};

/// 詳細ページURLのテンプレート（残業申請）
///
/// 休暇申請の行もこのテンプレートでリンクを作る。
pub const OVER_WORK_DETAIL_URL: &str =
    "https://ssl.jobcan.jp/client/employee-over-work-applied/detail/";

/// 行の操作ボタンに埋め込まれた `showDetail(employeeId, appliedId, offset)` の引数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailParams {
    pub employee_id: String,
    pub applied_id: String,
    pub offset: String,
}

impl DetailParams {
    /// 詳細ページURLを組み立てる
    pub fn detail_url(&self) -> String {
        format!(
            "{}?employee_id={}&applied_id={}&offset={}",
            OVER_WORK_DETAIL_URL, self.employee_id, self.applied_id, self.offset
        )
    }
}

/// 一覧の1行（名前とパラメータをマージしたもの）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub name: String,
    #[serde(flatten)]
    pub params: DetailParams,
}

/// 3列目の名前セルの読み方
///
/// 休暇申請と残業申請でDOMの構成が異なる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCell {
    /// セルのテキストをそのまま使う（休暇申請）
    CellText,
    /// 先頭の `span` の中身を使う（残業申請）。spanが無ければセルのテキスト。
    ///
    /// 中身はテキストとして取り出すので、実体参照はデコードされ（`&amp;` → `&`）、
    /// span内のタグは除かれる。
    FirstSpan,
}

/// 申請一覧の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedKind {
    /// 休暇申請
    Holiday,
    /// 残業申請
    OverWork,
}

impl AppliedKind {
    pub fn list_url(&self) -> &'static str {
        match self {
            Self::Holiday => "https://ssl.jobcan.jp/client/employee-holiday-applied",
            Self::OverWork => "https://ssl.jobcan.jp/client/employee-over-work-applied",
        }
    }

    /// 出力時の見出し
    pub fn header(&self) -> &'static str {
        match self {
            Self::Holiday => "【休暇申請】",
            Self::OverWork => "【残業申請】",
        }
    }

    pub fn name_cell(&self) -> NameCell {
        match self {
            Self::Holiday => NameCell::CellText,
            Self::OverWork => NameCell::FirstSpan,
        }
    }
}
