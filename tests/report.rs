mod common;

use applied_scraper::applied::{collect_report, AppliedKind};

use common::{holiday_page, over_work_page, row, FixturePage};

const HOLIDAY_PAGE2: &str = "https://ssl.jobcan.jp/client/employee-holiday-applied?page=2";

fn fixture() -> FixturePage {
    FixturePage::new()
        .with_page(
            AppliedKind::Holiday.list_url(),
            holiday_page(
                &[row("Tanaka", (1, 100, 0)), row("Abe", (2, 200, 0))],
                Some(HOLIDAY_PAGE2),
            ),
        )
        .with_page(
            HOLIDAY_PAGE2,
            holiday_page(&[row("Ito", (3, 300, 20))], None),
        )
        .with_page(
            AppliedKind::OverWork.list_url(),
            over_work_page(&[row("Suzuki", (4, 400, 0))], None),
        )
}

#[tokio::test]
async fn test_end_to_end_output() {
    let page = fixture();

    let report = collect_report(&page, 10).await.unwrap();

    let expected = "\
【休暇申請】
Abe: https://ssl.jobcan.jp/client/employee-over-work-applied/detail/?employee_id=2&applied_id=200&offset=0
Ito: https://ssl.jobcan.jp/client/employee-over-work-applied/detail/?employee_id=3&applied_id=300&offset=20
Tanaka: https://ssl.jobcan.jp/client/employee-over-work-applied/detail/?employee_id=1&applied_id=100&offset=0
【残業申請】
Suzuki: https://ssl.jobcan.jp/client/employee-over-work-applied/detail/?employee_id=4&applied_id=400&offset=0
";
    assert_eq!(report.to_string(), expected);
}

#[tokio::test]
async fn test_holiday_then_over_work_order() {
    let page = fixture();

    let report = collect_report(&page, 10).await.unwrap();

    assert_eq!(report.holiday.len(), 3);
    assert_eq!(report.over_work.len(), 1);
    assert_eq!(
        page.visits(),
        vec![
            AppliedKind::Holiday.list_url().to_string(),
            HOLIDAY_PAGE2.to_string(),
            AppliedKind::OverWork.list_url().to_string(),
        ]
    );
}

#[tokio::test]
async fn test_over_work_name_ignores_sub_text() {
    let page = fixture();
    let report = collect_report(&page, 10).await.unwrap();
    assert_eq!(report.over_work[0].name, "Suzuki");
}
