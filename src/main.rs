use std::time::Duration;

use applied_scraper::config::DEFAULT_MAX_PAGES;
use applied_scraper::{Credentials, JobcanScraper, Scraper, ScraperConfig, ScraperError};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "applied-scraper")]
#[command(about = "Jobcanの休暇申請・残業申請一覧から詳細ページへのリンクを出力する")]
#[command(version)]
struct Args {
    /// ブラウザを表示して実行
    #[arg(long)]
    headed: bool,

    /// 1つの一覧で辿るページ数の上限（1以上）
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES, value_parser = parse_max_pages)]
    max_pages: usize,

    /// ページ読み込みのタイムアウト（秒）
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// テキストではなくJSONで出力
    #[arg(long)]
    json: bool,

    /// デバッグ用スクリーンショットをログに出す
    #[arg(long)]
    debug: bool,
}

fn parse_max_pages(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("1以上を指定してください".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), ScraperError> {
    // ログは標準エラーへ（標準出力は結果のみ）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ブラウザを起動する前に認証情報を確認
    let credentials = Credentials::from_env()?;
    let config = ScraperConfig::new(credentials)
        .with_headless(!args.headed)
        .with_max_pages(args.max_pages)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_debug(args.debug);

    let mut scraper = JobcanScraper::new(config);
    let report = scraper.execute().await.inspect_err(|e| error!("エラー: {}", e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(ScraperError::from)
            .inspect_err(|e| error!("エラー: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_pages_rejects_zero() {
        assert!(Args::try_parse_from(["applied-scraper", "--max-pages", "0"]).is_err());
    }

    #[test]
    fn test_max_pages_accepts_positive() {
        let args = Args::try_parse_from(["applied-scraper", "--max-pages", "3"]).unwrap();
        assert_eq!(args.max_pages, 3);

        let args = Args::try_parse_from(["applied-scraper"]).unwrap();
        assert_eq!(args.max_pages, DEFAULT_MAX_PAGES);
    }
}
