use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

use anyhow::Result;

// 2024-03-05, 2024-03-20 and 2024-04-02, all at noon UTC.
const MARCH_5: i64 = 1_709_640_000_000;
const MARCH_20: i64 = 1_710_936_000_000;
const APRIL_2: i64 = 1_712_059_200_000;

fn record(id: u32, timestamp: i64, kind: &str, amount: &str) -> String {
    format!(
        r#"{{"id":{id},"userId":3,"userName":"Helena Fernandez","timestamp":{timestamp},"txnType":"{kind}","amount":"{amount}","ip":"10.0.0.{id}"}}"#
    )
}

fn page(page: u32, records: &[String]) -> String {
    format!(
        r#"{{"page":{page},"per_page":2,"total":3,"total_pages":2,"data":[{}]}}"#,
        records.join(",")
    )
}

/// Serves the two pages of user 3; anything else gets a 500.
fn serve_user_three() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let first = page(1, &[record(1, MARCH_5, "credit", "$1,100"), record(2, MARCH_20, "debit", "$40.50")]);
    let second = page(2, &[record(3, APRIL_2, "credit", "$50")]);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 1024];

            while !buffer.windows(4).any(|window| window == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(read) => buffer.extend_from_slice(&chunk[..read]),
                }
            }

            let head = String::from_utf8_lossy(&buffer).to_string();
            let target = head.split_whitespace().nth(1).unwrap_or_default().to_string();

            let (status, body) = match target.as_str() {
                "/api/transactions?userId=3&page=1" => (200, first.clone()),
                "/api/transactions?userId=3&page=2" => (200, second.clone()),
                _ => (500, String::from("{}")),
            };

            let response = format!(
                "HTTP/1.1 {status} STATUS\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    Ok(base_url)
}

fn run(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_monthly-statements");

    Ok(Command::new(binary_path).args(args).output()?)
}

#[test]
fn test_cli_outputs_monthly_csv_across_pages() -> Result<()> {
    let base_url = serve_user_three()?;

    for strategy in ["concurrent", "sequential"] {
        let output = run(&["--user-id", "3", "--base-url", &base_url, "--utc", "--format", "csv", "--strategy", strategy])?;

        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines, vec![
            "month,balance,credit,debit,transactions",
            "03-2024,1059.50,1100.00,40.50,2",
            "04-2024,50.00,50.00,0.00,1",
        ]);
    }

    Ok(())
}

#[test]
fn test_cli_renders_statement_cards_as_html() -> Result<()> {
    let base_url = serve_user_three()?;

    let output = run(&["--user-id", "3", "--base-url", &base_url, "--utc", "--format", "html"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains(r#"<p id="user-name">Helena Fernandez</p>"#));
    assert!(stdout.contains(r#"<option value="3" selected>Helena Fernandez</option>"#));
    assert!(stdout.contains(r#"id="submit-btn""#));
    assert!(stdout.contains(r#"<p id="user-balance">Balance: $1,109.50</p>"#));
    assert_eq!(stdout.matches(r#"class="statement-card""#).count(), 2);

    Ok(())
}

#[test]
fn test_cli_reports_json_totals() -> Result<()> {
    let base_url = serve_user_three()?;

    let output = run(&["--user-id", "3", "--base-url", &base_url, "--utc", "--format", "json"])?;

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(value["balance"], "1109.50");
    assert_eq!(value["totalCredit"], "1150.00");
    assert_eq!(value["totalDebit"], "40.50");
    assert_eq!(value["monthly"].as_array().map(Vec::len), Some(2));

    Ok(())
}

#[test]
fn test_cli_fails_when_the_records_source_errors() -> Result<()> {
    let base_url = serve_user_three()?;

    let output = run(&["--user-id", "9", "--base-url", &base_url])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Could not fetch transactions for user [9]"));

    Ok(())
}

#[test]
fn test_cli_requires_a_positive_user_id() -> Result<()> {
    assert!(!run(&[])?.status.success());
    assert!(!run(&["--user-id", "0"])?.status.success());

    Ok(())
}
