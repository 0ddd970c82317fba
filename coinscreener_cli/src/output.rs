use anyhow::Result;
use coinscreener_lib::upbit_api::MarketInfo;
use coinscreener_lib::AnalysisRecord;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
    Csv,
}

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "Market")]
    #[serde(rename = "Market")]
    symbol: String,
    #[tabled(rename = "Jump Ratio")]
    #[serde(rename = "Jump Ratio")]
    jump_ratio: String,
    #[tabled(rename = "Avg Trade Amount")]
    #[serde(rename = "Avg Trade Amount")]
    average_daily_trade_amount: String,
    #[tabled(rename = "Lowest Close")]
    #[serde(rename = "Lowest Close")]
    lowest_close: String,
    #[tabled(rename = "Average Close")]
    #[serde(rename = "Average Close")]
    average_close: String,
    #[tabled(rename = "Highest Close")]
    #[serde(rename = "Highest Close")]
    highest_close: String,
    #[tabled(rename = "Avg Volume")]
    #[serde(rename = "Avg Volume")]
    average_volume: String,
}

#[derive(Tabled, Serialize)]
struct MarketRow {
    #[tabled(rename = "Market")]
    #[serde(rename = "Market")]
    market: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    english_name: String,
    #[tabled(rename = "Korean Name")]
    #[serde(rename = "Korean Name")]
    korean_name: String,
}

// -- Row builders --

fn build_record_rows(records: &[AnalysisRecord]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            symbol: r.symbol.clone(),
            jump_ratio: format!("{:.4}", r.jump_ratio),
            average_daily_trade_amount: format_quantity(r.average_daily_trade_amount),
            lowest_close: r.lowest_close.to_string(),
            average_close: format_price(r.average_close),
            highest_close: r.highest_close.to_string(),
            average_volume: format_quantity(r.average_volume),
        })
        .collect()
}

fn build_market_rows(markets: &[MarketInfo]) -> Vec<MarketRow> {
    markets
        .iter()
        .map(|m| MarketRow {
            market: m.market.clone(),
            english_name: m.english_name.clone(),
            korean_name: m.korean_name.clone(),
        })
        .collect()
}

// -- Record output --

pub fn print_records(records: &[AnalysisRecord], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Markdown => {
            let mut table = Table::new(build_record_rows(records));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_record_rows(records) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        _ => println!("{}", Table::new(build_record_rows(records))),
    }
    Ok(())
}

// -- Market output --

pub fn print_markets(markets: &[MarketInfo], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&markets),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_market_rows(markets));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_market_rows(markets) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table => println!("{}", Table::new(build_market_rows(markets))),
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Numeric formatting --

/// Fixed two-decimal formatting for the average close column.
fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Volume and trade-amount formatting: thousands-separated integer when
/// the value exceeds 1, fixed four decimals otherwise.
fn format_quantity(value: f64) -> String {
    if value > 1.0 {
        group_thousands(value.round() as i64)
    } else {
        format!("{:.4}", value)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
