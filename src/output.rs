//! Result Writers
//!
//! Serializes a ranked `ArbResult` list to CSV (every opportunity) and JSON
//! (top K) per `spec.md` §6.

use std::io::Write;

use serde::Serialize;

use crate::brain::aggregator::ArbResult;
use crate::interner::TokenInterner;

/// Write the full ranked result set as CSV:
/// `rank,base_token,base_symbol,net_profit_eth,input_amount,path_array`.
pub fn write_csv<W: Write>(
    mut writer: W,
    results: &[ArbResult],
    interner: &TokenInterner,
    weth_id: usize,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "rank,base_token,base_symbol,net_profit_eth,input_amount,path_array"
    )?;

    for (i, result) in results.iter().enumerate() {
        let base_token = interner.resolve(result.base_id).unwrap_or("");
        let base_symbol = if result.base_id == weth_id { "WETH" } else { "OTHER" };
        let path_array = format_path_array(&result.path, interner);

        writeln!(
            writer,
            "{},{},{},{},{},\"{}\"",
            i + 1,
            base_token,
            base_symbol,
            result.net_profit_eth,
            result.opt_input,
            path_array
        )?;
    }
    Ok(())
}

/// One entry of the top-K JSON array (`spec.md` §6).
#[derive(Debug, Serialize)]
struct JsonResult {
    id: usize,
    #[serde(rename = "inputAmount")]
    input_amount: String,
    #[serde(rename = "expectedProfit")]
    expected_profit: String,
    path: Vec<String>,
}

/// Write the top `k` results as a JSON array with 18-fractional-digit
/// decimal strings for the numeric fields (`spec.md` §6).
pub fn write_json_top_k<W: Write>(
    writer: W,
    results: &[ArbResult],
    interner: &TokenInterner,
    k: usize,
) -> serde_json::Result<()> {
    let entries: Vec<JsonResult> = results
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, result)| JsonResult {
            id: i + 1,
            input_amount: format!("{:.18}", result.opt_input),
            expected_profit: format!("{:.18}", result.net_profit_eth),
            path: result
                .path
                .iter()
                .map(|&id| interner.resolve(id).unwrap_or("").to_string())
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(writer, &entries)
}

/// `["0xaaa","0xbbb","0xaaa"]`-shaped inner payload for the CSV column
/// (the CSV writer wraps it in the outer double quotes).
fn format_path_array(path: &[usize], interner: &TokenInterner) -> String {
    let quoted: Vec<String> = path
        .iter()
        .map(|&id| format!("\"\"{}\"\"", interner.resolve(id).unwrap_or("")))
        .collect();
    format!("[{}]", quoted.join(","))
}
