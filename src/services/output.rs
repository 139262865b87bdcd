use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

fn envelope<T: Serialize>(data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

/// List output: a JSON array in the envelope, or one text line per item
/// (`empty` when there is nothing to show).
pub fn emit_rows<T: Serialize>(
    json: bool,
    data: &[T],
    empty: &str,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", envelope(data)?)?;
    } else if data.is_empty() {
        writeln!(out, "{}", empty)?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    Ok(())
}

/// Single-value output. The text renderer may return several lines.
pub fn emit<T: Serialize>(
    json: bool,
    data: T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", envelope(&data)?)?;
    } else {
        let body = text(&data);
        write!(out, "{}", body)?;
        if !body.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}
