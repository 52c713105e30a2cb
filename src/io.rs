use crate::model::{Shift, ShiftBoard};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de shifts: header `area,start,end[,booked]` (RFC3339 UTC)
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let area = rec.get(0).context("missing area")?.trim();
        if area.is_empty() {
            bail!("invalid shift row (empty area)");
        }
        let start = rec.get(1).context("missing start")?.trim();
        let end = rec.get(2).context("missing end")?.trim();
        let start: DateTime<Utc> = start.parse().context("start RFC3339")?;
        let end: DateTime<Utc> = end.parse().context("end RFC3339")?;
        let mut s = Shift::new(area, start, end)
            .with_context(|| format!("invalid shift row for area {area}"))?;
        if let Some(flag) = rec.get(3) {
            let flag = flag.trim();
            if !flag.is_empty() {
                s.booked = parse_bool(flag)
                    .with_context(|| format!("invalid booked value for area {area}"))?;
            }
        }
        out.push(s);
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export JSON du board (jolie mise en forme)
pub fn export_board_json<P: AsRef<Path>>(path: P, board: &ShiftBoard) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(board)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des shifts: header `id,area,start,end,booked`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, board: &ShiftBoard) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "area", "start", "end", "booked"])?;
    for s in &board.shifts {
        let start = s.start.to_rfc3339();
        let end = s.end.to_rfc3339();
        w.write_record([
            s.id.as_str(),
            s.area.as_str(),
            start.as_str(),
            end.as_str(),
            if s.booked { "true" } else { "false" },
        ])?;
    }
    w.flush()?;
    Ok(())
}
