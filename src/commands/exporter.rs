// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bills::sort_by_date_descending;
use crate::store::BillStore;
use anyhow::{anyhow, bail, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("bills", sub)) => {
            let store = super::open_store(conn)?;
            export_bills(store.as_ref(), sub)
        }
        _ => Ok(()),
    }
}

pub fn export_bills(store: &dyn BillStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();

    let bills = sort_by_date_descending(&store.list().map_err(|e| anyhow!(e))?);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "type", "name", "amount", "vat", "pct", "status", "file_name",
                "file_url", "commentary",
            ])?;
            for b in &bills {
                wtr.write_record([
                    b.id.clone(),
                    b.date.to_string(),
                    b.r#type.clone(),
                    b.name.clone(),
                    b.amount.to_string(),
                    b.vat.clone(),
                    b.pct.to_string(),
                    b.status.to_string(),
                    b.file_name.clone(),
                    b.file_url.clone(),
                    b.commentary.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = bills
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id, "date": b.date.to_string(), "type": b.r#type, "name": b.name,
                        "amount": b.amount.to_string(), "vat": b.vat, "pct": b.pct,
                        "status": b.status.as_str(), "fileName": b.file_name,
                        "fileUrl": b.file_url, "commentary": b.commentary
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} bills to {}", bills.len(), out);
    Ok(())
}
