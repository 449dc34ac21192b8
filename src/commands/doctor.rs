// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = find_issues(conn)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// One `[issue, detail]` pair per problem in the local store.
pub fn find_issues(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Dates the bills page cannot order
    let mut stmt = conn.prepare("SELECT id, date FROM bills ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let d: String = r.get(1)?;
        if chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_err() {
            rows.push(vec!["invalid_date".into(), format!("bill {} '{}'", id, d)]);
        }
    }

    // 2) Receipt files that went missing from disk
    let mut stmt2 = conn.prepare("SELECT id, file_url FROM bills ORDER BY id")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let url: String = r.get(1)?;
        if !Path::new(&url).exists() {
            rows.push(vec!["missing_receipt".into(), format!("bill {} {}", id, url)]);
        }
    }

    // 3) Uploads never finalized into a bill
    let mut stmt3 = conn.prepare(
        "SELECT r.id, r.file_name FROM receipts r LEFT JOIN bills b ON b.id=r.id WHERE b.id IS NULL ORDER BY r.id",
    )?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        rows.push(vec!["unsent_receipt".into(), format!("receipt {} {}", id, name)]);
    }

    Ok(rows)
}
