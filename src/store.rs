// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::RemoteError;
use crate::models::{Bill, BillDraft, BillStatus, ReceiptUpload, UploadedReceipt};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = std::result::Result<T, RemoteError>;

/// Bills endpoint of a store. `create` uploads a receipt and reserves a key,
/// `update` finalizes the bill under that key.
pub trait BillStore {
    fn list(&self) -> StoreResult<Vec<Bill>>;
    fn create(&self, upload: ReceiptUpload<'_>) -> StoreResult<UploadedReceipt>;
    fn update(&self, key: &str, draft: &BillDraft) -> StoreResult<Bill>;
}

/// Local store backed by the `receipts` and `bills` tables. Receipt files are
/// copied under `receipts_dir`.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
    receipts_dir: PathBuf,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection, receipts_dir: impl Into<PathBuf>) -> Self {
        Self {
            conn,
            receipts_dir: receipts_dir.into(),
        }
    }
}

impl BillStore for SqliteStore<'_> {
    fn list(&self) -> StoreResult<Vec<Bill>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, type, name, date, amount, pct, vat, commentary, file_url, file_name, status, email
             FROM bills ORDER BY id",
        )?;
        let mut cur = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let date_raw: String = r.get(3)?;
            let amount_raw: String = r.get(4)?;
            let status_raw: String = r.get(10)?;
            let date = chrono::NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|_| {
                RemoteError::new(format!("Corrupted bill {}: invalid date '{}'", id, date_raw))
            })?;
            let amount = amount_raw.parse::<Decimal>().map_err(|_| {
                RemoteError::new(format!("Corrupted bill {}: invalid amount '{}'", id, amount_raw))
            })?;
            let status = status_raw
                .parse::<BillStatus>()
                .map_err(|e| RemoteError::new(format!("Corrupted bill {}: {}", id, e)))?;
            out.push(Bill {
                id: id.to_string(),
                r#type: r.get(1)?,
                name: r.get(2)?,
                date,
                amount,
                pct: r.get(5)?,
                vat: r.get(6)?,
                commentary: r.get(7)?,
                file_url: r.get(8)?,
                file_name: r.get(9)?,
                status,
                email: r.get(11)?,
            });
        }
        Ok(out)
    }

    /// The receipts row is only committed once the file is on disk.
    fn create(&self, upload: ReceiptUpload<'_>) -> StoreResult<UploadedReceipt> {
        let file_name = Path::new(upload.file.name.trim())
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| RemoteError::new(format!("Invalid receipt name '{}'", upload.file.name)))?;
        fs::create_dir_all(&self.receipts_dir)?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO receipts(file_name, file_url, email) VALUES (?1, '', ?2)",
            params![file_name, upload.email],
        )?;
        let key = tx.last_insert_rowid();
        let path = self.receipts_dir.join(format!("{}-{}", key, file_name));
        fs::write(&path, &upload.file.bytes)?;
        let file_url = path.to_string_lossy().to_string();
        let finished = tx
            .execute(
                "UPDATE receipts SET file_url=?1 WHERE id=?2",
                params![file_url, key],
            )
            .and_then(|_| tx.commit());
        if let Err(e) = finished {
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }
        tracing::debug!(key, file = %file_name, "stored receipt");
        Ok(UploadedReceipt {
            file_url,
            file_name,
            key: key.to_string(),
        })
    }

    fn update(&self, key: &str, draft: &BillDraft) -> StoreResult<Bill> {
        let id: i64 = key.parse().map_err(|_| RemoteError::from_status(404))?;
        let known: Option<i64> = self
            .conn
            .query_row("SELECT id FROM receipts WHERE id=?1", params![id], |r| r.get(0))
            .optional()?;
        if known.is_none() {
            return Err(RemoteError::from_status(404));
        }
        self.conn.execute(
            "INSERT INTO bills(id, type, name, date, amount, pct, vat, commentary, file_url, file_name, status, email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT(id) DO UPDATE SET
                type=excluded.type, name=excluded.name, date=excluded.date, amount=excluded.amount,
                pct=excluded.pct, vat=excluded.vat, commentary=excluded.commentary,
                file_url=excluded.file_url, file_name=excluded.file_name,
                status=excluded.status, email=excluded.email",
            params![
                id,
                draft.r#type,
                draft.name,
                draft.date.to_string(),
                draft.amount.to_string(),
                draft.pct,
                draft.vat,
                draft.commentary,
                draft.file_url,
                draft.file_name,
                draft.status.as_str(),
                draft.email
            ],
        )?;
        Ok(draft.clone().into_bill(id.to_string()))
    }
}
