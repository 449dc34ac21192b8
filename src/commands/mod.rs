// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bills;
pub mod config;
pub mod doctor;
pub mod exporter;
pub mod session;

use crate::remote::HttpStore;
use crate::session::{API_URL_KEY, JWT_KEY};
use crate::store::{BillStore, SqliteStore};
use crate::utils::{get_setting, http_client};
use anyhow::Result;
use rusqlite::Connection;

/// Store selected by the `api_url` setting: the REST backend when set, the
/// local database otherwise.
pub fn open_store(conn: &Connection) -> Result<Box<dyn BillStore + '_>> {
    match get_setting(conn, API_URL_KEY)? {
        Some(url) => {
            let token = get_setting(conn, JWT_KEY)?;
            tracing::debug!(%url, "using remote store");
            Ok(Box::new(HttpStore::new(http_client()?, &url, token)))
        }
        None => Ok(Box::new(SqliteStore::new(conn, crate::db::receipts_dir()?))),
    }
}
