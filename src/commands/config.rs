// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::API_URL_KEY;
use crate::utils::{clear_setting, get_setting, pretty_table, set_setting};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-api", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("API URL must start with http:// or https://, got '{}'", url);
            }
            set_setting(conn, API_URL_KEY, url)?;
            println!("Bills will be read from and sent to {}", url);
        }
        Some(("clear-api", _)) => {
            clear_setting(conn, API_URL_KEY)?;
            println!("Using the local store");
        }
        Some(("show", _)) => {
            let api = get_setting(conn, API_URL_KEY)?.unwrap_or_else(|| "(local)".into());
            let db = crate::db::db_path()?.display().to_string();
            let receipts = crate::db::receipts_dir()?.display().to_string();
            println!(
                "{}",
                pretty_table(
                    &["Setting", "Value"],
                    vec![
                        vec!["api_url".into(), api],
                        vec!["database".into(), db],
                        vec!["receipts".into(), receipts],
                    ],
                )
            );
        }
        _ => {}
    }
    Ok(())
}
