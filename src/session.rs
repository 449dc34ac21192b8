// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::Session;
use crate::utils::{clear_setting, get_setting, set_setting};
use rusqlite::Connection;

pub const USER_KEY: &str = "user";
pub const API_URL_KEY: &str = "api_url";
pub const JWT_KEY: &str = "jwt";

/// Connected user stored under the `user` setting, if any.
pub fn load(conn: &Connection) -> Result<Option<Session>> {
    match get_setting(conn, USER_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save(conn: &Connection, session: &Session) -> Result<()> {
    set_setting(conn, USER_KEY, &serde_json::to_string(session)?)?;
    Ok(())
}

pub fn clear(conn: &Connection) -> Result<()> {
    clear_setting(conn, USER_KEY)?;
    clear_setting(conn, JWT_KEY)?;
    Ok(())
}
