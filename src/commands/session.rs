// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Session, UserType};
use crate::router::{routes, Route};
use crate::session::{self, JWT_KEY};
use crate::utils::set_setting;
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap().trim().to_string();
    let user_type = sub
        .get_one::<String>("type")
        .unwrap()
        .parse::<UserType>()
        .map_err(|e| anyhow!(e))?;
    let s = Session { user_type, email };
    session::save(conn, &s)?;
    if let Some(token) = sub.get_one::<String>("token") {
        set_setting(conn, JWT_KEY, token)?;
    }
    println!("Connected as {} ({:?})", s.email, s.user_type);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    session::clear(conn)?;
    println!("{}", routes(Route::Login));
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    match session::load(conn)? {
        Some(s) => println!("{} ({:?})", s.email, s.user_type),
        None => println!("Not connected"),
    }
    Ok(())
}
