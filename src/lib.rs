// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bills;
pub mod cli;
pub mod commands;
pub mod context;
pub mod db;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod models;
pub mod new_bill;
pub mod remote;
pub mod router;
pub mod session;
pub mod store;
pub mod utils;
pub mod views;
