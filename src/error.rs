// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub const WRONG_FORMAT_MESSAGE: &str = "Veuillez saisir le bon format d'image(JPG, PNG ou JPEG)";

/// Rejection coming back from a store. The message is shown or logged verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// `Erreur 404`, `Erreur 500`, ...
    pub fn from_status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("Erreur {}", status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl From<rusqlite::Error> for RemoteError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => RemoteError::from_status(404),
            other => RemoteError {
                status: Some(500),
                message: format!("Erreur 500 ({})", other),
            },
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(code) => RemoteError::from_status(code.as_u16()),
            None => RemoteError::new(e.to_string()),
        }
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(e: std::io::Error) -> Self {
        RemoteError {
            status: Some(500),
            message: format!("Erreur 500 ({})", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A receipt (JPG, PNG or JPEG) must be attached before sending the bill")]
    MissingReceipt,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("No connected user")]
    NoSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("No bill at position {0}")]
    NoSuchBill(usize),
}

#[derive(Debug, Error)]
pub enum BilledError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BilledError>;
