// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Side channels the components report through: receipt preview, inline
//! alerts and the error sink.

use crate::error::RemoteError;

pub trait ModalDisplay {
    fn show(&self, file_url: &str);
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

pub trait ErrorSink {
    fn report(&self, error: &RemoteError);
}

#[derive(Debug, Default)]
pub struct ConsoleModal;

impl ModalDisplay for ConsoleModal {
    fn show(&self, file_url: &str) {
        println!("Justificatif\n{}", file_url);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Sends every reported error to `tracing` at error level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &RemoteError) {
        tracing::error!(status = ?error.status, "{}", error.message);
    }
}
