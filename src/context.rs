// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::feedback::{ErrorSink, ModalDisplay, Notifier};
use crate::models::Session;
use crate::router::Navigator;
use crate::store::BillStore;

/// Everything a page needs from the outside world.
#[derive(Clone, Copy)]
pub struct AppContext<'a> {
    pub store: &'a dyn BillStore,
    pub navigator: &'a dyn Navigator,
    pub modal: &'a dyn ModalDisplay,
    pub notifier: &'a dyn Notifier,
    pub errors: &'a dyn ErrorSink,
    pub session: Option<&'a Session>,
}
