// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use billed::context::AppContext;
use billed::error::RemoteError;
use billed::feedback::{ErrorSink, ModalDisplay, Notifier};
use billed::models::{Bill, BillDraft, BillStatus, ReceiptUpload, Session, UploadedReceipt};
use billed::router::{Navigator, Route};
use billed::store::{BillStore, StoreResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};

fn bill(id: &str, date: &str, name: &str, amount: i64, status: BillStatus, file: &str) -> Bill {
    Bill {
        id: id.into(),
        r#type: "Hôtel et logement".into(),
        name: name.into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: Decimal::from(amount),
        pct: 20,
        vat: "80".into(),
        commentary: Some("séminaire billed".into()),
        file_url: format!("https://test.storage.tld/v0/b/billable/{}", file),
        file_name: file.into(),
        status,
        email: "a@a".into(),
    }
}

/// Four bills, deliberately out of date order.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "2004-04-04", "encore", 400, BillStatus::Pending, "preview-facture-free-201801-pdf-1.jpg"),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", "test1", 100, BillStatus::Refused, "1592770761.jpeg"),
        bill("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", "test3", 300, BillStatus::Accepted, "facture-client-php.png"),
        bill("qcCK3SzECmaZAGRrHjaC", "2002-02-02", "test2", 200, BillStatus::Refused, "preview-facture-free-201801-pdf-1.jpg"),
    ]
}

#[derive(Default)]
pub struct MockStore {
    pub bills: Vec<Bill>,
    pub list_error: Option<RemoteError>,
    pub create_error: Option<RemoteError>,
    /// Consumed by the next `update`, so later calls succeed.
    pub update_error: RefCell<Option<RemoteError>>,
    pub list_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub update_calls: RefCell<Vec<(String, BillDraft)>>,
}

impl MockStore {
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            ..Default::default()
        }
    }
}

impl BillStore for MockStore {
    fn list(&self) -> StoreResult<Vec<Bill>> {
        self.list_calls.set(self.list_calls.get() + 1);
        match &self.list_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.bills.clone()),
        }
    }

    fn create(&self, upload: ReceiptUpload<'_>) -> StoreResult<UploadedReceipt> {
        self.create_calls.set(self.create_calls.get() + 1);
        if let Some(e) = &self.create_error {
            return Err(e.clone());
        }
        Ok(UploadedReceipt {
            file_url: "https://localhost:3456/images/test.jpg".into(),
            file_name: upload.file.name.clone(),
            key: "1234".into(),
        })
    }

    fn update(&self, key: &str, draft: &BillDraft) -> StoreResult<Bill> {
        self.update_calls
            .borrow_mut()
            .push((key.to_string(), draft.clone()));
        match self.update_error.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(draft.clone().into_bill(key)),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingModal {
    pub shown: RefCell<Vec<String>>,
}

impl ModalDisplay for RecordingModal {
    fn show(&self, file_url: &str) {
        self.shown.borrow_mut().push(file_url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub errors: RefCell<Vec<String>>,
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &RemoteError) {
        self.errors.borrow_mut().push(error.message.clone());
    }
}

/// Collaborators for one test, plus an employee session.
pub struct Harness {
    pub store: MockStore,
    pub navigator: RecordingNavigator,
    pub modal: RecordingModal,
    pub notifier: RecordingNotifier,
    pub sink: RecordingSink,
    pub session: Session,
}

impl Harness {
    pub fn new(store: MockStore) -> Self {
        Self {
            store,
            navigator: RecordingNavigator::default(),
            modal: RecordingModal::default(),
            notifier: RecordingNotifier::default(),
            sink: RecordingSink::default(),
            session: Session::employee("employee@test.tld"),
        }
    }

    pub fn ctx(&self) -> AppContext<'_> {
        AppContext {
            store: &self.store,
            navigator: &self.navigator,
            modal: &self.modal,
            notifier: &self.notifier,
            errors: &self.sink,
            session: Some(&self.session),
        }
    }
}
