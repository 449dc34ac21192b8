// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::error::{RemoteError, ValidationError, WRONG_FORMAT_MESSAGE};
use crate::models::{
    Bill, BillDraft, BillStatus, ReceiptFile, ReceiptUpload, UploadedReceipt, EXPENSE_TYPES,
};
use crate::router::Route;
use crate::utils::is_accepted_receipt;
use crate::views::{self, FormValues};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// VAT rate used when the pct field is blank or not a number.
pub const DEFAULT_PCT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    FileValidating,
    FileAccepted,
    FileRejected,
    Submitting,
    Submitted,
    SubmitFailed,
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillFields {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Accepted(UploadedReceipt),
    Rejected,
    UploadFailed(RemoteError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Bill),
    Failed(RemoteError),
}

pub struct NewBillForm<'a> {
    ctx: AppContext<'a>,
    state: FormState,
    receipt: Option<UploadedReceipt>,
}

impl<'a> NewBillForm<'a> {
    pub fn new(ctx: AppContext<'a>) -> Self {
        Self {
            ctx,
            state: FormState::Empty,
            receipt: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn receipt(&self) -> Option<&UploadedReceipt> {
        self.receipt.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_name.as_str())
    }

    pub fn file_url(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.file_url.as_str())
    }

    pub fn render(&self, fields: &NewBillFields) -> String {
        views::new_bill_ui(&FormValues {
            expense_type: &fields.expense_type,
            name: &fields.name,
            date: &fields.date,
            amount: &fields.amount,
            vat: &fields.vat,
            pct: &fields.pct,
            commentary: &fields.commentary,
            file: self.file_name().unwrap_or(""),
        })
    }

    /// Checks the receipt extension and uploads it. A wrong format clears the
    /// file field and alerts the user; the page stays where it is.
    pub fn handle_change_file(
        &mut self,
        file: &ReceiptFile,
    ) -> Result<FileOutcome, ValidationError> {
        self.state = FormState::FileValidating;
        self.receipt = None;

        if !is_accepted_receipt(&file.name) {
            tracing::warn!(file = %file.name, mime = %file.mime, "rejected receipt format");
            self.ctx.notifier.alert(WRONG_FORMAT_MESSAGE);
            self.state = FormState::FileRejected;
            return Ok(FileOutcome::Rejected);
        }

        let Some(session) = self.ctx.session else {
            self.state = FormState::Empty;
            return Err(ValidationError::NoSession);
        };

        let upload = ReceiptUpload {
            file,
            email: &session.email,
        };
        match self.ctx.store.create(upload) {
            Ok(receipt) => {
                tracing::debug!(key = %receipt.key, file = %receipt.file_name, "receipt uploaded");
                self.receipt = Some(receipt.clone());
                self.state = FormState::FileAccepted;
                Ok(FileOutcome::Accepted(receipt))
            }
            Err(e) => {
                self.ctx.errors.report(&e);
                self.state = FormState::Empty;
                Ok(FileOutcome::UploadFailed(e))
            }
        }
    }

    /// Builds the bill that would be sent for the current fields and receipt.
    pub fn build_draft(&self, fields: &NewBillFields) -> Result<BillDraft, ValidationError> {
        let receipt = self.receipt.as_ref().ok_or(ValidationError::MissingReceipt)?;
        let session = self.ctx.session.ok_or(ValidationError::NoSession)?;

        let date_raw = fields.date.trim();
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_raw.to_string()))?;
        let amount_raw = fields.amount.trim();
        let amount = amount_raw
            .parse::<Decimal>()
            .map_err(|_| ValidationError::InvalidAmount(amount_raw.to_string()))?;
        let pct = fields.pct.trim().parse::<i64>().unwrap_or(DEFAULT_PCT);
        let expense_type = match fields.expense_type.trim() {
            "" => EXPENSE_TYPES[0].to_string(),
            t => t.to_string(),
        };
        let commentary = Some(fields.commentary.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(BillDraft {
            email: session.email.clone(),
            r#type: expense_type,
            name: fields.name.trim().to_string(),
            date,
            amount,
            pct,
            vat: fields.vat.trim().to_string(),
            commentary,
            file_url: receipt.file_url.clone(),
            file_name: receipt.file_name.clone(),
            status: BillStatus::Pending,
        })
    }

    /// Sends the bill under the uploaded receipt's key. On success the view
    /// moves to the bills list; on rejection the error goes to the sink and
    /// the form stays open for another attempt.
    pub fn handle_submit(
        &mut self,
        fields: &NewBillFields,
    ) -> Result<SubmitOutcome, ValidationError> {
        let draft = self.build_draft(fields)?;
        let key = self
            .receipt
            .as_ref()
            .map(|r| r.key.clone())
            .ok_or(ValidationError::MissingReceipt)?;

        self.state = FormState::Submitting;
        match self.ctx.store.update(&key, &draft) {
            Ok(bill) => {
                tracing::info!(id = %bill.id, "bill submitted");
                self.state = FormState::Submitted;
                self.ctx.navigator.navigate(Route::Bills);
                Ok(SubmitOutcome::Submitted(bill))
            }
            Err(e) => {
                self.ctx.errors.report(&e);
                self.state = FormState::SubmitFailed;
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }
}
