// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::error::ViewError;
use crate::models::Bill;
use crate::router::Route;
use crate::views;

pub use crate::views::sort_by_date_descending;

#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Loading,
    Loaded(Vec<Bill>),
    Failed(String),
}

impl BillsPage {
    pub fn render(&self) -> String {
        match self {
            BillsPage::Loading => views::loading_page(),
            BillsPage::Loaded(bills) => views::bills_ui(bills),
            BillsPage::Failed(message) => views::error_page(message),
        }
    }
}

/// The employee's bills page.
pub struct BillListView<'a> {
    ctx: AppContext<'a>,
    page: BillsPage,
}

impl<'a> BillListView<'a> {
    pub fn new(ctx: AppContext<'a>) -> Self {
        Self {
            ctx,
            page: BillsPage::Loading,
        }
    }

    /// Same as [`BillListView::new`] but with bills already at hand.
    pub fn with_bills(ctx: AppContext<'a>, bills: &[Bill]) -> Self {
        Self {
            ctx,
            page: BillsPage::Loaded(sort_by_date_descending(bills)),
        }
    }

    pub fn render(bills: &[Bill]) -> String {
        views::bills_ui(bills)
    }

    /// Fetches the bills from the store. A rejection replaces the page with
    /// its message; it is not retried.
    pub fn load(&mut self) -> &BillsPage {
        self.page = match self.ctx.store.list() {
            Ok(bills) => {
                tracing::debug!(count = bills.len(), "bills loaded");
                BillsPage::Loaded(sort_by_date_descending(&bills))
            }
            Err(e) => {
                tracing::warn!(status = ?e.status, "bills list rejected: {}", e);
                BillsPage::Failed(e.message)
            }
        };
        &self.page
    }

    pub fn page(&self) -> &BillsPage {
        &self.page
    }

    pub fn render_page(&self) -> String {
        self.page.render()
    }

    pub fn handle_click_new_bill(&self) {
        self.ctx.navigator.navigate(Route::NewBill);
    }

    /// Opens the receipt of the bill at `index` (0-based, in displayed order).
    pub fn handle_click_icon_eye(&self, index: usize) -> Result<(), ViewError> {
        let bill = match &self.page {
            BillsPage::Loaded(bills) => bills.get(index),
            _ => None,
        }
        .ok_or(ViewError::NoSuchBill(index))?;
        self.ctx.modal.show(&bill.file_url);
        Ok(())
    }
}
