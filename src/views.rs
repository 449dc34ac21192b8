// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Text renderers for the pages. Every function here is pure.

use crate::models::{Bill, BillStatus, EXPENSE_TYPES};
use crate::router::{Icon, Route};
use crate::utils::pretty_table;
use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;

pub const BILLS_TITLE: &str = "Mes notes de frais";
pub const NEW_BILL_BUTTON: &str = "Nouvelle note de frais";
pub const NEW_BILL_TITLE: &str = "Envoyer une note de frais";

const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// `2004-04-04` -> `4 Avr. 04`
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100))
}

pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

/// Latest date first. `YYYY-MM-DD` strings sort the same way as the dates
/// they encode, so comparing parsed dates matches the textual order.
/// Stable: bills sharing a date keep their relative order.
pub fn sort_by_date_descending(bills: &[Bill]) -> Vec<Bill> {
    let mut sorted = bills.to_vec();
    sorted.sort_by_key(|b| Reverse(b.date));
    sorted
}

pub fn vertical_layout(active: Route) -> String {
    let highlighted = active.highlighted_icon();
    [Icon::Window, Icon::Mail]
        .iter()
        .map(|icon| {
            if Some(*icon) == highlighted {
                format!("[{}]", icon.test_id())
            } else {
                format!(" {} ", icon.test_id())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bills page, latest first. Eye actions are numbered from 1 in that order.
pub fn bills_ui(bills: &[Bill]) -> String {
    let rows: Vec<Vec<String>> = sort_by_date_descending(bills)
        .iter()
        .enumerate()
        .map(|(i, b)| {
            vec![
                b.r#type.clone(),
                b.name.clone(),
                format_date(b.date),
                format!("{} €", b.amount),
                format_status(b.status).to_string(),
                format!("icon-eye #{}", i + 1),
            ]
        })
        .collect();
    format!(
        "{}\n{}\n[{}]\n{}",
        vertical_layout(Route::Bills),
        BILLS_TITLE,
        NEW_BILL_BUTTON,
        pretty_table(&["Type", "Nom", "Date", "Montant", "Statut", "Actions"], rows)
    )
}

pub fn loading_page() -> String {
    format!("{}\nLoading...", vertical_layout(Route::Bills))
}

pub fn error_page(message: &str) -> String {
    format!("{}\nErreur\n{}", vertical_layout(Route::Bills), message)
}

/// Field values shown by the new bill form; empty strings for blank fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues<'a> {
    pub expense_type: &'a str,
    pub name: &'a str,
    pub date: &'a str,
    pub amount: &'a str,
    pub vat: &'a str,
    pub pct: &'a str,
    pub commentary: &'a str,
    pub file: &'a str,
}

pub fn new_bill_ui(values: &FormValues<'_>) -> String {
    let expense_type = if values.expense_type.is_empty() {
        EXPENSE_TYPES[0]
    } else {
        values.expense_type
    };
    let rows = vec![
        vec!["expense-type".into(), expense_type.to_string()],
        vec!["expense-name".into(), values.name.to_string()],
        vec!["datepicker".into(), values.date.to_string()],
        vec!["amount".into(), values.amount.to_string()],
        vec!["vat".into(), values.vat.to_string()],
        vec!["pct".into(), values.pct.to_string()],
        vec!["commentary".into(), values.commentary.to_string()],
        vec!["file".into(), values.file.to_string()],
    ];
    format!(
        "{}\n{}\n{}",
        vertical_layout(Route::NewBill),
        NEW_BILL_TITLE,
        pretty_table(&["Champ", "Valeur"], rows)
    )
}

pub fn login_ui() -> String {
    "Employé / Administrateur\nbilled login --email <email> [--type employee|admin]".to_string()
}
