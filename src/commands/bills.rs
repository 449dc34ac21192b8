// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bills::{BillListView, BillsPage};
use crate::context::AppContext;
use crate::feedback::{ConsoleModal, ConsoleNotifier, TracingSink};
use crate::models::{ReceiptFile, Session, UserType};
use crate::new_bill::{FileOutcome, NewBillFields, NewBillForm, SubmitOutcome};
use crate::router::{ConsoleNavigator, Route};
use crate::utils::{maybe_print_json, mime_for};
use anyhow::{anyhow, bail, Context, Result};
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let store = super::open_store(conn)?;
    let session = crate::session::load(conn)?;
    let navigator = ConsoleNavigator::default();
    let ctx = AppContext {
        store: store.as_ref(),
        navigator: &navigator,
        modal: &ConsoleModal,
        notifier: &ConsoleNotifier,
        errors: &TracingSink,
        session: session.as_ref(),
    };

    match m.subcommand() {
        Some(("list", sub)) => {
            require_employee(session.as_ref())?;
            list(ctx, sub)?
        }
        Some(("show", sub)) => {
            require_employee(session.as_ref())?;
            let n = *sub.get_one::<usize>("index").unwrap();
            show(ctx, n)?
        }
        Some(("new", _)) => {
            require_employee(session.as_ref())?;
            BillListView::new(ctx).handle_click_new_bill();
        }
        Some(("add", sub)) => {
            require_employee(session.as_ref())?;
            add(ctx, &navigator, sub)?
        }
        _ => {}
    }
    Ok(())
}

fn require_employee(session: Option<&Session>) -> Result<&Session> {
    match session {
        Some(s) if s.user_type == UserType::Employee => Ok(s),
        Some(s) => bail!("'{}' is not an employee account", s.email),
        None => bail!("Not connected; run `billed login --email <email>` first"),
    }
}

fn list(ctx: AppContext<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let mut view = BillListView::new(ctx);
    if let BillsPage::Loaded(bills) = view.load() {
        if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), bills)? {
            return Ok(());
        }
    }
    println!("{}", view.render_page());
    Ok(())
}

fn show(ctx: AppContext<'_>, n: usize) -> Result<()> {
    let mut view = BillListView::new(ctx);
    let failed = matches!(view.load(), BillsPage::Failed(_));
    if failed {
        println!("{}", view.render_page());
        return Ok(());
    }
    let index = n.checked_sub(1).context("Bills are numbered from 1")?;
    view.handle_click_icon_eye(index)?;
    Ok(())
}

pub fn read_receipt(path: &str) -> Result<ReceiptFile> {
    let path = Path::new(path.trim());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let bytes = std::fs::read(path).with_context(|| format!("Read receipt {}", path.display()))?;
    let mime = mime_for(&name);
    Ok(ReceiptFile::new(name, mime, bytes))
}

fn add(ctx: AppContext<'_>, navigator: &ConsoleNavigator, sub: &clap::ArgMatches) -> Result<()> {
    let fields = NewBillFields {
        expense_type: sub.get_one::<String>("type").cloned().unwrap_or_default(),
        name: sub.get_one::<String>("name").unwrap().clone(),
        date: sub.get_one::<String>("date").unwrap().clone(),
        amount: sub.get_one::<String>("amount").unwrap().clone(),
        vat: sub.get_one::<String>("vat").unwrap().clone(),
        pct: sub.get_one::<String>("pct").unwrap().clone(),
        commentary: sub.get_one::<String>("commentary").unwrap().clone(),
    };
    let file = read_receipt(sub.get_one::<String>("file").unwrap())?;

    let mut form = NewBillForm::new(ctx);
    match form.handle_change_file(&file)? {
        FileOutcome::Accepted(_) => {}
        FileOutcome::Rejected => bail!("Receipt '{}' was not attached", file.name),
        FileOutcome::UploadFailed(e) => {
            return Err(anyhow!(e)).context(format!("Upload of '{}' failed", file.name));
        }
    }

    match form.handle_submit(&fields)? {
        SubmitOutcome::Submitted(bill) => {
            println!("Sent bill {} ({} on {})", bill.id, bill.amount, bill.date);
            if navigator.current() == Some(Route::Bills) {
                let mut view = BillListView::new(ctx);
                view.load();
                println!("{}", view.render_page());
            }
            Ok(())
        }
        SubmitOutcome::Failed(e) => Err(anyhow!(e)).context("Bill not sent"),
    }
}
