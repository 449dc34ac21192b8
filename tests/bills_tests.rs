// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use billed::bills::{sort_by_date_descending, BillListView, BillsPage};
use billed::error::{RemoteError, ViewError};
use billed::models::BillStatus;
use billed::router::{routes, Icon, Route};
use billed::views::{self, format_date, format_status};
use chrono::NaiveDate;
use common::{fixture_bills, Harness, MockStore};

#[test]
fn bills_route_highlights_window_icon() {
    assert_eq!(Route::Bills.highlighted_icon(), Some(Icon::Window));
    let page = routes(Route::Bills);
    assert!(page.contains("[icon-window]"));
    assert!(!page.contains("[icon-mail]"));
}

#[test]
fn bills_are_ordered_latest_first() {
    let sorted = sort_by_date_descending(&fixture_bills());
    let dates: Vec<String> = sorted.iter().map(|b| b.date.to_string()).collect();
    assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
    for pair in sorted.windows(2) {
        assert!(pair[0].date.to_string() >= pair[1].date.to_string());
    }
}

#[test]
fn sort_keeps_relative_order_of_same_day_bills() {
    let mut bills = fixture_bills();
    for b in bills.iter_mut() {
        b.date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
    }
    let ids: Vec<_> = bills.iter().map(|b| b.id.clone()).collect();
    let sorted_ids: Vec<_> = sort_by_date_descending(&bills)
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, sorted_ids);
}

#[test]
fn render_lists_rows_latest_first_without_touching_input() {
    let bills = fixture_bills();
    let before = bills.clone();
    let html = BillListView::render(&bills);
    assert_eq!(bills, before);

    assert!(html.contains(views::BILLS_TITLE));
    assert!(html.contains(views::NEW_BILL_BUTTON));
    let pos = |needle: &str| html.find(needle).unwrap();
    assert!(pos("4 Avr. 04") < pos("3 Mar. 03"));
    assert!(pos("3 Mar. 03") < pos("2 Fév. 02"));
    assert!(pos("2 Fév. 02") < pos("1 Jan. 01"));
}

#[test]
fn render_shows_display_status() {
    let html = BillListView::render(&fixture_bills());
    assert!(html.contains("En attente"));
    assert!(html.contains("Accepté"));
    assert!(html.contains("Refused"));
}

#[test]
fn format_date_uses_short_french_month() {
    let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    assert_eq!(format_date(d("2004-04-04")), "4 Avr. 04");
    assert_eq!(format_date(d("2021-12-25")), "25 Déc. 21");
    assert_eq!(format_date(d("1999-08-01")), "1 Aoû. 99");
    assert_eq!(format_status(BillStatus::Pending), "En attente");
}

#[test]
fn click_new_bill_navigates_to_form() {
    let h = Harness::new(MockStore::with_bills(fixture_bills()));
    let view = BillListView::with_bills(h.ctx(), &fixture_bills());
    view.handle_click_new_bill();
    assert_eq!(*h.navigator.routes.borrow(), vec![Route::NewBill]);
    assert!(routes(Route::NewBill).contains("Envoyer une note de frais"));
}

#[test]
fn click_first_eye_opens_modal_with_latest_receipt() {
    let h = Harness::new(MockStore::with_bills(fixture_bills()));
    let mut view = BillListView::new(h.ctx());
    view.load();
    view.handle_click_icon_eye(0).unwrap();
    let shown = h.modal.shown.borrow();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].ends_with("preview-facture-free-201801-pdf-1.jpg"));
    assert!(h.navigator.routes.borrow().is_empty());
}

#[test]
fn eye_click_out_of_range_is_an_error() {
    let h = Harness::new(MockStore::with_bills(fixture_bills()));
    let view = BillListView::with_bills(h.ctx(), &fixture_bills());
    assert_eq!(view.handle_click_icon_eye(4), Err(ViewError::NoSuchBill(4)));
    assert!(h.modal.shown.borrow().is_empty());
}

#[test]
fn load_fetches_and_sorts_bills() {
    let h = Harness::new(MockStore::with_bills(fixture_bills()));
    let mut view = BillListView::new(h.ctx());
    assert_eq!(view.page(), &BillsPage::Loading);
    match view.load() {
        BillsPage::Loaded(bills) => {
            assert_eq!(bills.len(), 4);
            assert_eq!(bills[0].name, "encore");
            assert_eq!(bills[3].name, "test1");
        }
        other => panic!("unexpected page {:?}", other),
    }
    assert_eq!(h.store.list_calls.get(), 1);
}

#[test]
fn list_rejected_with_404_renders_message() {
    let store = MockStore {
        list_error: Some(RemoteError::from_status(404)),
        ..Default::default()
    };
    let h = Harness::new(store);
    let mut view = BillListView::new(h.ctx());
    view.load();
    assert!(view.render_page().contains("Erreur 404"));
}

#[test]
fn list_rejected_with_500_renders_message() {
    let store = MockStore {
        list_error: Some(RemoteError::new("Erreur 500")),
        ..Default::default()
    };
    let h = Harness::new(store);
    let mut view = BillListView::new(h.ctx());
    assert_eq!(view.load(), &BillsPage::Failed("Erreur 500".into()));
    assert!(view.render_page().contains("Erreur 500"));
    assert_eq!(h.store.list_calls.get(), 1);
}
