// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::views;
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// Icon of the vertical layout marked as active on this page.
    pub fn highlighted_icon(&self) -> Option<Icon> {
        match self {
            Route::Login => None,
            Route::Bills => Some(Icon::Window),
            Route::NewBill => Some(Icon::Mail),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Route::Login, Route::Bills, Route::NewBill]
            .into_iter()
            .find(|r| r.path() == s)
            .ok_or_else(|| format!("Unknown route '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Window,
    Mail,
}

impl Icon {
    pub fn test_id(&self) -> &'static str {
        match self {
            Icon::Window => "icon-window",
            Icon::Mail => "icon-mail",
        }
    }
}

/// Switches the displayed view.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Page shown right after navigating to `route`, before any data arrives.
pub fn routes(route: Route) -> String {
    match route {
        Route::Login => views::login_ui(),
        Route::Bills => views::loading_page(),
        Route::NewBill => views::new_bill_ui(&views::FormValues::default()),
    }
}

/// Navigator that prints the target page to stdout and remembers it.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    current: Cell<Option<Route>>,
}

impl ConsoleNavigator {
    pub fn current(&self) -> Option<Route> {
        self.current.get()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.current.set(Some(route));
        println!("{}", routes(route));
    }
}
