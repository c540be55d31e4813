//! Application state types and entry glue.
//!
//! Defines the screens and shared state of the TUI, as well as helpers to
//! construct it and to run the application loop (re-exported as `run`).
//!
pub mod directory;
pub mod keymap;
pub mod register;
pub mod theme;
pub mod update;
pub mod worker;

use std::time::{Duration, Instant};

pub use directory::Directory;
pub use register::RegisterForm;
pub use theme::Theme;

use keymap::Keymap;
use worker::{Executor, Request, Ticket};

/// How long a notification stays in the status line.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Entries of the Home menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HomeChoice {
    NewUser,
    ViewUsers,
}

impl HomeChoice {
    pub const ALL: [HomeChoice; 2] = [HomeChoice::NewUser, HomeChoice::ViewUsers];

    pub fn label(self) -> &'static str {
        match self {
            HomeChoice::NewUser => "New User",
            HomeChoice::ViewUsers => "View Users",
        }
    }
}

/// The screen currently shown, with its controller state.
#[derive(Clone, Debug)]
pub enum Screen {
    Home { selected: HomeChoice },
    Register(RegisterForm),
    Directory(Directory),
}

/// Navigation targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Register,
    Directory,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }
}

pub struct AppState {
    pub screen: Screen,
    pub theme: Theme,
    pub keymap: Keymap,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    next_ticket: Ticket,
    executor: Box<dyn Executor>,
}

impl AppState {
    /// Start on the Home screen. API calls are handed to `executor`.
    pub fn new(executor: Box<dyn Executor>, theme: Theme, keymap: Keymap) -> Self {
        Self {
            screen: Screen::Home {
                selected: HomeChoice::NewUser,
            },
            theme,
            keymap,
            toast: None,
            should_quit: false,
            next_ticket: 1,
            executor,
        }
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Home { .. } => Route::Home,
            Screen::Register(_) => Route::Register,
            Screen::Directory(_) => Route::Directory,
        }
    }

    pub fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    fn take_ticket(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    fn dispatch(&mut self, ticket: Ticket, request: Request) {
        self.executor.dispatch(ticket, request);
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
