//! User directory controller: fetched collection, live search, selection and detail view.

use crate::api::ApiError;
use crate::app::worker::{Request, Ticket};
use crate::model::User;
use crate::search::filter_users;

#[derive(Clone, Debug)]
pub struct Directory {
    /// Full collection from the last successful fetch, in backend order.
    pub users: Vec<User>,
    /// Message of the last failed fetch; replaces the table while set.
    pub error: Option<String>,
    pub search: String,
    /// Whether keystrokes currently go to the search box.
    pub searching: bool,
    /// Index into the filtered view.
    pub selected: usize,
    pub rows_per_page: usize,
    /// Record shown in the detail modal.
    pub detail: Option<User>,
    pending: Option<Ticket>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// An empty directory; mounting it means calling [`Directory::load`] straight away.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            error: None,
            search: String::new(),
            searching: false,
            selected: 0,
            rows_per_page: 10,
            detail: None,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a fetch. Ignored while one is already in flight.
    pub fn load(&mut self, ticket: Ticket) -> Option<Request> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(ticket);
        Some(Request::ListUsers)
    }

    /// Apply the list result for `ticket`. Returns `false` for a response this
    /// directory isn't waiting for.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<User>, ApiError>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(err) => {
                self.users.clear();
                self.error = Some(err.message);
            }
        }
        self.clamp_selection();
        true
    }

    /// Users matching the current search term, recomputed on every call.
    pub fn visible(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.visible().get(self.selected).copied()
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.clamp_selection();
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.clamp_selection();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.rows_per_page.max(1));
    }

    pub fn page_down(&mut self) {
        let last = self.visible().len().saturating_sub(1);
        self.selected = self.selected.saturating_add(self.rows_per_page.max(1)).min(last);
    }

    /// Show the highlighted user in the detail modal. Returns whether one was opened.
    pub fn open_detail(&mut self) -> bool {
        self.detail = self.selected_user().cloned();
        self.detail.is_some()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
