//! Registration form controller.
//!
//! Holds the [`Draft`] being edited, which control has focus, the last
//! validation result and whether a create request is in flight.

use chrono::NaiveDate;

use crate::api::ApiError;
use crate::app::worker::{Request, Ticket};
use crate::model::{Draft, FULL_NAME_MAX, LOCATIONS, PROGRAMMING_SKILLS, RESUME_SUMMARY_MAX, User};
use crate::validation::{Field, ValidationErrors, validate};

/// `YYYYMMDD`; the dashes are inserted by the mask.
const DATE_DIGITS: usize = 8;

/// Focusable controls, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    FullName,
    DateOfBirth,
    PreferredLocation,
    ProgrammingSkills,
    ResumeSummary,
    Cancel,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::FullName,
        Focus::DateOfBirth,
        Focus::PreferredLocation,
        Focus::ProgrammingSkills,
        Focus::ResumeSummary,
        Focus::Cancel,
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::FullName => Some(Field::FullName),
            Focus::DateOfBirth => Some(Field::DateOfBirth),
            Focus::PreferredLocation => Some(Field::PreferredLocation),
            Focus::ProgrammingSkills => Some(Field::ProgrammingSkills),
            Focus::ResumeSummary => Some(Field::ResumeSummary),
            Focus::Cancel | Focus::Submit => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RegisterForm {
    pub draft: Draft,
    pub focus: Focus,
    /// Highlighted entry in the skills checklist.
    pub skill_cursor: usize,
    pub errors: ValidationErrors,
    /// Digits typed into the date of birth mask. The draft only receives a
    /// date once these form a real calendar day.
    date_digits: String,
    /// Set after the first submit attempt; from then on edits re-validate.
    attempted: bool,
    pending: Option<Ticket>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            focus: Focus::FullName,
            skill_cursor: 0,
            errors: ValidationErrors::new(),
            date_digits: String::new(),
            attempted: false,
            pending: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % Focus::ORDER.len();
        self.focus = Focus::ORDER[i];
    }

    pub fn focus_prev(&mut self) {
        let len = Focus::ORDER.len();
        let i = (self.focus.index() + len - 1) % len;
        self.focus = Focus::ORDER[i];
    }

    /// Type a character into the focused text input. Inputs stop accepting
    /// characters at their maximum length.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::FullName => push_capped(&mut self.draft.full_name, c, FULL_NAME_MAX),
            Focus::ResumeSummary => {
                push_capped(&mut self.draft.resume_summary, c, RESUME_SUMMARY_MAX)
            }
            Focus::DateOfBirth if c.is_ascii_digit() => {
                push_capped(&mut self.date_digits, c, DATE_DIGITS);
                self.sync_date();
            }
            Focus::ProgrammingSkills if c == ' ' => self.toggle_skill_at_cursor(),
            _ => return,
        }
        self.revalidate();
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::FullName => {
                self.draft.full_name.pop();
            }
            Focus::DateOfBirth => {
                self.date_digits.pop();
                self.sync_date();
            }
            Focus::ResumeSummary => {
                self.draft.resume_summary.pop();
            }
            _ => return,
        }
        self.revalidate();
    }

    /// The date mask as typed so far, e.g. `1990-0`.
    pub fn date_display(&self) -> String {
        let mut out = String::with_capacity(DATE_DIGITS + 2);
        for (i, c) in self.date_digits.chars().enumerate() {
            if i == 4 || i == 6 {
                out.push('-');
            }
            out.push(c);
        }
        out
    }

    /// Left/Right: cycle the location select, or move across the skills checklist.
    pub fn step(&mut self, forward: bool) {
        match self.focus {
            Focus::PreferredLocation => {
                self.draft.preferred_location = cycle_location(&self.draft.preferred_location, forward);
                self.revalidate();
            }
            Focus::ProgrammingSkills => {
                let len = PROGRAMMING_SKILLS.len();
                self.skill_cursor = if forward {
                    (self.skill_cursor + 1) % len
                } else {
                    (self.skill_cursor + len - 1) % len
                };
            }
            Focus::Cancel if forward => self.focus = Focus::Submit,
            Focus::Submit if !forward => self.focus = Focus::Cancel,
            _ => {}
        }
    }

    pub fn toggle_skill_at_cursor(&mut self) {
        if let Some(skill) = PROGRAMMING_SKILLS.get(self.skill_cursor) {
            self.draft.toggle_skill(skill);
            self.revalidate();
        }
    }

    /// Attempt a submission. Returns the create request when the draft is
    /// valid and nothing is already in flight; otherwise records the field
    /// errors and returns `None`.
    pub fn submit(&mut self, ticket: Ticket) -> Option<Request> {
        if self.pending.is_some() {
            return None;
        }
        self.attempted = true;
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }
        self.pending = Some(ticket);
        Some(Request::CreateUser(self.draft.clone()))
    }

    /// Accept the result of the create request identified by `ticket`.
    /// Returns `None` when this form isn't waiting for that ticket.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<User, ApiError>,
    ) -> Option<Result<User, ApiError>> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(result)
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    fn sync_date(&mut self) {
        let shown = self.date_display();
        let complete = self.date_digits.len() == DATE_DIGITS
            && NaiveDate::parse_from_str(&shown, "%Y-%m-%d").is_ok();
        self.draft.date_of_birth = if complete { shown } else { String::new() };
    }

    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = validate(&self.draft);
        }
    }
}

fn push_capped(target: &mut String, c: char, max: usize) {
    if target.chars().count() < max {
        target.push(c);
    }
}

/// Next value of the location select; the empty "Select Location" entry sits
/// before the first city.
fn cycle_location(current: &str, forward: bool) -> String {
    let options: Vec<&str> = std::iter::once("").chain(LOCATIONS).collect();
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    options[next].to_string()
}
