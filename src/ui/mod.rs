pub mod components;
pub mod directory;
pub mod home;
pub mod register;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{AppState, Screen};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    components::render_header(f, root[0], app);

    let theme = app.theme;
    match &mut app.screen {
        Screen::Home { selected } => home::render_home(f, root[1], &theme, *selected),
        Screen::Register(form) => register::render_register(f, root[1], &theme, form),
        Screen::Directory(dir) => directory::render_directory(f, root[1], &theme, dir),
    }

    components::render_status_bar(f, root[2], app);
}
