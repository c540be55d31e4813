use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::api::Operation;
use crate::app::keymap::KeyAction;
use crate::app::register::Focus;
use crate::app::worker::{Outcome, Response};
use crate::app::{AppState, Directory, HomeChoice, RegisterForm, Route, Screen, ToastLevel};
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        pump(app);

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply finished API responses and expire the current toast.
pub fn pump(app: &mut AppState) {
    for response in app.executor.drain() {
        apply_response(app, response);
    }
    if app
        .toast
        .as_ref()
        .is_some_and(|t| t.is_expired(Instant::now()))
    {
        app.toast = None;
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    // Any key press dismisses the current notification.
    app.toast = None;

    match app.route() {
        Route::Home => handle_home_key(app, &key),
        Route::Register => handle_register_key(app, &key),
        Route::Directory => handle_directory_key(app, &key),
    }
}

/// Replace the current screen. Mounting the directory starts a fetch.
pub fn navigate(app: &mut AppState, route: Route) {
    info!(from = ?app.route(), to = ?route, "navigate");
    match route {
        Route::Home => {
            app.screen = Screen::Home {
                selected: HomeChoice::NewUser,
            }
        }
        Route::Register => app.screen = Screen::Register(RegisterForm::new()),
        Route::Directory => {
            app.screen = Screen::Directory(Directory::new());
            refresh_directory(app);
        }
    }
}

pub fn apply_response(app: &mut AppState, response: Response) {
    let Response { ticket, outcome } = response;
    match outcome {
        Outcome::Created(result) => {
            let Screen::Register(form) = &mut app.screen else {
                debug!(ticket, "dropping create response, form no longer shown");
                return;
            };
            let Some(result) = form.finish_submit(ticket, result) else {
                debug!(ticket, "dropping stale create response");
                return;
            };
            match result {
                Ok(user) => {
                    info!(ticket, id = user.id, "user created");
                    app.notify(ToastLevel::Success, "User created successfully");
                    navigate(app, Route::Directory);
                }
                Err(err) => {
                    warn!(ticket, error = %err, "create user failed");
                    let message = if err.message.is_empty() {
                        Operation::CreateUser.default_message().to_string()
                    } else {
                        err.message
                    };
                    app.notify(ToastLevel::Error, message);
                }
            }
        }
        Outcome::Listed(result) => {
            let Screen::Directory(dir) = &mut app.screen else {
                debug!(ticket, "dropping list response, directory no longer shown");
                return;
            };
            let count = result.as_ref().map(Vec::len).ok();
            if let Err(err) = &result {
                warn!(ticket, error = %err, "fetch users failed");
            }
            if dir.finish_load(ticket, result) {
                debug!(ticket, ?count, "directory loaded");
            } else {
                debug!(ticket, "dropping stale list response");
            }
        }
    }
}

fn refresh_directory(app: &mut AppState) {
    let ticket = app.take_ticket();
    let Screen::Directory(dir) = &mut app.screen else {
        return;
    };
    match dir.load(ticket) {
        Some(request) => app.dispatch(ticket, request),
        None => debug!("refresh ignored while loading"),
    }
}

fn submit_form(app: &mut AppState) {
    let ticket = app.take_ticket();
    let Screen::Register(form) = &mut app.screen else {
        return;
    };
    match form.submit(ticket) {
        Some(request) => {
            info!(ticket, "submitting registration");
            app.dispatch(ticket, request);
        }
        None if form.is_submitting() => debug!("submit ignored while a request is in flight"),
        None => {
            let fields: Vec<&str> = form.errors.keys().map(|f| f.name()).collect();
            debug!(?fields, "registration blocked by validation");
        }
    }
}

fn handle_home_key(app: &mut AppState, key: &KeyEvent) {
    let action = app.keymap.resolve(key);
    let Screen::Home { selected } = &mut app.screen else {
        return;
    };
    match action {
        Some(KeyAction::Quit) => app.should_quit = true,
        Some(KeyAction::MoveUp | KeyAction::MoveDown) => {
            *selected = match *selected {
                HomeChoice::NewUser => HomeChoice::ViewUsers,
                HomeChoice::ViewUsers => HomeChoice::NewUser,
            };
        }
        Some(KeyAction::Activate) => {
            let route = match *selected {
                HomeChoice::NewUser => Route::Register,
                HomeChoice::ViewUsers => Route::Directory,
            };
            navigate(app, route);
        }
        Some(KeyAction::NewUser) => navigate(app, Route::Register),
        Some(KeyAction::ViewUsers) => navigate(app, Route::Directory),
        _ => {}
    }
}

fn handle_register_key(app: &mut AppState, key: &KeyEvent) {
    let Screen::Register(form) = &mut app.screen else {
        return;
    };
    match key.code {
        KeyCode::Esc => navigate(app, Route::Home),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => form.step(false),
        KeyCode::Right => form.step(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter => match form.focus {
            Focus::Cancel => navigate(app, Route::Home),
            Focus::Submit => submit_form(app),
            Focus::ProgrammingSkills => form.toggle_skill_at_cursor(),
            _ => form.focus_next(),
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.input_char(c),
        _ => {}
    }
}

fn handle_directory_key(app: &mut AppState, key: &KeyEvent) {
    let action = app.keymap.resolve(key);
    let Screen::Directory(dir) = &mut app.screen else {
        return;
    };

    if dir.detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            dir.close_detail();
        }
        return;
    }

    if dir.searching {
        match key.code {
            KeyCode::Enter => dir.searching = false,
            KeyCode::Esc => {
                dir.clear_search();
                dir.searching = false;
            }
            KeyCode::Backspace => dir.pop_search(),
            KeyCode::Up => dir.move_up(),
            KeyCode::Down => dir.move_down(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                dir.push_search(c)
            }
            _ => {}
        }
        return;
    }

    match action {
        Some(KeyAction::Quit) => app.should_quit = true,
        Some(KeyAction::StartSearch) => dir.searching = true,
        Some(KeyAction::Refresh) => refresh_directory(app),
        Some(KeyAction::NewUser) => navigate(app, Route::Register),
        Some(KeyAction::Back) => navigate(app, Route::Home),
        Some(KeyAction::MoveUp) => dir.move_up(),
        Some(KeyAction::MoveDown) => dir.move_down(),
        Some(KeyAction::PageUp) => dir.page_up(),
        Some(KeyAction::PageDown) => dir.page_down(),
        Some(KeyAction::Activate) => {
            if dir.open_detail() {
                debug!(id = ?dir.detail.as_ref().map(|u| u.id), "opened user details");
            }
        }
        Some(KeyAction::ViewUsers | KeyAction::Ignore) | None => {}
    }
}
