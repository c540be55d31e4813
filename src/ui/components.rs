//! Shared UI components (header, status bar, modal helpers).
//!
//! Small building blocks reused by the home, registration and directory screens.
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::{KeyAction, Keymap};
use crate::app::{AppState, Route, Theme, ToastLevel};

/// Render the top bar with the product name and the current screen.
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let screen = match app.route() {
        Route::Home => "Home",
        Route::Register => "New User",
        Route::Directory => "View Users",
    };
    let line = Line::from(vec![
        Span::styled(
            "CW Careers",
            Style::default()
                .fg(app.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  /  {screen}"), Style::default().fg(app.theme.muted)),
    ]);
    let p = Paragraph::new(line)
        .style(Style::default().bg(app.theme.header_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Render the bottom status bar: the current notification if there is one,
/// key hints for the active screen otherwise.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let base = Style::default()
        .fg(app.theme.status_fg)
        .bg(app.theme.status_bg);
    let p = match &app.toast {
        Some(toast) => {
            let fg = match toast.level {
                ToastLevel::Success => app.theme.success,
                ToastLevel::Error => app.theme.error,
            };
            Paragraph::new(toast.message.clone())
                .style(base.fg(fg).add_modifier(Modifier::BOLD))
        }
        None => Paragraph::new(key_hints(app)).style(base),
    };
    f.render_widget(p, area);
}

fn key_hints(app: &AppState) -> String {
    let km = &app.keymap;
    match app.route() {
        Route::Home => [
            hint(km, KeyAction::MoveDown, "select"),
            hint(km, KeyAction::Activate, "open"),
            hint(km, KeyAction::Quit, "quit"),
        ]
        .join("  "),
        Route::Register => {
            "Tab/Shift+Tab move  Left/Right choose  Space toggle skill  Enter activate  Esc cancel"
                .to_string()
        }
        Route::Directory => [
            hint(km, KeyAction::StartSearch, "search"),
            hint(km, KeyAction::Activate, "view"),
            hint(km, KeyAction::Refresh, "refresh"),
            hint(km, KeyAction::NewUser, "new user"),
            hint(km, KeyAction::Back, "home"),
            hint(km, KeyAction::Quit, "quit"),
        ]
        .join("  "),
    }
}

fn hint(km: &Keymap, action: KeyAction, label: &str) -> String {
    let keys = km.keys_for(action);
    if keys.is_empty() {
        return String::new();
    }
    format!("{} {label}", keys.join("/"))
}

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render a modal with a title and pre-built lines, clearing what's beneath.
pub fn render_modal(f: &mut Frame, area: Rect, theme: &Theme, title: &str, lines: Vec<Line>) {
    let max_w = area.width.saturating_sub(6).max(30);
    let width = 70u16.min(max_w);
    let max_h = area.height.saturating_sub(4).max(5);
    let height = (lines.len() as u16 + 4).min(max_h);
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// `▶ ` in front of the focused control, blank padding otherwise.
pub fn marker(focused: bool) -> &'static str {
    if focused { "▶ " } else { "  " }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(40, 4, area);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
