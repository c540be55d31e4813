use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{HomeChoice, Theme};
use crate::ui::components::{centered_rect, marker};

pub fn render_home(f: &mut Frame, area: Rect, theme: &Theme, selected: HomeChoice) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to CW Careers",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Join our team and be part of something great",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
    ];
    for choice in HomeChoice::ALL {
        let focused = choice == selected;
        let style = if focused {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker(focused), choice.label()),
            style,
        )));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(60, height, area);
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, rect);
}
