use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::{Directory, Theme};
use crate::format::{format_date, record_fields, skills_label};
use crate::ui::components::render_modal;

pub fn render_directory(f: &mut Frame, area: Rect, theme: &Theme, dir: &mut Directory) {
    let block = Block::default()
        .title(Span::styled(
            " Registered Users ",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(inner);

    let subtitle = Paragraph::new(Span::styled(
        "View and manage all registered user profiles",
        Style::default().fg(theme.muted),
    ));
    f.render_widget(subtitle, parts[0]);

    render_search(f, parts[1], theme, dir);

    if dir.is_loading() {
        render_message(f, parts[2], theme, "Loading...", theme.text);
    } else if let Some(err) = &dir.error {
        render_message(f, parts[2], theme, err, theme.error);
    } else if dir.visible().is_empty() {
        render_message(f, parts[2], theme, "No users found", theme.text);
    } else {
        render_table(f, parts[2], theme, dir);
    }

    if let Some(user) = &dir.detail {
        let mut lines = Vec::new();
        for (label, value) in record_fields(user) {
            lines.push(Line::from(Span::styled(
                label,
                Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(value));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Esc close",
            Style::default().fg(theme.muted),
        )));
        render_modal(f, area, theme, "User Details", lines);
    }
}

fn render_search(f: &mut Frame, area: Rect, theme: &Theme, dir: &Directory) {
    let content = if dir.search.is_empty() && !dir.searching {
        Span::styled("Search users...", Style::default().fg(theme.muted))
    } else if dir.searching {
        Span::styled(format!("{}_", dir.search), Style::default().fg(theme.highlight_fg))
    } else {
        Span::styled(dir.search.clone(), Style::default().fg(theme.text))
    };
    let border = if dir.searching { theme.highlight_fg } else { theme.border };
    let p = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(p, area);
}

fn render_message(f: &mut Frame, area: Rect, theme: &Theme, message: &str, color: ratatui::style::Color) {
    let p = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(p, area);
}

fn render_table(f: &mut Frame, area: Rect, theme: &Theme, dir: &mut Directory) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        dir.rows_per_page = body_height;
    }

    let visible = dir.visible();
    let start = (dir.selected / dir.rows_per_page) * dir.rows_per_page;
    let end = (start + dir.rows_per_page).min(visible.len());
    let slice = &visible[start..end];

    let rows = slice.iter().enumerate().map(|(i, u)| {
        let style = if start + i == dir.selected {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Row::new(vec![
            Cell::from(u.full_name.clone()),
            Cell::from(format_date(&u.date_of_birth)),
            Cell::from(u.preferred_location.clone()),
            Cell::from(skills_label(&u.programming_skills)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Percentage(30),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Percentage(50),
    ];
    let header = Row::new(vec!["Full Name", "Date of Birth", "Location", "Programming Skills"])
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD));

    let title = format!("{} of {}", visible.len(), dir.users.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
