use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Theme;
use crate::app::register::{Focus, RegisterForm};
use crate::model::{FULL_NAME_MAX, PROGRAMMING_SKILLS, RESUME_SUMMARY_MAX};
use crate::ui::components::marker;

pub fn render_register(f: &mut Frame, area: Rect, theme: &Theme, form: &RegisterForm) {
    let block = Block::default()
        .title(Span::styled(
            " New User Registration ",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    // indent plus cursor
    let input_width = (inner.width as usize).saturating_sub(3);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Please fill in your information below to register",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
    ];
    let mut focus_line = 0usize;

    for focus in Focus::ORDER {
        let Some(field) = focus.field() else {
            continue;
        };
        if focus == form.focus {
            focus_line = lines.len();
        }
        let focused = focus == form.focus;
        lines.push(label_line(theme, focus, focused));
        match focus {
            Focus::PreferredLocation => {
                let value = &form.draft.preferred_location;
                let shown = if value.is_empty() { "Select Location" } else { value.as_str() };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("< {shown} >"), value_style(theme, focused, value.is_empty())),
                ]));
            }
            Focus::ProgrammingSkills => {
                let mut spans = vec![Span::raw("  ")];
                for (i, skill) in PROGRAMMING_SKILLS.iter().enumerate() {
                    let check = if form.draft.has_skill(skill) { "x" } else { " " };
                    let style = if focused && i == form.skill_cursor {
                        Style::default()
                            .fg(theme.highlight_fg)
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    spans.push(Span::styled(format!("[{check}] {skill}"), style));
                    spans.push(Span::raw("  "));
                }
                lines.push(Line::from(spans));
            }
            _ => {
                let (value, placeholder) = match focus {
                    Focus::FullName => (form.draft.full_name.clone(), "Enter your full name"),
                    Focus::DateOfBirth => (form.date_display(), "YYYY-MM-DD"),
                    _ => (
                        form.draft.resume_summary.clone(),
                        "Brief summary of your work experience",
                    ),
                };
                let value = fit_tail(&value, input_width);
                lines.push(text_input_line(theme, &value, placeholder, focused));
            }
        }
        if let Some(msg) = form.error_for(field) {
            lines.push(Line::from(Span::styled(
                format!("  {msg}"),
                Style::default().fg(theme.error),
            )));
        }
        let hint = match focus {
            Focus::FullName => Some(format!(
                "{}/{FULL_NAME_MAX} characters",
                form.draft.full_name.chars().count()
            )),
            Focus::ProgrammingSkills => Some(format!(
                "Selected skills: {}",
                form.draft.programming_skills.len()
            )),
            Focus::ResumeSummary => Some(format!(
                "{}/{RESUME_SUMMARY_MAX} characters",
                form.draft.resume_summary.chars().count()
            )),
            _ => None,
        };
        if let Some(hint) = hint {
            lines.push(Line::from(Span::styled(
                format!("  {hint}"),
                Style::default().fg(theme.muted),
            )));
        }
        lines.push(Line::from(""));
    }

    if matches!(form.focus, Focus::Cancel | Focus::Submit) {
        focus_line = lines.len();
    }
    let submit_label = if form.is_submitting() {
        "Submitting..."
    } else {
        "Submit Application"
    };
    lines.push(Line::from(vec![
        button(theme, "Cancel", form.focus == Focus::Cancel),
        Span::raw("    "),
        button(theme, submit_label, form.focus == Focus::Submit),
    ]));

    // one row per line, so the focused control stays on screen when the form
    // is taller than the body
    let scroll = (focus_line + 4).saturating_sub(inner.height as usize) as u16;

    let p = Paragraph::new(lines).scroll((scroll, 0)).block(block);
    f.render_widget(p, area);
}

fn label_line(theme: &Theme, focus: Focus, focused: bool) -> Line<'static> {
    let (label, note) = match focus {
        Focus::FullName => ("Full Name", ""),
        Focus::DateOfBirth => ("Date of Birth", " (YYYY-MM-DD)"),
        Focus::PreferredLocation => ("Preferred Location", ""),
        Focus::ProgrammingSkills => ("Programming Skills", " (Select at least one)"),
        _ => ("Resume Summary", ""),
    };
    let style = if focused {
        Style::default()
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(format!("{}{label}", marker(focused)), style),
        Span::styled(note, Style::default().fg(theme.muted)),
    ])
}

fn text_input_line(theme: &Theme, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder.to_string(), Style::default().fg(theme.muted)));
    } else {
        spans.push(Span::styled(value.to_string(), value_style(theme, focused, false)));
        if focused {
            spans.push(Span::styled("_", Style::default().fg(theme.highlight_fg)));
        }
    }
    Line::from(spans)
}

/// The end of `value` that fits in `width` columns, with a leading `…` when cut.
fn fit_tail(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width || width == 0 {
        return value.to_string();
    }
    let keep = width - 1;
    let tail: String = value.chars().skip(len - keep).collect();
    format!("…{tail}")
}

fn value_style(theme: &Theme, focused: bool, placeholder: bool) -> Style {
    match (focused, placeholder) {
        (true, _) => Style::default().fg(theme.highlight_fg),
        (false, true) => Style::default().fg(theme.muted),
        (false, false) => Style::default().fg(theme.text),
    }
}

fn button(theme: &Theme, label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Span::styled(format!("{}[ {label} ]", marker(focused)), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_tail_keeps_the_end_of_long_values() {
        assert_eq!(fit_tail("short", 10), "short");
        assert_eq!(fit_tail("abcdefghij", 5), "…ghij");
        assert_eq!(fit_tail("abc", 0), "abc");
    }
}
