//! Pane rendering for the calculator UI
//!
//! Every renderer here is a stateless function taking the frame, the
//! target area, and the session data it draws from.
//!
//! # Layout
//!
//! - Mode tab bar across the top
//! - Display pane with the pending equation and the current value
//! - Key reference pane for the active mode
//! - Status bar with messages, errors, and global keybindings

use crate::engine::programmer::{format_in_base, parse_in_base, NumberBase};
use crate::session::{Mode, Session};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the mode tab bar
pub fn render_mode_bar(frame: &mut Frame, area: Rect, mode: Mode) {
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let mut spans = vec![Span::styled(" ", sep_style)];
    for (i, tab) in Mode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", sep_style));
        }
        let style = if *tab == mode {
            Style::default()
                .bg(DEFAULT_THEME.tab_active)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}

/// Render the display pane with the pending equation and current value
pub fn render_display_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let equation_line = Line::from(equation_spans(session.equation())).alignment(Alignment::Right);

    let value_line = Line::from(Span::styled(
        session.display().to_string(),
        Style::default()
            .fg(DEFAULT_THEME.number)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);

    let context_line = match session.mode() {
        Mode::Programmer => base_chip_line(session.base()),
        Mode::Converter => conversion_line(session),
        Mode::Standard | Mode::Scientific => Line::from(""),
    };

    let paragraph = Paragraph::new(vec![equation_line, value_line, context_line])
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));

    frame.render_widget(paragraph, area);
}

/// Render the key reference pane for the active mode
pub fn render_reference_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = match session.mode() {
        Mode::Standard => standard_reference(),
        Mode::Scientific => scientific_reference(),
        Mode::Programmer => programmer_reference(session),
        Mode::Converter => converter_reference(session),
    };

    let list = List::new(items)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));

    frame.render_widget(list, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session, message: &str) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: mode chip and the active message or error
    let error = session.last_error();

    let chip_style = Style::default()
        .bg(if error.is_some() {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.primary
        })
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let text_style = Style::default().bg(DEFAULT_THEME.bar_bg).fg(if error.is_some() {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.fg
    });

    let shown = match error {
        Some(err) => format!(" {} ", err.label()),
        None => format!(" {} ", message),
    };

    let left_spans = vec![
        Span::styled(format!(" {} ", session.mode().label()), chip_style),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(shown, text_style),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: global keybindings
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let action = if session.mode() == Mode::Converter {
        " convert "
    } else {
        " = "
    };

    let right_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" mode ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(action, desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⌫ ", key_style),
        Span::styled(" delete ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

/// Split the pending equation into styled spans, with operators
/// picked out from the digits around them.
fn equation_spans(equation: &str) -> Vec<Span<'static>> {
    let digit_style = Style::default().fg(DEFAULT_THEME.comment);
    let op_style = Style::default().fg(DEFAULT_THEME.operator);

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_is_op = false;

    for c in equation.chars() {
        let is_op = !(c.is_ascii_alphanumeric() || c == '.' || c == ' ');
        if is_op != run_is_op && !run.is_empty() {
            let style = if run_is_op { op_style } else { digit_style };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_is_op = is_op;
        run.push(c);
    }

    if !run.is_empty() {
        let style = if run_is_op { op_style } else { digit_style };
        spans.push(Span::styled(run, style));
    }

    spans
}

/// One chip per base with the active one highlighted
fn base_chip_line(active: NumberBase) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, base) in NumberBase::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *base == active {
            Style::default()
                .bg(DEFAULT_THEME.selection)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(format!(" {} ", base.label()), style));
    }
    Line::from(spans)
}

/// Category and unit pair for the converter display
fn conversion_line(session: &Session) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            session.category().name.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            session.from_unit().symbol.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.selection)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            session.to_unit().symbol.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.selection)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn key_span(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
    )
}

fn desc_span(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(DEFAULT_THEME.fg),
    )
}

/// Build one reference row from key/description pairs
fn key_row(pairs: &[(&str, &str)]) -> ListItem<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(key_span(key));
        spans.push(desc_span(desc));
    }
    ListItem::new(Line::from(spans))
}

fn blank_row() -> ListItem<'static> {
    ListItem::new(Line::from(""))
}

fn standard_reference() -> Vec<ListItem<'static>> {
    vec![
        blank_row(),
        key_row(&[("0-9", "digits"), (". ,", "decimal point")]),
        blank_row(),
        key_row(&[("+ - * / %", "operators"), ("↵ =", "evaluate")]),
    ]
}

fn scientific_reference() -> Vec<ListItem<'static>> {
    vec![
        blank_row(),
        key_row(&[("0-9", "digits"), ("+ - * / %", "operators")]),
        blank_row(),
        key_row(&[("s", "sin"), ("c", "cos"), ("t", "tan")]),
        blank_row(),
        key_row(&[("r", "√"), ("x", "x²"), ("z", "x³")]),
        blank_row(),
        key_row(&[("l", "log"), ("n", "ln"), ("p", "π"), ("e", "e")]),
    ]
}

/// Programmer reference: the current value rendered in all four bases,
/// then the key rows.
fn programmer_reference(session: &Session) -> Vec<ListItem<'static>> {
    let mut items = vec![blank_row()];

    match parse_in_base(session.display(), session.base()) {
        Ok(value) => {
            for base in NumberBase::ALL {
                let marker = if base == session.base() { "▸" } else { " " };
                let label_style = if base == session.base() {
                    Style::default()
                        .fg(DEFAULT_THEME.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.comment)
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", marker),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ),
                    Span::styled(format!("{:<4}", base.label()), label_style),
                    Span::styled(
                        format_in_base(value, base),
                        Style::default().fg(DEFAULT_THEME.number),
                    ),
                ])));
            }
        }
        Err(_) => {
            items.push(ListItem::new(Line::from(Span::styled(
                " value exceeds the 32-bit range",
                Style::default().fg(DEFAULT_THEME.comment),
            ))));
        }
    }

    items.push(blank_row());
    items.push(key_row(&[("H D O B", "base"), ("a-f", "hex digits")]));
    items.push(blank_row());
    items.push(key_row(&[("&", "AND"), ("|", "OR"), ("^", "XOR"), ("~", "NOT")]));
    items.push(blank_row());
    items.push(key_row(&[("<", "shift left"), (">", "shift right")]));
    items
}

/// Converter reference: the unit table for the active category with
/// the source and target marked, then the key rows.
fn converter_reference(session: &Session) -> Vec<ListItem<'static>> {
    let mut items = vec![blank_row()];

    for unit in session.category().units {
        let is_from = unit.symbol == session.from_unit().symbol;
        let is_to = unit.symbol == session.to_unit().symbol;

        let symbol_style = if is_from || is_to {
            Style::default()
                .fg(DEFAULT_THEME.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:<5}", unit.symbol), symbol_style),
            Span::styled(
                format!("{:<16}", unit.name),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ];

        if is_from {
            spans.push(Span::styled(
                " from",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if is_to {
            spans.push(Span::styled(
                " to",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        items.push(ListItem::new(Line::from(spans)));
    }

    items.push(blank_row());
    items.push(key_row(&[
        ("←/→", "category"),
        ("f", "from unit"),
        ("t", "to unit"),
        ("s", "swap"),
    ]));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_spans_groups_operator_runs() {
        let spans = equation_spans("12+");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "12");
        assert_eq!(spans[1].content, "+");
    }

    #[test]
    fn test_equation_spans_empty() {
        assert!(equation_spans("").is_empty());
    }

    #[test]
    fn test_equation_spans_keeps_decimal_with_digits() {
        let spans = equation_spans("1.5*");
        assert_eq!(spans[0].content, "1.5");
        assert_eq!(spans[1].content, "*");
    }
}
