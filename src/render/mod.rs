// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework: the display panel, the keypad
//! grid, and the status line. The display panel renders whatever the control
//! unit last emitted, re-rendered in the active base mode, so all calculator
//! behavior stays in the core.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, util::format::format_in_base};

/// Renders the user interface to the terminal frame.
///
/// Called after every processed event; partitions the screen into the
/// display panel, the keypad, and a one-line status bar.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_display(f, outer[0], app);

    let mode = app.control.mode();
    app.keypad.draw(f, outer[1], mode, &app.theme);

    draw_status(f, outer[2], app);
}

fn draw_display(f: &mut Frame, area: Rect, app: &App) {
    let text = format_in_base(&app.display, app.control.mode());

    let display = Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(app.theme.display_fg).bg(app.theme.display_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_colour)),
        );
    f.render_widget(display, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.control.mode().label()),
            Style::default().fg(app.theme.background_colour).bg(app.theme.accent_colour),
        ),
        Span::raw(" "),
    ];

    if app.control.memory_active() {
        spans.push(Span::styled("M", Style::default().fg(app.theme.accent_colour)));
        spans.push(Span::raw(" "));
    }

    let mut help = String::from("arrows move · space press · q quit");
    if app.config.hex_keypad {
        help.push_str(" · a-f hex");
    }
    spans.push(Span::styled(help, Style::default().fg(app.theme.status_fg)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
