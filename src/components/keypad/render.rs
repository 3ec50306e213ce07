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

//! UI rendering logic for the keypad.
//!
//! This module handles the visual representation of the button grid,
//! including focus highlighting, relabelled toggle buttons, and the dimmed
//! state of the hexadecimal row outside hexadecimal mode.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::keypad::{GRID_COLS, GRID_ROWS, HEX_ROW, KeypadView},
    model::DisplayMode,
    theme::Theme,
};

impl KeypadView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, mode: DisplayMode, theme: &Theme) {
        let row_count = if self.hex_enabled { GRID_ROWS + 1 } else { GRID_ROWS };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); row_count])
            .split(area);

        for row in 0..GRID_ROWS {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
                .split(rows[row]);

            for col in 0..GRID_COLS {
                let index = row * GRID_COLS + col;
                let style = if index == self.cursor() {
                    Style::default().fg(theme.button_fg).bg(theme.accent_colour)
                } else {
                    Style::default().fg(theme.button_fg).bg(theme.button_bg)
                };

                let button = Paragraph::new(self.label(index))
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(theme.border_colour)),
                    );
                f.render_widget(button, cells[col]);
            }
        }

        if self.hex_enabled {
            self.draw_hex_row(f, rows[GRID_ROWS], mode, theme);
        }
    }

    fn draw_hex_row(&self, f: &mut Frame, area: Rect, mode: DisplayMode, theme: &Theme) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, HEX_ROW.len() as u32); 6])
            .split(area);

        // Greyed out unless the hexadecimal mode makes the keys effective
        let style = if mode == DisplayMode::Hexadecimal {
            Style::default().fg(theme.button_fg).bg(theme.button_bg)
        } else {
            Style::default().fg(theme.border_colour)
        };

        for (index, hex) in HEX_ROW.iter().enumerate() {
            let label = hex.digit().to_ascii_uppercase().to_string();
            let button = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border_colour)),
                );
            f.render_widget(button, cells[index]);
        }
    }
}
