use crate::calc::month_grid::{DAYS_PER_WEEK, WEEKDAY_HEADERS};
use crate::calc::{format_date_key, is_today, month_summary, DayCell};
use crate::data::mood::LEGEND;
use crate::data::mood_record::{capitalize, MAX_INTENSITY};
use crate::ui::app::App;
use crate::ui::{hex_color, ACCENT, MUTED};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Width of one day column: a two-digit day or up to five intensity dots.
const CELL_WIDTH: usize = 6;

impl App {
    pub(super) fn render_calendar(&self, f: &mut Frame, area: Rect) {
        let grid_width = (CELL_WIDTH * DAYS_PER_WEEK) as u16 + 2;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(grid_width), Constraint::Min(30)])
            .split(area);

        self.render_month_grid(f, cols[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // selected date
                Constraint::Length(LEGEND.len() as u16 + 2),
                Constraint::Min(5), // summary
            ])
            .split(cols[1]);
        self.render_selected_date(f, side[0]);
        render_legend(f, side[1]);
        self.render_month_summary(f, side[2]);
    }

    fn render_month_grid(&self, f: &mut Frame, area: Rect) {
        let view = self.calendar.view;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{:^w$}", format!("◀ {} ▶", view.title()), w = CELL_WIDTH * DAYS_PER_WEEK),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                WEEKDAY_HEADERS
                    .iter()
                    .map(|h| format!("{h:^w$}", w = CELL_WIDTH))
                    .collect::<String>(),
                Style::default().fg(MUTED),
            )),
        ];

        for week in view.grid().chunks(DAYS_PER_WEEK) {
            let mut days = Vec::with_capacity(DAYS_PER_WEEK);
            let mut dots = Vec::with_capacity(DAYS_PER_WEEK);
            for cell in week {
                let DayCell::Day(day) = *cell else {
                    days.push(Span::raw(" ".repeat(CELL_WIDTH)));
                    dots.push(Span::raw(" ".repeat(CELL_WIDTH)));
                    continue;
                };
                let key = format_date_key(view.year, view.month, day);
                let record = self.moods.get(&key);
                let mood_color = record.map(|r| hex_color(&r.color));
                let style = calendar_day_style(
                    self.calendar.selected == Some(key),
                    self.calendar.cursor == day,
                    is_today(view.year, view.month, day, &self.today),
                    mood_color,
                );
                days.push(Span::styled(format!("{day:^w$}", w = CELL_WIDTH), style));

                let marks = record.map(|r| "•".repeat(r.dots())).unwrap_or_default();
                dots.push(Span::styled(
                    format!("{marks:^w$}", w = CELL_WIDTH),
                    Style::default().fg(mood_color.unwrap_or(MUTED)),
                ));
            }
            lines.push(Line::from(days));
            lines.push(Line::from(dots));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←→↑↓=move  Enter=select  p/n=prev/next month  t=today",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Mood Calendar ");
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_selected_date(&self, f: &mut Frame, area: Rect) {
        let lines = match self.calendar.selected {
            None => vec![Line::from(Span::styled(
                "Press Enter on a day to see its mood.",
                Style::default().fg(MUTED),
            ))],
            Some(key) => {
                let mut lines = vec![Line::from(Span::styled(
                    key.long_form(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                match self.moods.get(&key) {
                    Some(record) => {
                        lines.push(Line::from(vec![
                            Span::raw("Mood: "),
                            Span::styled(
                                record.display_name(),
                                Style::default().fg(hex_color(&record.color)),
                            ),
                        ]));
                        lines.push(Line::from(format!(
                            "Intensity: {}/{MAX_INTENSITY}",
                            record.intensity
                        )));
                    }
                    None => lines.push(Line::from(Span::styled(
                        "No mood logged",
                        Style::default().fg(MUTED),
                    ))),
                }
                lines
            }
        };
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Selected ")),
            area,
        );
    }

    fn render_month_summary(&self, f: &mut Frame, area: Rect) {
        let summary = month_summary(&self.moods, self.calendar.view);
        let most_common = summary
            .most_common
            .as_deref()
            .map(capitalize)
            .unwrap_or_else(|| "-".to_string());
        let average = summary
            .average_intensity
            .map(|a| format!("{a:.1}/{MAX_INTENSITY}"))
            .unwrap_or_else(|| "-".to_string());
        let lines = vec![
            Line::from(format!("{:<20}{}", "Days tracked", summary.days_tracked)),
            Line::from(format!("{:<20}{}", "Most common", most_common)),
            Line::from(format!("{:<20}{}", "Average intensity", average)),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" This Month's Summary ")),
            area,
        );
    }

    pub(super) fn handle_calendar_key(&mut self, code: KeyCode) {
        let week = DAYS_PER_WEEK as i32;
        match code {
            KeyCode::Left => self.calendar.move_cursor(-1),
            KeyCode::Right => self.calendar.move_cursor(1),
            KeyCode::Up => self.calendar.move_cursor(-week),
            KeyCode::Down => self.calendar.move_cursor(week),
            KeyCode::Char('n') => self.calendar.navigate(1),
            KeyCode::Char('p') => self.calendar.navigate(-1),
            KeyCode::Char('t') => self.calendar.jump_to(self.today),
            KeyCode::Enter | KeyCode::Char(' ') => self.calendar.select_cursor(),
            _ => {}
        }
    }
}

fn render_legend(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LEGEND
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(hex_color(m.color))),
                Span::raw(m.label),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Mood Legend ")),
        area,
    );
}

/// Style for one day number in the month grid.
pub(crate) fn calendar_day_style(
    is_selected: bool,
    is_cursor: bool,
    is_today: bool,
    mood_color: Option<Color>,
) -> Style {
    if is_cursor {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(mood_color.unwrap_or(ACCENT))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else if let Some(color) = mood_color {
        let mut s = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if is_today {
            s = s.add_modifier(Modifier::REVERSED);
        }
        s
    } else if is_today {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    }
}
