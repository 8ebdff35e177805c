use crate::data::Period;
use crate::ui::app::App;
use crate::ui::{hex_color, ACCENT, MUTED};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::debug;

/// Longest bar in the trend and distribution charts, in cells.
const BAR_WIDTH: u16 = 30;

impl App {
    pub(super) fn render_insights(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header + period selector
                Constraint::Min(10),
                Constraint::Length(1), // keys
            ])
            .split(area);

        let mut periods = vec![Span::styled(
            "Your Insights  ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for p in Period::ALL {
            let style = if p == self.period {
                Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            periods.push(Span::styled(format!(" {} ", p.label()), style));
            periods.push(Span::raw(" "));
        }
        f.render_widget(
            Paragraph::new(vec![
                Line::from(periods),
                Line::from(Span::styled(
                    "Understanding your emotional patterns",
                    Style::default().fg(MUTED),
                )),
            ]),
            rows[0],
        );

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let data = &self.insights;
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(data.weekly.len() as u16 + 2),
                Constraint::Length(data.distribution.len() as u16 + 2),
                Constraint::Min(3),
            ])
            .split(cols[0]);
        self.render_weekly_trend(f, left[0]);
        self.render_distribution(f, left[1]);
        self.render_key_stats(f, left[2]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(cols[1]);
        self.render_insight_cards(f, right[0]);
        self.render_suggestions(f, right[1]);

        f.render_widget(
            Paragraph::new(Span::styled(
                "w/m/y or ←→=period",
                Style::default().fg(Color::DarkGray),
            )),
            rows[2],
        );
    }

    fn render_weekly_trend(&self, f: &mut Frame, area: Rect) {
        let heights = self.insights.trend_bar_heights(BAR_WIDTH);
        let lines: Vec<Line> = self
            .insights
            .weekly
            .iter()
            .zip(heights)
            .map(|(point, len)| {
                Line::from(vec![
                    Span::raw(format!("{:<4}", point.day)),
                    Span::styled(
                        "█".repeat(len as usize),
                        Style::default().fg(hex_color(&point.color)),
                    ),
                    Span::styled(format!(" {}", point.mood), Style::default().fg(MUTED)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Weekly Mood Trend ")),
            area,
        );
    }

    fn render_distribution(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .insights
            .distribution
            .iter()
            .map(|slice| {
                let len = slice.percentage.min(100) as usize * BAR_WIDTH as usize / 100;
                Line::from(vec![
                    Span::raw(format!("{:<9}", slice.mood)),
                    Span::styled("█".repeat(len), Style::default().fg(hex_color(&slice.color))),
                    Span::styled(format!(" {}%", slice.percentage), Style::default().fg(MUTED)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Mood Distribution ")),
            area,
        );
    }

    fn render_key_stats(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .insights
            .key_stats
            .iter()
            .map(|stat| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>6}  ", stat.value),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(stat.label.clone()),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Key Stats ")),
            area,
        );
    }

    fn render_insight_cards(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for card in &self.insights.insights {
            lines.push(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(hex_color(&card.color))),
                Span::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", card.description),
                Style::default().fg(MUTED),
            )));
        }
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Personal Insights ")),
            area,
        );
    }

    fn render_suggestions(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for s in &self.insights.suggestions {
            lines.push(Line::from(Span::styled(
                s.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", s.body),
                Style::default().fg(MUTED),
            )));
        }
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Try This ")),
            area,
        );
    }

    /// Period buttons only change the highlight; the figures stay the same.
    pub(super) fn handle_insights_key(&mut self, code: KeyCode) {
        let i = Period::ALL.iter().position(|p| *p == self.period).unwrap_or(0);
        let next = match code {
            KeyCode::Char('w') => Period::Week,
            KeyCode::Char('m') => Period::Month,
            KeyCode::Char('y') => Period::Year,
            KeyCode::Left => Period::ALL[i.saturating_sub(1)],
            KeyCode::Right => Period::ALL[(i + 1).min(Period::ALL.len() - 1)],
            _ => return,
        };
        if next != self.period {
            debug!(period = next.label(), "insights period changed");
            self.period = next;
        }
    }
}
