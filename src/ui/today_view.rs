use crate::calc::DateKey;
use crate::data::mood::{calendar_color_for, MIN_INTENSITY, PICKER_MOODS};
use crate::data::mood_record::MAX_INTENSITY;
use crate::data::MoodRecord;
use crate::ui::app::{App, Tab};
use crate::ui::{hex_color, ACCENT, MUTED};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info};

const CARDS_PER_ROW: usize = 4;

impl App {
    pub(super) fn render_today(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // greeting
                Constraint::Length(4), // RealTalk
                Constraint::Length(2), // question
                Constraint::Length(8), // mood cards (2 rows)
                Constraint::Length(3), // intensity
                Constraint::Min(4),    // reminder + keys
            ])
            .split(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Hello, {}!", first_name(&self.settings.display_name)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.today.format("%A, %B %-d, %Y").to_string(),
                Style::default().fg(MUTED),
            )),
        ]);
        f.render_widget(greeting, chunks[0]);

        let state = &self.today_state;
        let switch = if state.real_talk { "[ON ]" } else { "[OFF]" };
        let mut real_talk = vec![Line::from(vec![
            Span::styled("RealTalk Mode ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(switch, Style::default().fg(if state.real_talk { ACCENT } else { MUTED })),
        ])];
        if state.real_talk {
            real_talk.push(Line::from(Span::styled(
                "Safe space activated. Express your true feelings without judgment. 💙",
                Style::default().fg(ACCENT),
            )));
        }
        f.render_widget(
            Paragraph::new(real_talk).block(Block::default().borders(Borders::TOP)),
            chunks[1],
        );

        let question = Paragraph::new(vec![
            Line::from(Span::styled(
                "How are you feeling right now?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Choose what resonates with you",
                Style::default().fg(MUTED),
            )),
        ]);
        f.render_widget(question, chunks[2]);

        self.render_mood_cards(f, chunks[3]);

        if let Some(chosen) = state.chosen {
            let color = hex_color(PICKER_MOODS[chosen].color);
            let mut spans = vec![Span::styled("Mild ", Style::default().fg(MUTED))];
            for level in MIN_INTENSITY..=MAX_INTENSITY {
                let dot = if state.intensity >= level { "● " } else { "○ " };
                spans.push(Span::styled(dot, Style::default().fg(color)));
            }
            spans.push(Span::styled("Intense", Style::default().fg(MUTED)));
            let intensity = Paragraph::new(vec![
                Line::from(Span::styled(
                    "How intense is this feeling?",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(spans),
            ]);
            f.render_widget(intensity, chunks[4]);
        }

        let reminder = Paragraph::new(vec![
            Line::from(Span::styled(
                "Today's Gentle Reminder",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "\"Your feelings are valid, and it's okay to feel whatever you're experiencing right now. You're doing better than you think. 💕\"",
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "←→↑↓=move  Space=choose  +/-=intensity  Enter=log mood  r=RealTalk  j=journal  n=quick note",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(reminder, chunks[5]);
    }

    fn render_mood_cards(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(4)])
            .split(area);

        for (row_idx, row_moods) in PICKER_MOODS.chunks(CARDS_PER_ROW).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
                .split(rows[row_idx]);
            for (col_idx, mood) in row_moods.iter().enumerate() {
                let i = row_idx * CARDS_PER_ROW + col_idx;
                let color = hex_color(mood.color);
                let is_chosen = self.today_state.chosen == Some(i);
                let is_cursor = self.today_state.cursor == i;

                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded);
                if is_cursor {
                    block = block
                        .border_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
                }
                let label_style = if is_chosen {
                    Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let card = Paragraph::new(vec![
                    Line::from(Span::styled(mood.icon, Style::default().fg(color))),
                    Line::from(Span::styled(mood.label, label_style)),
                ])
                .alignment(Alignment::Center)
                .block(block);
                f.render_widget(card, cols[col_idx]);
            }
        }
    }

    pub(super) fn handle_today_key(&mut self, code: KeyCode) {
        let last = PICKER_MOODS.len() - 1;
        let state = &mut self.today_state;
        match code {
            KeyCode::Left => state.cursor = state.cursor.saturating_sub(1),
            KeyCode::Right => state.cursor = (state.cursor + 1).min(last),
            KeyCode::Up => state.cursor = state.cursor.saturating_sub(CARDS_PER_ROW),
            KeyCode::Down => state.cursor = (state.cursor + CARDS_PER_ROW).min(last),
            KeyCode::Char(' ') => state.chosen = Some(state.cursor),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                state.intensity = (state.intensity + 1).min(MAX_INTENSITY);
            }
            KeyCode::Char('-') => {
                state.intensity = state.intensity.saturating_sub(1).max(MIN_INTENSITY);
            }
            KeyCode::Char('r') => state.real_talk = !state.real_talk,
            _ => self.handle_today_action(code),
        }
    }

    fn handle_today_action(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.log_today_mood(),
            KeyCode::Char('j') => self.switch_tab(Tab::Journal),
            KeyCode::Char('n') => {
                debug!("quick note pressed");
                self.set_status("Quick notes are coming soon.", MUTED);
            }
            _ => {}
        }
    }

    /// Records the chosen mood for today in the in-memory table so the
    /// calendar shows it for the rest of the session.
    fn log_today_mood(&mut self) {
        let Some(chosen) = self.today_state.chosen else {
            self.set_status("Choose a mood first (Space).", Color::Yellow);
            return;
        };
        let mood = PICKER_MOODS[chosen];
        let record = MoodRecord::new(
            &mood.label.to_lowercase(),
            self.today_state.intensity,
            calendar_color_for(mood.label),
        );
        let key = DateKey::from_date(self.today);
        info!(date = %key, mood = mood.label, intensity = record.intensity, "mood logged");
        self.moods.insert(key, record);
        self.set_status(
            format!("Logged {} ({}/5) for {}", mood.label, self.today_state.intensity, key),
            Color::Green,
        );
    }
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or("there")
}

#[cfg(test)]
mod tests {
    use crate::calc::DateKey;
    use crate::data::mood::PICKER_MOODS;
    use crate::ui::app::Tab;
    use crate::ui::app::tests::{d, make_test_app, press, screen_text};
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_moves_within_grid() {
        let mut app = make_test_app(d(2024, 3, 1));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.today_state.cursor, 5);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.today_state.cursor, 7);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.today_state.cursor, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.today_state.cursor, 0);
    }

    #[test]
    fn test_intensity_clamped_to_range() {
        let mut app = make_test_app(d(2024, 3, 1));
        assert_eq!(app.today_state.intensity, 3);
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.today_state.intensity, 5);
        for _ in 0..9 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.today_state.intensity, 1);
    }

    #[test]
    fn test_enter_without_choice_logs_nothing() {
        let mut app = make_test_app(d(2024, 3, 1));
        let before = app.moods.len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.moods.len(), before);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_enter_logs_chosen_mood_for_today() {
        let mut app = make_test_app(d(2024, 3, 1));
        press(&mut app, KeyCode::Right); // Excited
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Enter);
        let rec = app.moods.get(&DateKey::new(2024, 2, 1)).unwrap();
        assert_eq!(rec.mood, "excited");
        assert_eq!(rec.intensity, 4);
        assert_eq!(rec.color, "#98FB98");
    }

    #[test]
    fn test_r_toggles_real_talk() {
        let mut app = make_test_app(d(2024, 3, 1));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.today_state.real_talk);
        let text = screen_text(&mut app);
        assert!(text.contains("Safe space activated"));
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.today_state.real_talk);
    }

    #[test]
    fn test_j_opens_journal() {
        let mut app = make_test_app(d(2024, 3, 1));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.tab, Tab::Journal);
    }

    #[test]
    fn test_render_shows_moods_and_intensity_after_choice() {
        let mut app = make_test_app(d(2024, 3, 1));
        let text = screen_text(&mut app);
        assert!(text.contains("Hello, Sarah!"));
        assert!(text.contains("Friday, March 1, 2024"));
        assert!(text.contains("Surprised"));
        assert!(!text.contains("How intense"));
        press(&mut app, KeyCode::Char(' '));
        assert!(screen_text(&mut app).contains("How intense is this feeling?"));
    }

    #[test]
    fn test_cards_show_their_own_icon() {
        let mut app = make_test_app(d(2024, 3, 1));
        let text = screen_text(&mut app);
        for mood in PICKER_MOODS {
            assert!(text.contains(mood.icon), "missing icon for {}", mood.label);
        }
        assert!(!text.contains('♥'));
    }
}
