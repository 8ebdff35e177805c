use crate::data::journal::{pick_encouragement, PROMPTS};
use crate::data::Visibility;
use crate::ui::app::App;
use crate::ui::{ACCENT, MUTED};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, warn};

/// Drafts longer than this many characters get a support message.
const SUPPORT_THRESHOLD: usize = 50;

impl App {
    pub(super) fn render_journal(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(4), // visibility + anonymous
                Constraint::Length(PROMPTS.len() as u16 + 2), // prompts
                Constraint::Min(6),    // text
                Constraint::Length(if self.encouragement.is_some() { 4 } else { 0 }),
                Constraint::Length(2), // keys
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Express Yourself",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Your safe space to share and reflect",
                    Style::default().fg(MUTED),
                )),
            ]),
            chunks[0],
        );

        let mut options = vec![Span::raw("Who can see this?  ")];
        for v in Visibility::ALL {
            let style = if v == self.journal.visibility {
                Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            options.push(Span::styled(format!(" {} ", v.label()), style));
            options.push(Span::raw(" "));
        }
        let anon = if self.journal.anonymous { "[x]" } else { "[ ]" };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(options),
                Line::from(format!("{anon} Post Anonymously")),
            ])
            .block(Block::default().borders(Borders::TOP)),
            chunks[1],
        );

        let prompts: Vec<Line> = PROMPTS
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let prefix = if i == self.prompt_cursor { "> " } else { "  " };
                let style = if self.journal.selected_prompt == Some(i) {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{prefix}{p}"), style))
            })
            .collect();
        f.render_widget(
            Paragraph::new(prompts)
                .block(Block::default().borders(Borders::ALL).title(" Need inspiration? ")),
            chunks[2],
        );

        let mic = if self.journal.recording { "  ● recording" } else { "" };
        let title = format!(" Your thoughts{mic} ");
        let mut body = self.journal.text.clone();
        if self.journal_editing {
            body.push('_');
        } else if body.is_empty() {
            body = "Start writing... (e to edit)".to_string();
        }
        let border = if self.journal_editing {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        f.render_widget(
            Paragraph::new(body)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).border_style(border).title(title)),
            chunks[3],
        );

        if let Some(message) = self.encouragement {
            f.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(ACCENT)))
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title(" ✨ Gentle Support ")),
                chunks[4],
            );
        }

        let count = self.entries.len();
        let saved = format!(
            "{count} entr{} saved this session",
            if count == 1 { "y" } else { "ies" }
        );
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(saved, Style::default().fg(MUTED))),
                Line::from(Span::styled(
                    "e=edit  s=save  v=visibility  a=anonymous  m=record  ↑↓=prompt  p=use prompt",
                    Style::default().fg(Color::DarkGray),
                )),
            ]),
            chunks[5],
        );
    }

    pub(super) fn handle_journal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('e') | KeyCode::Char('i') => self.journal_editing = true,
            KeyCode::Char('v') => self.journal.visibility = self.journal.visibility.next(),
            KeyCode::Char('a') => self.journal.anonymous = !self.journal.anonymous,
            KeyCode::Char('m') => {
                // Recording is a placeholder; the toggle only changes the indicator.
                self.journal.recording = !self.journal.recording;
                debug!(recording = self.journal.recording, "record toggled");
            }
            KeyCode::Up | KeyCode::Left => {
                self.prompt_cursor = self.prompt_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right => {
                self.prompt_cursor = (self.prompt_cursor + 1).min(PROMPTS.len() - 1);
            }
            KeyCode::Char('p') => {
                self.journal.apply_prompt(self.prompt_cursor);
                self.refresh_encouragement();
            }
            KeyCode::Char('s') => self.save_journal(),
            _ => {}
        }
    }

    pub(super) fn handle_journal_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.journal_editing = false,
            KeyCode::Enter => self.journal.text.push('\n'),
            KeyCode::Backspace => {
                self.journal.text.pop();
            }
            KeyCode::Char(c) => self.journal.text.push(c),
            _ => {}
        }
        self.refresh_encouragement();
    }

    /// Shows a support message while the draft is long, keeping the same
    /// message until the draft drops back under the threshold.
    fn refresh_encouragement(&mut self) {
        if self.journal.text.chars().count() <= SUPPORT_THRESHOLD {
            self.encouragement = None;
        } else if self.encouragement.is_none() {
            self.encouragement = Some(pick_encouragement(&mut self.rng));
        }
    }

    fn save_journal(&mut self) {
        match self.journal.save(self.today) {
            Ok(entry) => {
                info!(
                    chars = entry.text.chars().count(),
                    visibility = entry.visibility.label(),
                    anonymous = entry.anonymous,
                    "journal entry saved"
                );
                self.entries.push(entry);
                self.refresh_encouragement();
                self.set_status(
                    "Saved! Your journal entry has been saved successfully.",
                    Color::Green,
                );
            }
            Err(e) => {
                warn!("journal save rejected: {e}");
                self.set_status(e.to_string(), Color::Yellow);
            }
        }
    }
}
