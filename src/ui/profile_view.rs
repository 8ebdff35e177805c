use crate::ui::app::App;
use crate::ui::{ACCENT, MUTED};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{debug, info};

/// Rows of the profile menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProfileItem {
    RealTalkReminders,
    Notifications,
    PrivacySettings,
    NightMode,
    ThemeCustomization,
    HelpAndSupport,
    AppSettings,
    SignOut,
}

impl ProfileItem {
    pub(crate) const ALL: [ProfileItem; 8] = [
        ProfileItem::RealTalkReminders,
        ProfileItem::Notifications,
        ProfileItem::PrivacySettings,
        ProfileItem::NightMode,
        ProfileItem::ThemeCustomization,
        ProfileItem::HelpAndSupport,
        ProfileItem::AppSettings,
        ProfileItem::SignOut,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ProfileItem::RealTalkReminders => "Gentle reminders to be authentic",
            ProfileItem::Notifications => "Notifications",
            ProfileItem::PrivacySettings => "Privacy Settings",
            ProfileItem::NightMode => "Night Mode",
            ProfileItem::ThemeCustomization => "Theme Customization",
            ProfileItem::HelpAndSupport => "Help & Support",
            ProfileItem::AppSettings => "App Settings",
            ProfileItem::SignOut => "Sign Out",
        }
    }
}

impl App {
    /// Current value of a switch row, `None` for rows without a switch.
    fn switch_value(&self, item: ProfileItem) -> Option<bool> {
        match item {
            ProfileItem::RealTalkReminders => Some(self.settings.real_talk_reminders),
            ProfileItem::Notifications => Some(self.settings.notifications),
            ProfileItem::NightMode => Some(self.settings.night_mode),
            _ => None,
        }
    }

    pub(super) fn render_profile(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // name + stats
                Constraint::Length(self.badges.total() as u16 + 2),
                Constraint::Min(ProfileItem::ALL.len() as u16 + 2),
                Constraint::Length(1),
            ])
            .split(area);

        let (days, average) = self.profile_stats();
        let header = vec![
            Line::from(Span::styled(
                self.settings.display_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.settings.email.clone(), Style::default().fg(MUTED))),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{days}"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Days Tracked   "),
                Span::styled(
                    format!("{}", self.entries.len()),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Journal Entries   "),
                Span::styled(average, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                Span::raw(" Avg Mood"),
            ]),
        ];
        f.render_widget(Paragraph::new(header), chunks[0]);

        let rows: Vec<Row> = self
            .badges
            .badges
            .iter()
            .map(|b| {
                let style = if b.earned {
                    Style::default()
                } else {
                    Style::default().fg(MUTED).add_modifier(Modifier::DIM)
                };
                Row::new(vec![
                    Cell::from(b.icon().to_string()),
                    Cell::from(b.name.clone()),
                    Cell::from(b.description.clone()),
                ])
                .style(style)
            })
            .collect();
        let badges = Table::new(
            rows,
            [Constraint::Length(4), Constraint::Length(18), Constraint::Min(20)],
        )
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Courage Badges {}/{} ",
            self.badges.earned_count(),
            self.badges.total()
        )));
        f.render_widget(badges, chunks[1]);

        let menu: Vec<Line> = ProfileItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if i == self.profile_cursor { "> " } else { "  " };
                let trailing = match self.switch_value(*item) {
                    Some(true) => Span::styled("[ON ]", Style::default().fg(ACCENT)),
                    Some(false) => Span::styled("[OFF]", Style::default().fg(MUTED)),
                    None if *item == ProfileItem::SignOut => Span::raw(""),
                    None => Span::styled("›", Style::default().fg(MUTED)),
                };
                let label_style = match item {
                    ProfileItem::SignOut => Style::default().fg(Color::Red),
                    _ if i == self.profile_cursor => Style::default().add_modifier(Modifier::BOLD),
                    _ => Style::default(),
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(ACCENT)),
                    Span::styled(format!("{:<34}", item.label()), label_style),
                    trailing,
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(menu).block(Block::default().borders(Borders::ALL).title(" Settings ")),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(Span::styled(
                "↑↓=move  Space/Enter=toggle or open",
                Style::default().fg(Color::DarkGray),
            )),
            chunks[3],
        );
    }

    /// Days in the mood table and their average intensity.
    fn profile_stats(&self) -> (usize, String) {
        let days = self.moods.len();
        if days == 0 {
            return (0, "-".to_string());
        }
        let total: u32 = self.moods.moods.values().map(|r| r.intensity as u32).sum();
        (days, format!("{:.1}", total as f64 / days as f64))
    }

    pub(super) fn handle_profile_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.profile_cursor = self.profile_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.profile_cursor = (self.profile_cursor + 1).min(ProfileItem::ALL.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_profile_item(),
            _ => {}
        }
    }

    fn activate_profile_item(&mut self) {
        let item = ProfileItem::ALL[self.profile_cursor];
        let flag = match item {
            ProfileItem::RealTalkReminders => &mut self.settings.real_talk_reminders,
            ProfileItem::Notifications => &mut self.settings.notifications,
            ProfileItem::NightMode => &mut self.settings.night_mode,
            _ => {
                debug!(item = item.label(), "menu item opened");
                self.set_status(format!("{} is not available yet.", item.label()), MUTED);
                return;
            }
        };
        *flag = !*flag;
        let value = *flag;
        info!(setting = item.label(), value, "setting toggled");
    }
}
