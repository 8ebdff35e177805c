use crate::calc::{CalendarMonth, DateKey};
use crate::data::{
    AppSettings, BadgeData, InsightsData, JournalDraft, JournalEntry, MoodTable, Period,
};
use crate::data::mood::DEFAULT_INTENSITY;
use crate::ui::{ACCENT, MUTED};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration as StdDuration;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Today,
    Journal,
    Calendar,
    Insights,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Today,
        Tab::Journal,
        Tab::Calendar,
        Tab::Insights,
        Tab::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Today => "Today",
            Tab::Journal => "Journal",
            Tab::Calendar => "Calendar",
            Tab::Insights => "Insights",
            Tab::Profile => "Profile",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn offset(self, delta: isize) -> Tab {
        let len = Tab::ALL.len() as isize;
        let i = (self.index() as isize + delta).rem_euclid(len);
        Tab::ALL[i as usize]
    }
}

/// Mood picker state on the Today tab.
#[derive(Debug, Default)]
pub(crate) struct TodayState {
    /// Card under the cursor, index into `PICKER_MOODS`.
    pub(crate) cursor: usize,
    /// Card the user chose with Space.
    pub(crate) chosen: Option<usize>,
    pub(crate) intensity: u8,
    pub(crate) real_talk: bool,
}

/// The two pieces of calendar state: which month is shown and which date is
/// selected. `cursor` is the day under the keyboard cursor in `view`.
#[derive(Debug)]
pub(crate) struct CalendarState {
    pub(crate) view: CalendarMonth,
    pub(crate) cursor: u32,
    pub(crate) selected: Option<DateKey>,
}

impl CalendarState {
    fn new(today: NaiveDate) -> Self {
        CalendarState {
            view: CalendarMonth::containing(&today),
            cursor: today.day(),
            selected: None,
        }
    }

    /// Moves the shown month; the cursor day is clamped into it.
    pub(crate) fn navigate(&mut self, delta: i32) {
        self.view = self.view.navigate(delta);
        self.cursor = self.cursor.min(self.view.days());
        debug!(month = %self.view.title(), "calendar navigated");
    }

    /// Moves the cursor by `days`, crossing into neighbouring months.
    pub(crate) fn move_cursor(&mut self, days: i32) {
        let mut day = self.cursor as i32 + days;
        while day < 1 {
            self.view = self.view.navigate(-1);
            day += self.view.days() as i32;
        }
        while day > self.view.days() as i32 {
            day -= self.view.days() as i32;
            self.view = self.view.navigate(1);
        }
        self.cursor = day as u32;
    }

    pub(crate) fn select_cursor(&mut self) {
        self.selected = Some(self.view.date_key(self.cursor));
    }

    pub(crate) fn jump_to(&mut self, date: NaiveDate) {
        self.view = CalendarMonth::containing(&date);
        self.cursor = date.day();
    }
}

pub struct App {
    pub settings: AppSettings,
    pub(crate) moods: MoodTable,
    pub(crate) insights: InsightsData,
    pub(crate) badges: BadgeData,
    pub(crate) today: NaiveDate,
    pub(crate) tab: Tab,
    pub(crate) today_state: TodayState,
    pub(crate) journal: JournalDraft,
    /// True while keystrokes go into the journal text.
    pub(crate) journal_editing: bool,
    pub(crate) prompt_cursor: usize,
    /// Message in the support panel, picked when the draft gets long enough.
    pub(crate) encouragement: Option<&'static str>,
    /// Entries saved during this session; never written to disk.
    pub(crate) entries: Vec<JournalEntry>,
    pub(crate) calendar: CalendarState,
    pub(crate) period: Period,
    pub(crate) profile_cursor: usize,
    /// Transient message (text, color). Cleared on the next keypress.
    pub(crate) status: Option<(String, Color)>,
    pub(crate) rng: StdRng,
    data_dir: PathBuf,
}

impl App {
    pub fn new(
        settings: AppSettings,
        moods: MoodTable,
        insights: InsightsData,
        badges: BadgeData,
        today: NaiveDate,
        data_dir: PathBuf,
    ) -> Self {
        App {
            settings,
            moods,
            insights,
            badges,
            today,
            tab: Tab::default(),
            today_state: TodayState {
                intensity: DEFAULT_INTENSITY,
                ..TodayState::default()
            },
            journal: JournalDraft::default(),
            journal_editing: false,
            prompt_cursor: 0,
            encouragement: None,
            entries: Vec::new(),
            calendar: CalendarState::new(today),
            period: Period::default(),
            profile_cursor: 0,
            status: None,
            rng: StdRng::from_os_rng(),
            data_dir,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>, color: Color) {
        self.status = Some((msg.into(), color));
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        self.status = None;

        // Text entry swallows every other key.
        if self.journal_editing {
            self.handle_journal_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.switch_tab(self.tab.offset(1));
                return false;
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.offset(-1));
                return false;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let i = c as usize - '1' as usize;
                self.switch_tab(Tab::ALL[i]);
                return false;
            }
            _ => {}
        }

        match self.tab {
            Tab::Today => self.handle_today_key(code),
            Tab::Journal => self.handle_journal_key(code),
            Tab::Calendar => self.handle_calendar_key(code),
            Tab::Insights => self.handle_insights_key(code),
            Tab::Profile => self.handle_profile_key(code),
        }
        false
    }

    pub(crate) fn switch_tab(&mut self, tab: Tab) {
        debug!(from = self.tab.title(), to = tab.title(), "switch tab");
        self.tab = tab;
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // tab bar
                Constraint::Min(10),   // active tab
                Constraint::Length(1), // status
                Constraint::Length(1), // key hints
            ])
            .split(f.area());

        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .block(Block::default().borders(Borders::ALL).title(" moodcal "))
            .style(Style::default().fg(MUTED))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[0]);

        match self.tab {
            Tab::Today => self.render_today(f, chunks[1]),
            Tab::Journal => self.render_journal(f, chunks[1]),
            Tab::Calendar => self.render_calendar(f, chunks[1]),
            Tab::Insights => self.render_insights(f, chunks[1]),
            Tab::Profile => self.render_profile(f, chunks[1]),
        }

        if let Some((msg, color)) = &self.status {
            let status = Paragraph::new(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )));
            f.render_widget(status, chunks[2]);
        }

        let hints = if self.journal_editing {
            "Type to write  Enter=new line  Esc=done"
        } else {
            "1-5/Tab=switch tab  q=quit"
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
            Span::styled("   Data  ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                self.data_dir.to_string_lossy().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        f.render_widget(footer, chunks[3]);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
