use crate::data::{
    persistence::get_data_dir, AppSettings, BadgeData, InsightsData, MoodTable, Persistable,
};
use crate::ui::app::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use tracing::info;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir()?;
    let settings = AppSettings::load()?;
    let moods = MoodTable::load()?;
    let insights = InsightsData::load()?;
    let badges = BadgeData::load()?;
    info!(moods = moods.len(), badges = badges.total(), "data loaded");

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(settings, moods, insights, badges, today, data_dir.clone());

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // Profile switches are the only state that outlives the session.
    app.settings.save_to(&data_dir)?;
    info!("session ended");

    result
}
