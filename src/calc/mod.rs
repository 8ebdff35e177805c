pub mod date_key;
pub mod month_grid;
pub mod month_summary;

pub use date_key::DateKey;
pub use month_grid::{format_date_key, is_today, CalendarMonth, DayCell};
pub use month_summary::month_summary;
