//! Air-quality data feeds and the shared session context

mod generate;
mod session;
mod source;

pub use generate::{
    generate_forecast, generate_history, generate_snapshot, FORECAST_HOURS, FORECAST_ICON,
    HISTORY_DAYS,
};
pub use session::Session;
pub use source::{FeedSource, SyntheticFeed};
