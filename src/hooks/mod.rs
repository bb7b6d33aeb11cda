pub mod use_market_data;
pub mod use_query;
pub mod use_theme;

pub use use_query::{QueryState, use_query};
pub use use_theme::{ThemeHandle, use_theme};
