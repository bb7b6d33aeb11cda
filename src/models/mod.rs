pub mod comparison;
pub mod error;
pub mod fuel;
pub mod generation;
pub mod historical;
pub mod market_pulse;
pub mod price_demand;
pub mod region;
pub mod summary;
pub mod theme;
