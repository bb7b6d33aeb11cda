pub mod fuel_mix_chart;
pub mod fuel_mix_view;
pub mod historical_view;
pub mod interconnectors_view;
pub mod kpi_card;
pub mod market_overview;
pub mod price_demand_chart;
pub mod price_demand_view;
pub mod region_selector;
pub mod renewables_view;
pub mod status;
pub mod theme_provider;
pub mod theme_toggle;

pub use fuel_mix_view::FuelMixView;
pub use historical_view::HistoricalView;
pub use interconnectors_view::InterconnectorsView;
pub use market_overview::MarketOverview;
pub use price_demand_view::PriceDemandView;
pub use renewables_view::RenewablesView;
pub use theme_provider::ThemeProvider;
pub use theme_toggle::ThemeToggle;
