pub mod portfolio_events;
pub mod portfolio_stats;
pub mod portfolio_views;
