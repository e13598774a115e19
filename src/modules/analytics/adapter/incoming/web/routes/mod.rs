pub mod portfolio_stats;
pub mod track;
