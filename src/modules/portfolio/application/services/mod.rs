pub mod create_portfolio_service;
pub mod delete_portfolio_service;
pub mod get_portfolio_service;
pub mod list_portfolios_service;
pub mod update_portfolio_service;
