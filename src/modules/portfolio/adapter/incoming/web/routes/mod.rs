pub mod create_portfolio;
pub mod delete_portfolio;
pub mod get_portfolio;
pub mod list_portfolios;
pub mod update_portfolio;
