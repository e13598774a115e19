pub mod create_portfolio;
pub mod delete_portfolio;
pub mod get_portfolio;
pub mod list_portfolios;
pub mod update_portfolio;

pub use create_portfolio::{
    CreatePortfolioError, CreatePortfolioInput, CreatePortfolioOutcome, CreatePortfolioUseCase,
    NewBlockInput, NewProjectInput, SkippedChild,
};
pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use list_portfolios::{ListPortfoliosError, ListPortfoliosUseCase};
pub use update_portfolio::{
    UpdatePortfolioError, UpdatePortfolioInput, UpdatePortfolioOutcome, UpdatePortfolioUseCase,
};
