pub mod featured_projects;
pub mod portfolio_blocks;
pub mod portfolios;
