pub mod analytics_use_cases;
pub mod ports;
pub mod services;
