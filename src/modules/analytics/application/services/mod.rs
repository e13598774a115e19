pub mod get_stats_service;
pub mod record_event_service;
