pub mod get_stats;
pub mod record_event;

pub use get_stats::{
    DailyViewCount, DeviceCount, GetStatsError, GetStatsUseCase, RecentEvent, RecentView,
    ReferrerCount, StatsSnapshot,
};
pub use record_event::{
    RecordEventError, RecordEventInput, RecordEventUseCase, RequestMeta,
};
