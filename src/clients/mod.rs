pub mod daily_client;
pub mod historical_client;
pub mod hourly_client;
pub mod minutely_client;
