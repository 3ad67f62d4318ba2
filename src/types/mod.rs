pub mod endpoint;
pub mod granularity;
pub mod settings;
pub mod variables;
pub mod weather_code;
