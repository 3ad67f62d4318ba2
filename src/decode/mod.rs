pub mod error;
pub mod response;
pub mod time_axis;
pub mod variables_block;
