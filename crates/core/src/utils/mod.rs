pub mod time_utils;

pub use time_utils::{days_between, deserialize_api_timestamp, parse_api_timestamp};
