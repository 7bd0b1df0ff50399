// src/infrastructure/messaging/mod.rs
mod log_publisher;
mod redis_stream;

pub use log_publisher::LogEventPublisher;
pub use redis_stream::{
    RedisStreamPublisher, RedisStreamReader, RedisStreamSettings, StreamError, StreamRecord,
};
