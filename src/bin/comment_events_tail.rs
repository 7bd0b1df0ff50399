// src/bin/comment_events_tail.rs
//! Follows the comment change stream and logs every event until Ctrl-C.
//!
//! `EVENTS_REDIS_URL` selects the broker. `EVENTS_TAIL_FROM` is the start
//! position: `$` (default) for new events only, `0` to replay the stream.

use anyhow::{Context, Result};
use commentary_core::{
    domain::comment::COMMENT_CHANGED_TOPIC, infrastructure::messaging::RedisStreamReader,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BLOCK: Duration = Duration::from_secs(5);
const BATCH: usize = 100;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let url = std::env::var("EVENTS_REDIS_URL").context("EVENTS_REDIS_URL must be set")?;
    let start = std::env::var("EVENTS_TAIL_FROM").unwrap_or_else(|_| "$".to_string());
    let mut reader = RedisStreamReader::new(&url, COMMENT_CHANGED_TOPIC, start)?;
    tracing::info!(topic = reader.topic(), "tailing change events");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stopping");
                return Ok(());
            }
            batch = reader.next_batch(BLOCK, BATCH) => match batch {
                Ok(records) => {
                    for record in records {
                        tracing::info!(
                            entry_id = %record.entry_id,
                            key = record.key.as_deref().unwrap_or(""),
                            action = record.payload["action"].as_str().unwrap_or("?"),
                            payload = %record.payload,
                            "change event"
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "read failed; retrying");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }
}
