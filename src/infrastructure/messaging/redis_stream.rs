// src/infrastructure/messaging/redis_stream.rs
//! Change-event channel on Redis Streams.
//!
//! Each topic is a stream. A message is one `XADD` entry with two fields:
//! `key` (the comment id) and `payload` (the JSON event). The stream is
//! trimmed approximately to `max_len` entries on every append.

use crate::application::ports::events::{EventPublisher, PublishOutcome};
use crate::domain::comment::CommentChangedEvent;
use async_trait::async_trait;
use redis::AsyncConnectionConfig;
use redis::aio::MultiplexedConnection;
use redis::streams::{StreamRangeReply, StreamReadReply};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_STREAM_MAX_LEN: usize = 10_000;

// Extra time a blocking read may take beyond its BLOCK argument before the
// connection is considered dead.
const READ_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct RedisStreamSettings {
    pub url: String,
    pub publish_timeout: Duration,
    pub max_len: usize,
}

impl RedisStreamSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            publish_timeout: DEFAULT_PUBLISH_TIMEOUT,
            max_len: DEFAULT_STREAM_MAX_LEN,
        }
    }
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("redis command error: {0}")]
    Command(#[from] redis::RedisError),
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

/// One multiplexed connection shared by every caller, opened on first use
/// and reopened after a failed command.
struct SharedConnection {
    client: redis::Client,
    config: AsyncConnectionConfig,
    response_timeout: Option<Duration>,
    cached: Mutex<Option<MultiplexedConnection>>,
}

impl SharedConnection {
    fn open(url: &str, response_timeout: Option<Duration>) -> Result<Self, StreamError> {
        let client = redis::Client::open(url)?;
        let config = AsyncConnectionConfig::new().set_response_timeout(response_timeout);
        Ok(Self {
            client,
            config,
            response_timeout,
            cached: Mutex::new(None),
        })
    }

    async fn get(&self) -> Result<MultiplexedConnection, StreamError> {
        if let Some(conn) = self.cached.lock().ok().and_then(|guard| guard.clone()) {
            return Ok(conn);
        }

        let conn = self
            .client
            .get_multiplexed_async_connection_with_config(&self.config)
            .await?;
        if let Ok(mut guard) = self.cached.lock() {
            *guard = Some(conn.clone());
        }
        Ok(conn)
    }

    fn reset(&self) {
        if let Ok(mut guard) = self.cached.lock() {
            *guard = None;
        }
    }
}

/// Publishes change events with `XADD`. Every request shares one
/// multiplexed connection whose response timeout is the publish timeout.
pub struct RedisStreamPublisher {
    conn: SharedConnection,
    publish_timeout: Duration,
    max_len: usize,
}

impl RedisStreamPublisher {
    /// Parse the URL only. No connection is opened until the first publish,
    /// so an unreachable broker does not prevent startup.
    pub fn new(settings: &RedisStreamSettings) -> Result<Self, StreamError> {
        Ok(Self {
            conn: SharedConnection::open(&settings.url, Some(settings.publish_timeout))?,
            publish_timeout: settings.publish_timeout,
            max_len: settings.max_len,
        })
    }

    /// Per-command timeout applied by the underlying connection.
    pub fn response_timeout(&self) -> Option<Duration> {
        self.conn.response_timeout
    }

    async fn append(&self, topic: &str, key: &str, payload: &str) -> Result<String, StreamError> {
        let mut conn = self.conn.get().await?;

        let entry_id: String = redis::cmd("XADD")
            .arg(topic)
            .arg("MAXLEN")
            .arg("~")
            .arg(self.max_len)
            .arg("*")
            .arg("key")
            .arg(key)
            .arg("payload")
            .arg(payload)
            .query_async(&mut conn)
            .await?;

        Ok(entry_id)
    }
}

#[async_trait]
impl EventPublisher for RedisStreamPublisher {
    async fn publish(&self, topic: &str, key: &str, event: &CommentChangedEvent) -> PublishOutcome {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(topic, key, error = %err, "change event serialization failed");
                return PublishOutcome::dropped(format!("serialization failed: {err}"));
            }
        };
        let bytes = payload.len();

        tracing::debug!(topic, key, bytes, "producing change event");

        let result = tokio::time::timeout(self.publish_timeout, self.append(topic, key, &payload))
            .await
            .unwrap_or(Err(StreamError::Timeout(self.publish_timeout)));

        match result {
            Ok(entry_id) => {
                tracing::info!(topic, key, bytes, %entry_id, "change event delivered");
                PublishOutcome::Delivered { bytes }
            }
            Err(err) => {
                self.conn.reset();
                tracing::warn!(topic, key, bytes, error = %err, "change event delivery failed");
                PublishOutcome::dropped(err.to_string())
            }
        }
    }
}

/// One entry read back from a change-event stream.
#[derive(Debug, Clone)]
pub struct StreamRecord {
    pub entry_id: String,
    pub key: Option<String>,
    pub payload: serde_json::Value,
}

/// Tails a stream from a given position with blocking `XREAD`.
///
/// A `$` start position is pinned to the stream's current last entry on the
/// first read, so a failed read retried later resumes where it left off
/// instead of skipping what arrived in between.
pub struct RedisStreamReader {
    conn: SharedConnection,
    topic: String,
    last_id: String,
}

impl RedisStreamReader {
    /// `start_id` is `0` to replay the whole stream or `$` for new entries only.
    pub fn new(url: &str, topic: impl Into<String>, start_id: impl Into<String>) -> Result<Self, StreamError> {
        // Blocking reads outlive any fixed response timeout; `next_batch`
        // bounds each call instead.
        Ok(Self {
            conn: SharedConnection::open(url, None)?,
            topic: topic.into(),
            last_id: start_id.into(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Id after which the next read starts.
    pub fn position(&self) -> &str {
        &self.last_id
    }

    /// Wait up to `block` for new entries. An empty vector means the wait
    /// elapsed with nothing new.
    pub async fn next_batch(&mut self, block: Duration, count: usize) -> Result<Vec<StreamRecord>, StreamError> {
        let limit = block + READ_GRACE;
        let result = match tokio::time::timeout(limit, self.read(block, count)).await {
            Ok(result) => result,
            Err(_) => Err(StreamError::Timeout(limit)),
        };
        if result.is_err() {
            self.conn.reset();
        }
        result
    }

    async fn read(&mut self, block: Duration, count: usize) -> Result<Vec<StreamRecord>, StreamError> {
        let mut conn = self.conn.get().await?;

        if self.last_id == "$" {
            let tail: StreamRangeReply = redis::cmd("XREVRANGE")
                .arg(&self.topic)
                .arg("+")
                .arg("-")
                .arg("COUNT")
                .arg(1)
                .query_async(&mut conn)
                .await?;
            self.last_id = anchor_id(&tail);
            tracing::debug!(topic = %self.topic, position = %self.last_id, "pinned tail position");
        }

        let reply: Option<StreamReadReply> = redis::cmd("XREAD")
            .arg("COUNT")
            .arg(count)
            .arg("BLOCK")
            .arg(u64::try_from(block.as_millis()).unwrap_or(u64::MAX))
            .arg("STREAMS")
            .arg(&self.topic)
            .arg(&self.last_id)
            .query_async(&mut conn)
            .await?;

        Ok(reply.map(|r| self.absorb(r)).unwrap_or_default())
    }

    /// Turn a read reply into records and advance the position past them.
    fn absorb(&mut self, reply: StreamReadReply) -> Vec<StreamRecord> {
        let mut records = Vec::new();
        for stream in reply.keys {
            for entry in stream.ids {
                let key: Option<String> = entry.get("key");
                let raw: Option<String> = entry.get("payload");
                let payload = raw
                    .as_deref()
                    .map(|text| {
                        serde_json::from_str(text)
                            .unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
                    })
                    .unwrap_or(serde_json::Value::Null);

                self.last_id = entry.id.clone();
                records.push(StreamRecord {
                    entry_id: entry.id,
                    key,
                    payload,
                });
            }
        }
        records
    }
}

// Newest entry id of a stream, or `0-0` when it is empty or missing.
fn anchor_id(tail: &StreamRangeReply) -> String {
    tail.ids
        .first()
        .map(|entry| entry.id.clone())
        .unwrap_or_else(|| "0-0".to_string())
}
