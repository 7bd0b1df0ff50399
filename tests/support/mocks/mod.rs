// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod events;
pub mod ids;
pub mod repos;
pub mod time;

pub use events::{FailingPublisher, RecordingPublisher};
pub use ids::SequentialIds;
pub use repos::{FailingCommentRepo, InMemoryUserRepo};
pub use time::{FixedClock, SteppingClock, fixed_now};
