// tests/support/mocks/ids.rs
use commentary_core::application::ports::ids::CommentIdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues `c-0001`, `c-0002`, ... so ids sort the same way they were issued.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl CommentIdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("c-{n:04}")
    }
}
