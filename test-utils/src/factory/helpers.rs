use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-unique id for factory defaults.
///
/// Keeps generated logins, emails, and tag names unique across all factories
/// in a test process so unique constraints never collide.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
