//! Hierarchical entity names and time-derived galaxy names.

use std::sync::atomic::{AtomicU64, Ordering};

/// Last stamp handed out in this process.
static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

pub fn system_name(system: usize) -> String {
    format!("s{system}")
}

pub fn planet_name(system: usize, planet: usize) -> String {
    format!("s{system}-p{planet}")
}

pub fn moon_name(system: usize, planet: usize, moon: usize) -> String {
    format!("s{system}-p{planet}-m{moon}")
}

/// `g{millis}`, where the stamp is bumped past the previous one if the clock
/// has not advanced, so names never repeat within a process.
pub fn galaxy_name(now_millis: u64) -> String {
    let next = |last: u64| now_millis.max(last.saturating_add(1));
    let prev = LAST_STAMP
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        .unwrap_or_else(|last| last);
    format!("g{}", next(prev))
}

/// Wall-clock milliseconds since the Unix epoch. `SystemTime` panics on
/// wasm32-unknown-unknown, so this only exists off wasm; the web bridge passes
/// `Date.now()` instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
