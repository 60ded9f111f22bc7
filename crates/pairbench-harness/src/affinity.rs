//! Pinning the benchmark thread to one CPU core.
//!
//! Keeps the scheduler from migrating the measuring thread between cores in
//! the middle of a sweep.

use tracing::{debug, warn};

/// Core ids available to this process, in platform order.
#[must_use]
pub fn available_cores() -> Vec<usize> {
    core_affinity::get_core_ids()
        .map(|ids| ids.into_iter().map(|core| core.id).collect())
        .unwrap_or_default()
}

/// Pin the current thread.
///
/// `Some(id)` pins to that core, `None` to the last available core (core 0
/// tends to service interrupts). Returns the core actually pinned to, or
/// `None` when the platform refuses or the id is unknown; the run then
/// continues unpinned.
pub fn pin_current_thread(preferred: Option<usize>) -> Option<usize> {
    let cores = core_affinity::get_core_ids().unwrap_or_default();
    let chosen = match preferred {
        Some(id) => cores.into_iter().find(|core| core.id == id),
        None => cores.into_iter().last(),
    };
    let Some(core) = chosen else {
        warn!(?preferred, "requested core not available, running unpinned");
        return None;
    };
    if core_affinity::set_for_current(core) {
        debug!(core = core.id, "pinned benchmark thread");
        Some(core.id)
    } else {
        warn!(core = core.id, "could not pin benchmark thread");
        None
    }
}
