//! OS thread identifiers

thread_local! {
    static OS_THREAD_ID: u64 = fetch_os_thread_id();
}

/// Identifier of the calling thread as the operating system reports it.
///
/// The value is fetched once per thread and cached.
pub fn current_thread_id() -> u64 {
    OS_THREAD_ID.with(|id| *id)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn fetch_os_thread_id() -> u64 {
    // SAFETY: gettid takes no arguments and cannot fail.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    tid as u64
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn fetch_os_thread_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    // No portable tid here; hand out process-unique sequential ids instead.
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
