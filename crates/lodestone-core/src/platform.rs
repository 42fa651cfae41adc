//! Platform timer shim.
//!
//! Debounce windows need a sleep primitive on both targets: in the
//! browser there is no tokio runtime, and on native there is no event
//! loop for gloo's timers. Everything above this module awaits
//! [`sleep_ms`] and stays target-agnostic.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_the_requested_duration() {
        let before = tokio::time::Instant::now();
        sleep_ms(250).await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(250));
    }
}
