// `std::time::Instant` panics on wasm32, where only `ManualClock` is offered.
cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        mod native;
        pub use native::system_clock::SystemClock;
    }
}
