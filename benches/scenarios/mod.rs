//! Scenario benchmarks.
//!
//! Preset chains exactly as the bank renders them, plus the whole bank.

mod bank;

pub use bank::bench_bank;
