//! Sorting runs: spawning, pacing, and cancellation.
//!
//! A run executes one engine as a tokio task. Steps are paced by
//! [`emitter::PacedEmitter`] and delivered over the application event channel,
//! so the UI sees them strictly in order. Cancellation is by generation: the
//! [`controller::RunController`] bumps a shared counter and anything tagged
//! with an older generation is dropped.

pub mod controller;
pub mod emitter;
