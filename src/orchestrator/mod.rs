//! Search Orchestrator Module
//!
//! The state machine tying the pipeline together: it accepts search
//! commands, drives the asynchronous catalog fetch, runs the local
//! normalize→filter→sort transformation, and publishes the refined results
//! as observable state.
//!
//! ## Overview
//! Each `search` invocation is an independent cycle moving through
//! `Idle → Fetching → Publishing → Idle`. A failure anywhere in the cycle
//! returns to `Idle` with the published results reset to empty; failure
//! detail goes to the log, never to observers. Overlapping cycles are
//! permitted: completions carry the sequence number they were issued with,
//! and a completion older than the newest publish is discarded.
//!
//! ## Submodules
//! - **`service`**: The orchestrator itself.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Search commands, cycle phases, and the published snapshot.

pub mod handlers;
pub mod service;
pub mod types;
