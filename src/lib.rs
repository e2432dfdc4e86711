//! Risk Profiler - Investor risk-profiling engine
//!
//! Converts a fixed questionnaire's answers into a deterministic risk
//! classification and a recommended portfolio allocation. The engine is
//! a pure computation library: synchronous, stateless, and free of I/O.
//! Downstream services persist and render the result; they never
//! recompute it.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
