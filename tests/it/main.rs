//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead to a single link step.
//!
//! Structure:
//! - helpers: Canvas builder and pointer dispatch shortcuts
//! - integration: Full pointer gestures through the canvas
//! - unit: Single-component unit tests

mod helpers;
mod integration;
