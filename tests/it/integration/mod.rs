//! Integration tests for Stageboard.
//!
//! These tests drive the canvas with raw pointer events, the way a host
//! would, and check complete gestures end-to-end.

mod event_flow_tests;
mod gesture_tests;
mod group_tests;
