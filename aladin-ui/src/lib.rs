//! Shared Dioxus components and browser bridge for the ALADIN viewer.
//!
//! This crate provides:
//! - `web_bridge`: image probing, local storage, timers and DOM geometry via `web-sys`
//! - `state`: reactive `ViewerState` with Dioxus Signals and the navigation handlers
//! - `components`: RSX components (header, arrows, overlays, toolbar, notices)

pub mod components;
pub mod state;
pub mod web_bridge;
