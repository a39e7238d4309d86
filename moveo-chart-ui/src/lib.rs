//! Shared Dioxus components for the Moveo dashboard apps.
//!
//! This crate provides:
//! - `state`: reactive `DashboardState` with Dioxus Signals
//! - `dom`: container geometry via `web-sys`, used to place bar tooltips
//! - `theme`: inline styles shared by every component
//! - `components`: chart primitives, selectors, table and cards
//! - `sections`: the four report sections composed from the components

pub mod components;
pub mod dom;
pub mod sections;
pub mod state;
pub mod theme;
