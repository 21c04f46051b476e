//! Live product search for the catalog
//!
//! A debounced search box that queries the catalog's suggestion endpoint and
//! shows matching products in a dropdown panel. The widget state machine in
//! [`search`] is host-agnostic; [`app`] hosts it in a terminal UI and
//! [`search::markup`] renders the panel as HTML.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod service;
pub mod widgets;
