//! Topic-tabbed slide presentation viewer.
//!
//! [`deck`] holds the fixed slide registry and [`nav`] the navigation state
//! machine over it. Everything else is the egui viewer and CLI around them.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deck;
pub mod error;
pub mod input;
pub mod logging;
pub mod nav;
pub mod render;
pub mod theme;
pub mod view;
