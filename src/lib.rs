//! # Lifeweb
//!
//! Application layer of the Game of Life service: configuration, logging and
//! startup around [`lifeweb_core`] and [`lifeweb_server`].

pub mod app;
pub mod config;
pub mod logging;
