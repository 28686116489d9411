//! HTTP Handlers

pub mod drivers;
