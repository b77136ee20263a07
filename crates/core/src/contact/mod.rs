//! Contact resolution and formatting

pub mod formatter;
pub mod ports;
pub mod resolver;
