//! Request-level orchestration: resolve, format, dispatch

pub mod service;
