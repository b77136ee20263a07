//! External service integrations

pub mod nusacontact;
