//! Server-rendered form for a remote URL shortening service.

pub mod api_client;
pub mod controller;
pub mod routes;
pub mod settings;
pub mod state;
#[cfg(test)]
mod test_support;
