// Framework bootstrap: configuration and the HTTP server runtime.

pub mod config;
pub mod server;
