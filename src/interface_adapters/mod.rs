// Interface adapters: HTTP protocol, handlers, and upstream clients.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
