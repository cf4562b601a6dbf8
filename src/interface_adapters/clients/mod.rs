// Clients for external services the tracks server depends on.

pub mod spotify;

pub use spotify::{SpotifyClient, SpotifyCredentials};
