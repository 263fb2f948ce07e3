//! Read-only client for the League of Legends Data Dragon CDN.
//!
//! The entry point is [`Client`], which pins a game version and language at
//! construction time and exposes one accessor per resource family: champions,
//! items, summoner spells, skins, and the version list itself. Payloads are
//! passed through as JSON values; the layer imposes no schema beyond the keys
//! it reads.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;

pub use client::Client;
pub use config::Config;
pub use error::AppError;
pub use resources::ChampionSkin;
