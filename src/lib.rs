//! mystic4d - deterministic 4-digit numerals
//!
//! A date, a time, a handful of calendar labels and optional third-party
//! text are canonicalized, hashed and turned into a seeded stream that draws
//! four digits from a weighted distribution. Same inputs, same numeral.
//!
//! - `engine`: the pure derivation
//! - `facts`: digital roots, zodiac, shio and hour weights
//! - `signals`: concurrent third-party text gathering
//! - `generator`: clock + signals + engine + history
//! - `http_server`, `cli`: service surfaces

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod facts;
pub mod generator;
pub mod history;
pub mod http_server;
pub mod observability;
pub mod signals;
