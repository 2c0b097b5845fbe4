//! Boundary adapter for skybot.
//!
//! A match server drives a bot with four calls (`hello`, `prepare`,
//! `start`, `tick`), each one document in and one document out. This crate
//! turns those documents into typed records, calls the [`Bot`], and encodes
//! its answer:
//!
//! - **[`Bot`]**: the trait a bot author implements.
//! - **[`BotAdapter`]**: owns the bot and handles the calls.
//! - **[`Call`]**: names the four calls for transports.
//! - **[`AdapterConfig`]**: version pin and document size limit.
//! - **[`BoundaryError`]**: why a call was refused, with a status code.
//!
//! The adapter has no polymorphism logic of its own; every variant-typed
//! position is decoded by the protocol codec.

mod adapter;
mod bot;
mod call;
mod config;
mod error;

pub use adapter::BotAdapter;
pub use bot::Bot;
pub use call::{Call, UnknownCall};
pub use config::AdapterConfig;
pub use error::BoundaryError;
