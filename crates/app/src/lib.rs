//! # barbos-app
//!
//! Application layer: command handling and the **transport port** (trait).
//!
//! ## Responsibilities
//! - Define the **port trait** the transport adapters implement:
//!   - `Transport`: byte-at-a-time reads, buffered writes
//! - Parse each line once into a tagged [`command::Command`]
//! - Own all device state in one [`registry::Registry`] and track the last
//!   device a command was routed to
//! - Dispatch commands and render responses ([`console::Console`])
//! - Run the prompt → read → dispatch → reply loop ([`session`])
//!
//! ## Dependency rule
//! Depends on `barbos-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod console;
pub mod line_reader;
pub mod ports;
pub mod registry;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
