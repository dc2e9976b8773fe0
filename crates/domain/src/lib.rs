//! # barbos-domain
//!
//! Pure domain model for the barbOS appliance console.
//!
//! ## Responsibilities
//! - Foundational helpers: the field [`tokenizer`], lenient integer parsing,
//!   and the typed error taxonomy
//! - Define the **schedule** enums (time of day, day of week) and their
//!   name resolvers
//! - Define the three device models: [`thermostat`], [`alarm`] (with its
//!   fixed-capacity [`test_buffer`]) and [`speaker`]
//! - Contain all invariant enforcement and validation ordering
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! The transport boundary is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod numeric;
pub mod tokenizer;

pub mod alarm;
pub mod device;
pub mod schedule;
pub mod speaker;
pub mod test_buffer;
pub mod thermostat;
