//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types, immutable snapshots of one response
//! - `convert.rs`: Mapping from the `return` payload, field by field
//! - `client.rs`: Sub-client with one method per exchange operation
//!
//! `transaction` has no sub-client of its own; the ledger is read through
//! `account()`.

pub mod account;
pub mod market;
pub mod order;
pub mod trade;
pub mod transaction;
