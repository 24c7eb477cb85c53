//! Kanban board state management.
//!
//! A single signed-in user keeps tasks in three fixed columns, drags them
//! between and within columns, and reviews a bounded history of changes.
//! State is written to key-value storage after every mutation. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board store, drag resolution and view projections in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
