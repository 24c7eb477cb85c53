//! Kanban: single-user task board state management.
//!
//! This crate holds the state behind a three-column task board: an ordered
//! task sequence, drag-and-drop resolution, a bounded activity history, and
//! persistence of both collections to key-value storage.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and session checks
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Tasks, columns, drag resolution and activity history

pub mod board;
