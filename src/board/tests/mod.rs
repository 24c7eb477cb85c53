//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain values, the activity recorder,
//! store operations, drag resolution, view projections and the storage codec.

mod support;
