// Shared test infrastructure: an in-memory wiring of every service plus
// catalog fixtures, so flow tests read like the back-office actions they
// exercise.
#![allow(dead_code)]

pub mod test_data;

pub use test_app::{spawn_app, spawn_app_without_sequences, TestApp};
pub use test_data::{dec, new_shipment};
