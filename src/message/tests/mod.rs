//! Unit tests for the message subsystem.

mod store_tests;
