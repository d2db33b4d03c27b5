//! Unit tests for message delivery.
