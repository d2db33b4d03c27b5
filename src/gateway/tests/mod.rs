//! Unit tests for the protocol boundary and the orchestrator.

mod envelope_tests;
