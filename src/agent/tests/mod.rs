//! Unit tests for agent routing and invocation.

mod invoker_tests;
