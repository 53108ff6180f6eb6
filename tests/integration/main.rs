//! Integration test suite.
