//! Integration tests for async entry points.
