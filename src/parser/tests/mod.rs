//! Tests for parser components and integration scenarios.

mod common;
