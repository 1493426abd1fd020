//! Tests for the file conversion driver
