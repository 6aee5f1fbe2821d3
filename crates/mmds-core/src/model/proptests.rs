//! Property-based tests for the category model and naming convention.
