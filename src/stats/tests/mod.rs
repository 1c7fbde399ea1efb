//! Unit tests for the monthly statistics aggregation.
