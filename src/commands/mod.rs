//! Command implementations for chart-version-check CLI

pub mod check;
