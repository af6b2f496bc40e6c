//! Core components of the `sec13f-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The EDGAR [`SecClient`] and its builder.
//! - The primary [`SecError`] type.
//! - Shared data models like [`HoldingRecord`] and [`Investor`].

/// The EDGAR client (`SecClient`), builder, and cache configuration.
pub mod client;
/// The primary error type (`SecError`) for the crate.
pub mod error;
/// Shared data models used across the fetch and screening modules.
pub mod models;

#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SecClient`
pub use client::{CacheMode, SecClient, SecClientBuilder};
pub use error::SecError;
pub use models::{HoldingRecord, Investor, InvestorId, RawHoldingRow, parse_market_value};
