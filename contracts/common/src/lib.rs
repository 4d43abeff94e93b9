//! Shared building blocks for the staking rewards contract suite.
//!
//! This crate provides:
//! - [`roles`]: a role registry with a fixed role-admin hierarchy, kept in
//!   its own storage namespace apart from any contract's business state.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod roles;

pub use roles::*;
