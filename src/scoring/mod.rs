// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how products get their numbers, and their order.
//!
//! `core` turns (query, product, catalog) into a score. `ranking` turns a pile
//! of scores into the list the storefront shows.

mod core;
pub mod ranking;

pub use self::core::*;
