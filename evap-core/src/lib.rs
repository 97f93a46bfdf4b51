//! Core types and request pipeline for the evaporation dashboard.
//!
//! This crate provides:
//! - `weather`, `evaporation`, `storage`, `history`: wire types exchanged with
//!   the calculation service
//! - `validation`: plausibility checks run before any network call
//! - `session`: the page-lifetime `SessionState` and its mutation seam
//! - `pipeline`: the evaporation → storage planning → history submission chain
//! - `charts`: pure view-model derivers feeding the D3.js charts
//! - `client` (feature `api`): reqwest implementation of `CalculationService`

pub mod charts;
pub mod error;
pub mod evaporation;
pub mod history;
pub mod pipeline;
pub mod service;
pub mod session;
pub mod storage;
pub mod validation;
pub mod weather;

#[cfg(feature = "api")]
pub mod client;
