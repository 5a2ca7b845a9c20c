//! # CIS Rust Core
//!
//! Close-interval survey report engine.
//!
//! This crate turns pipeline corrosion-survey rows into the data structures
//! a survey viewer renders: distance-aligned voltage graphs, GPS path maps
//! with explicit gap breaks, and per-cell error flags for the measurement
//! grid. Spreadsheet parsing, file storage, and all presentation live in
//! external collaborators; the core receives an already-materialized row
//! sequence and returns plain data.
//!
//! ## Features
//!
//! - **Segmentation**: fixed-width, gap-filled distance buckets that
//!   paginate long surveys into separate charts and maps
//! - **Graph projection**: volt-to-millivolt conversion, a constant
//!   protection-reference line, and point annotations
//! - **Map projection**: GPS fixes with break sentinels so rendered paths
//!   disconnect across data gaps instead of interpolating
//! - **Error scans**: on/off voltage jumps, DCVG magnitudes, and
//!   station-gap integrity sweeps over the edited row sequence
//! - **Editing support**: edited-survey JSON round-trip, per-station
//!   suggestions from the DCP sheet, and edit-popover gating
//!
//! ## Architecture
//!
//! - [`api`]: consolidated public surface
//! - [`models`]: survey rows, containers, JSON parsing, column table
//! - [`report`]: graph/map/flag DTOs handed to the renderers
//! - [`services`]: the pure compute pipeline and scans
//! - [`config`]: pipeline configuration with TOML loading
//! - [`units`]: typed voltage quantities
//!
//! Everything is synchronous and recomputed from scratch on input change;
//! repeated invocation with identical inputs yields identical output.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
pub mod units;
