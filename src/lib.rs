// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Discrete rings on the integer lattice and their local connectivity.
//!
//! The ring of radius r is the set of lattice points whose Euclidean distance
//! to the origin rounds to r. This crate generates rings, checks that every
//! ring point has at least two 8-connected neighbours (and, when it has
//! exactly two, that they are not cyclically adjacent), and catalogues the
//! 3×3 neighbourhood masks seen along the way.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! radius → Ring::generate → Ring → NeighborIndex → InvariantChecker → Verdict
//!                                                        ↓
//!                                                     Catalogs
//! ```
//!
//! - [`ring`]: the column-scan generator with exact integer bounds, and the
//!   membership index
//! - [`check`]: the two-neighbour / non-adjacent-pair invariant
//! - [`mask`]: 9-bit neighbourhood masks, glyph rendering and catalogs
//! - [`symmetry`]: the dihedral group of the square acting on points and masks
//! - [`survey`]: per-radius outcomes and sequential or parallel batches
//!
//! Catalogs are explicit values passed to the checker, never globals. Every
//! radius is independent, so batches parallelise by radius and merge their
//! catalogs by set union.
//!
//! # Example
//!
//! ```
//! use ring_search::{Survey, SurveyConfig};
//!
//! let report = Survey::new(1, 20, SurveyConfig::default())?.run()?;
//! assert!(report.all_passed());
//! assert!(report.catalogs.forbidden().unwrap().is_empty());
//! # Ok::<(), ring_search::RingError>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod ring;
pub mod survey;
pub mod symmetry;

// Re-export commonly used types
pub use check::{InvariantChecker, Verdict, Violation, ViolationKind};
pub use config::{CatalogScope, SurveyConfig};
pub use error::RingError;
pub use geometry::Point;
pub use mask::{Catalogs, Mask, MaskCatalog};
pub use ring::{NeighborIndex, Ring};
pub use survey::{check_radius, RadiusOutcome, Survey, SurveyReport};
