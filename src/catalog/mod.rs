//! The numbered namecode catalog.
//!
//! ## Levels
//!
//! | Declaration | Materialized | Holds |
//! |-------------|--------------|-------|
//! | [`Section`] | [`SectionCodes`] | ordered distinct values |
//! | [`Block`] | [`BlockCodes`] | sections |
//! | [`Plane`] | [`PlaneCodes`] | blocks |
//! | placements | [`AllCodes`] | planes at fixed starts |
//!
//! Declarations are plain data. [`AllCodes::build`] numbers them page by page
//! and checks the catalog-wide invariants; the result is immutable and can
//! be shared freely between threads.

pub mod builder;
pub mod codes;
pub mod lookup;
pub mod range;
pub mod stub;

pub use builder::{page_offsets, Block, Plane, Section};
pub use codes::{AllCodes, BlockCodes, CatalogError, NameCode, PlaneCodes, SectionCodes};
pub use lookup::{NamecodeLookup, ResolutionError};
pub use range::CodepointRange;
pub use stub::{BlockBranch, PlaneBranch, SectionStub, TreeStub};
