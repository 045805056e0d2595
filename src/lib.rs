// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics allowances — float compares and lossy casts are intentional
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

//! Camera core for interactive 3D previewing.
//!
//! Vantage maintains a viewpoint's orientation and position in world space,
//! derives the view/projection matrices a renderer consumes each frame, and
//! integrates a small local-space motion model (acceleration → speed →
//! velocity → position). Convenience framing fits an axis-aligned bounding
//! box into view from any of its six canonical faces.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the viewpoint itself: basis maintenance,
//!   rotation, motion, matrix construction
//! - [`camera::BoxFace`] - canonical faces for auto-framing
//! - [`dispatch::ActionDispatcher`] - routes externally-produced
//!   [`dispatch::CameraAction`]s to the single main camera
//! - [`options::Options`] - TOML-backed runtime configuration
//!
//! # Conventions
//!
//! All matrices use the row-vector convention (`clip = v * view * proj`),
//! so composition reads left-to-right and the combined matrix is
//! `view * proj`. Projections are left-handed (+z forward in camera space)
//! with a [0, 1] depth range. Rotation angles are radians; the field of
//! view is degrees.

pub mod bounds;
pub mod camera;
pub mod dispatch;
pub mod error;
pub mod options;

pub use bounds::Aabb;
pub use camera::{BoxFace, Camera, CameraUniform, Frustum};
pub use dispatch::{ActionDispatcher, Axis, CameraAction, CameraId};
pub use error::VantageError;
pub use options::Options;
