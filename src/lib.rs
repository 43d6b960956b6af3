//! # path2d
//!
//! Mutable 2D path geometry: a compact, growable container for drawing
//! commands (move, line, quadratic, cubic, close) with transformed
//! iteration and axis-aligned rectangle queries.
//!
//! The crate stores a path as two parallel arrays — segment tags and
//! flattened coordinate pairs — grown with bounded amortized increments,
//! and exposes:
//!
//! - Incremental construction (`move_to` / `line_to` / `quad_to` /
//!   `curve_to` / `close_path`) with the "must start with a move"
//!   invariant enforced
//! - A borrowed cursor over the segments, optionally passed through an
//!   injected coordinate transform
//! - Rectangle bounds, containment, intersection, and Cohen–Sutherland
//!   line clipping via outcodes
//! - A bit-exact big-endian binary interchange format
//!
//! Rendering, stroking, and fill evaluation are out of scope; the path is
//! a container for a consumer pipeline, not a rasterizer.

// Foundation types and math
pub mod error;
pub mod math;
pub mod point;
pub mod rectangle;

// Path storage and iteration
pub mod path;
pub mod path_iterator;
pub mod trans_affine;

// Interchange
pub mod serialize;
