//! Cache-blocked layout kernels for dense symmetric-family matrices.
//!
//! This crate provides the low-level layout transforms used as building
//! blocks inside larger numerical pipelines: reconstructing a full
//! symmetric/antisymmetric/Hermitian matrix from its stored triangle,
//! converting between full square storage and packed lower-triangle
//! storage, and gathering/scattering index-selected sub-blocks of a matrix
//! into/from an accumulator.
//!
//! All kernels operate directly on caller-owned, contiguous, row-major
//! buffers; shape is passed alongside as plain integers. Nothing here
//! allocates, blocks, or holds state across calls.
//!
//! # Core Types
//!
//! - [`Relation`]: how the upper triangle is derived from the lower
//!   triangle (symmetric copy, antisymmetric negation, Hermitian
//!   conjugation, anti-Hermitian negated conjugation)
//! - [`Scalar`]: element-type bound shared by all kernels; conjugation is
//!   the identity for real types
//! - [`TrilError`] / [`Result`]: precondition violations surfaced as
//!   errors before any buffer is touched
//!
//! # Primary API
//!
//! ## Triangle mirror
//!
//! - [`fill_triu`]: fill the upper triangle from the lower triangle,
//!   in place, under a [`Relation`]
//!
//! ## Packed-triangle codec
//!
//! - [`pack_tril`] / [`unpack_tril`]: convert between full `n x n` storage
//!   and the `n(n+1)/2`-element packed lower triangle
//! - [`unpack_row`]: extract one full logical row from packed storage
//!   without unpacking the whole matrix
//! - [`packed_len`] / [`packed_index`]: the packed index mapping, part of
//!   the API contract
//!
//! ## Block gather/scatter
//!
//! - [`gather_into`] / [`scatter_into`]: accumulate (`+=`) an
//!   index-selected sub-block between a larger matrix and a dense buffer
//!
//! # Example
//!
//! ```rust
//! use tril_kernel::{pack_tril, unpack_tril, Relation};
//!
//! // Packed lower triangle of a 3x3 symmetric matrix:
//! // row0 = [1], row1 = [2, 3], row2 = [4, 5, 6]
//! let tril = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let mut mat = [0.0f64; 9];
//! unpack_tril(&mut mat, &tril, 3, Some(Relation::Symmetric)).unwrap();
//! assert_eq!(mat, [1.0, 2.0, 4.0, 2.0, 3.0, 5.0, 4.0, 5.0, 6.0]);
//!
//! let mut repacked = [0.0f64; 6];
//! pack_tril(&mut repacked, &mat, 3).unwrap();
//! assert_eq!(repacked, tril);
//! ```
//!
//! # Cache Optimization
//!
//! The triangle mirror partitions the `n x n` iteration space into square
//! tiles of edge [`BLOCK_DIM`] so that a tile and its mirror stay resident
//! in L1 while being transposed. The tile size is purely a performance
//! parameter with no effect on results.

mod gather;
mod mirror;
mod packed;
mod relation;
mod scalar;

// ============================================================================
// Triangle mirror
// ============================================================================
pub use mirror::fill_triu;

// ============================================================================
// Packed-triangle codec
// ============================================================================
pub use packed::{pack_tril, packed_index, packed_len, unpack_row, unpack_tril};

// ============================================================================
// Block gather/scatter
// ============================================================================
pub use gather::{gather_into, scatter_into};

// ============================================================================
// Element types and relation tags
// ============================================================================
pub use relation::Relation;
pub use scalar::Scalar;

// ============================================================================
// Constants
// ============================================================================

/// Tile edge length for the blocked triangle mirror.
///
/// A 32x32 tile of `f64` is 8KB, so a tile plus its mirror occupy half of a
/// typical 32KB L1 data cache. Purely a performance parameter with no
/// effect on results.
pub const BLOCK_DIM: usize = 32;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the layout kernels.
///
/// Every entry point validates buffer lengths, dimensions and index lists
/// up front and reports mismatches before touching any buffer. Inner loops
/// run unchecked once validation passes.
#[derive(Debug, thiserror::Error)]
pub enum TrilError {
    /// Square matrix buffer length does not match the declared dimension.
    #[error("matrix buffer holds {len} elements, expected {expected} for n = {n}")]
    SquareLen { n: usize, expected: usize, len: usize },

    /// Packed triangle buffer length does not match the declared dimension.
    #[error("packed buffer holds {len} elements, expected {expected} for n = {n}")]
    PackedLen { n: usize, expected: usize, len: usize },

    /// Row buffer length does not match the declared dimension.
    #[error("row buffer holds {len} elements, expected {n}")]
    RowLen { n: usize, len: usize },

    /// Requested row lies outside the matrix.
    #[error("row {row} out of bounds for n = {n}")]
    RowOutOfBounds { row: usize, n: usize },

    /// An index-list entry reaches past the indexed buffer.
    #[error("index {index} out of bounds for extent {extent}")]
    IndexOutOfBounds { index: usize, extent: usize },

    /// Dense block does not fit its buffer at the declared row stride.
    #[error("block of {rows} x {cols} rows at stride {stride} exceeds buffer of {len} elements")]
    BlockOutOfBounds {
        rows: usize,
        cols: usize,
        stride: usize,
        len: usize,
    },

    /// Row stride shorter than the block row it must hold.
    #[error("row stride {stride} shorter than block row of {cols} elements")]
    StrideTooSmall { stride: usize, cols: usize },

    /// Integer overflow while computing a buffer extent.
    #[error("extent overflow")]
    ExtentOverflow,
}

/// Result type for the layout kernels.
pub type Result<T> = std::result::Result<T, TrilError>;
