//! src/error.rs
//! This module defines the error type for the whole lattice-construction pipeline.
//! Parameter handling never fails (it only warns), so every variant here is a
//! structural problem that must stop a lattice from being emitted.

use thiserror::Error;

use crate::orbitals::AtomKind;

/// The primary error type for all fallible operations in this library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TbError {
    // --- Naming and Lookup Errors ---
    #[error("Invalid material name '{0}': expected two element symbols such as 'MoS2'")]
    InvalidMaterialName(String),

    #[error("No material name is available: set 'material' in the parameters or in the config")]
    MissingMaterial,

    #[error("Unknown parameter table '{0}'")]
    UnknownTable(String),

    #[error("Parameter table '{table}' has no entry '{entry}'")]
    UnknownTableEntry { table: String, entry: String },

    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    // --- Orbital Descriptor Errors ---
    #[error("Orbital descriptor of atom {atom:?} is inconsistent: {message}")]
    InvalidOrbitals { atom: AtomKind, message: String },

    #[error("Spin-flip coupling is not available for atom {atom:?}: {message}")]
    SpinFlipUnsupported { atom: AtomKind, message: String },

    // --- Block Consistency Errors ---
    #[error("No onsite matrix is given for any atom")]
    NoOnsite,

    #[error("No hopping matrices are given")]
    NoHoppings,

    #[error("Hopping '{hopping}' connects atom {atom:?}, which has no onsite matrix")]
    MissingOnsite { hopping: String, atom: AtomKind },

    #[error("Onsite matrix of atom {atom:?} has shape ({rows}, {cols}); it must be square or a single row")]
    InvalidOnsiteShape { atom: AtomKind, rows: usize, cols: usize },

    #[error("Dimension mismatch for '{context}': expected {expected}, got {found}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("Hopping '{hopping}' refers to unknown sublattice '{sublattice}'")]
    UnknownSublattice { hopping: String, sublattice: String },
}

/// A specialized `Result` type for this library's operations.
pub type Result<T> = std::result::Result<T, TbError>;
