//! This crate builds tight-binding lattices of monolayer transition metal
//! dichalcogenides (MoS2, WSe2, ...). It currently covers:
//!
//! 1: Parameter sets of the published models, either as symmetry-group
//! matrix elements or as Slater-Koster integrals
//!
//! 2: The hopping matrices of up to six neighbour shells, rotated onto every
//! bond with the orbital representation of the $C_3$ rotation
//!
//! 3: Spin-orbit coupling, the rectangular four-atom cell and the layout
//! with one sublattice per orbital
//!
//! 4: The Bloch Hamiltonian of the emitted lattice
//!
//! 5: Biaxial, uniaxial and shear strain corrections of every shell matrix
//!
//! ```no_run
//! use tmdtb::{LatticeConfig, ModelVariant};
//! use ndarray::arr1;
//!
//! let lat = ModelVariant::TmdNN12MeoXeo
//!     .lattice()?
//!     .with_config(LatticeConfig::default().with_soc(true))?;
//! let model = lat.lattice()?;
//! let ham = model.gen_ham(&arr1(&[1.0 / 3.0, 1.0 / 3.0]))?;
//! assert_eq!(ham.nrows(), 22);
//! # Ok::<(), tmdtb::TbError>(())
//! ```
pub mod config;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod math;
pub mod matrices;
pub mod model;
pub mod models;
pub mod orbitals;
pub mod params;
pub mod registry;
pub mod slater_koster;
pub mod strain;
pub mod symm;
pub mod validate;

pub use config::{LatticeConfig, split_material};
pub use error::{Result, TbError};
pub use lattice::{LatticeDescriptor, TmdLattice, assemble, rebuild};
pub use matrices::{HoppingKind, Parity, ParitySet, ShellMatrices, ShellTemplates};
pub use model::{Energy, HoppingTerm, LatticeModel, Sublattice};
pub use models::ModelVariant;
pub use orbitals::{AtomKind, AtomOrbitals, LatticeOrbitals};
pub use params::{ParameterSet, ParameterStyle, Partition, Value};
pub use slater_koster::SlaterKoster;
pub use strain::{StrainKind, StrainMatrices};
pub use validate::{LatticeBlocks, check_blocks, check_model};
