//! The emitted lattice: sublattices with onsite energies and the hoppings
//! between them, ready for a tight-binding solver.
use std::collections::HashMap;
use std::f64::consts::PI;

use ndarray::{Array1, Array2, s};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TbError};

/// An onsite or hopping energy: a scalar for single orbitals, otherwise a
/// matrix with source rows and destination columns.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Energy {
    Scalar(Complex<f64>),
    Matrix(Array2<Complex<f64>>),
}

impl Energy {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Energy::Scalar(_) => (1, 1),
            Energy::Matrix(m) => m.dim(),
        }
    }

    pub fn to_matrix(&self) -> Array2<Complex<f64>> {
        match self {
            Energy::Scalar(x) => Array2::from_elem((1, 1), *x),
            Energy::Matrix(m) => m.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sublattice {
    pub name: String,
    /// Fractional coordinates.
    pub position: Array1<f64>,
    pub orbitals: Vec<String>,
    pub onsite: Energy,
}

/// $\bra{\text{from},\bm 0}\hat H\ket{\text{to},\bm R}$ with $\bm R$ = `offset`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HoppingTerm {
    pub name: String,
    pub offset: [isize; 2],
    pub from: String,
    pub to: String,
    pub energy: Energy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LatticeModel {
    /// Material, e.g. `MoS2`.
    pub name: String,
    pub lattice_name: String,
    /// Lattice vectors as rows.
    pub lat: Array2<f64>,
    pub sublattices: Vec<Sublattice>,
    pub hoppings: Vec<HoppingTerm>,
    pub n_valence_band: usize,
    pub n_bands: usize,
}

impl LatticeModel {
    /// Total number of orbitals in the cell.
    pub fn norb(&self) -> usize {
        self.sublattices.iter().map(|s| s.orbitals.len()).sum()
    }

    pub fn sublattice(&self, name: &str) -> Option<&Sublattice> {
        self.sublattices.iter().find(|s| s.name == name)
    }

    pub fn hopping(&self, name: &str) -> Option<&HoppingTerm> {
        self.hoppings.iter().find(|h| h.name == name)
    }

    /// Orbital labels in Hamiltonian order.
    pub fn orbitals(&self) -> Vec<&str> {
        self.sublattices
            .iter()
            .flat_map(|s| s.orbitals.iter().map(String::as_str))
            .collect()
    }

    #[allow(non_snake_case)]
    pub fn gen_ham(&self, kvec: &Array1<f64>) -> Result<Array2<Complex<f64>>> {
        //!Bloch Hamiltonian at `kvec` (reduced coordinates):
        //!
        //!$$H_{mn,\bm k}=\sum_{\bm R} \bra{m\bm 0}\hat H\ket{n\bm R}e^{2\pi i(\bm R-\bm\tau_m+\bm \tau_n)\cdot\bm k}$$
        //!
        //!Each hopping is added together with its hermitian conjugate.
        if kvec.len() != self.lat.nrows() {
            return Err(TbError::DimensionMismatch {
                context: "k-vector".to_string(),
                expected: self.lat.nrows(),
                found: kvec.len(),
            });
        }
        let nsta = self.norb();
        let mut start: HashMap<&str, (usize, &Sublattice)> = HashMap::new();
        let mut i0 = 0;
        for sub in &self.sublattices {
            start.insert(sub.name.as_str(), (i0, sub));
            i0 += sub.orbitals.len();
        }

        let mut hamk = Array2::<Complex<f64>>::zeros((nsta, nsta));
        for (i0, sub) in start.values() {
            let n = sub.orbitals.len();
            let mut block = hamk.slice_mut(s![*i0..*i0 + n, *i0..*i0 + n]);
            block += &sub.onsite.to_matrix();
        }
        for hop in &self.hoppings {
            let find = |name: &str| {
                start.get(name).copied().ok_or_else(|| TbError::UnknownSublattice {
                    hopping: hop.name.clone(),
                    sublattice: name.to_string(),
                })
            };
            let (f0, from) = find(&hop.from)?;
            let (t0, to) = find(&hop.to)?;
            let R = Array1::from_iter(hop.offset.iter().map(|x| *x as f64));
            let phase = (R + &to.position - &from.position).dot(kvec);
            let U = Complex::new(0.0, 2.0 * PI * phase).exp();
            let E = hop.energy.to_matrix();
            let (nf, nt) = E.dim();
            if nf != from.orbitals.len() || nt != to.orbitals.len() {
                return Err(TbError::DimensionMismatch {
                    context: format!("energy of {}", hop.name),
                    expected: from.orbitals.len() * to.orbitals.len(),
                    found: nf * nt,
                });
            }
            let mut block = hamk.slice_mut(s![f0..f0 + nf, t0..t0 + nt]);
            block += &E.mapv(|x| x * U);
            let mut block = hamk.slice_mut(s![t0..t0 + nt, f0..f0 + nf]);
            block += &E.t().mapv(|x| (x * U).conj());
        }
        Ok(hamk)
    }
}
