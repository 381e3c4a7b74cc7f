//! Shell matrices: the minimal onsite and hopping blocks of each parity.
//!
//! Rows are destination orbitals and columns source orbitals. The layouts
//! are fixed by the point group of each neighbour shell. Undefined
//! coefficients enter as `0.0`.
use ndarray::{Array2, array};
use serde::{Deserialize, Serialize};

use crate::math::block_diag;
use crate::orbitals::AtomKind;
use crate::params::ParameterSet;

/// Mirror parity of an orbital, $z\to -z$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub const ALL: [Parity; 2] = [Parity::Even, Parity::Odd];

    /// Number of orbitals of `atom` with this parity:
    /// $d_{z^2}, d_{x^2-y^2}, d_{xy}$ | $d_{xz}, d_{yz}$ on the metal and
    /// $p_x, p_y, p_z$ for both parities on the chalcogen.
    pub fn size(self, atom: AtomKind) -> usize {
        match (atom, self) {
            (AtomKind::Metal, Parity::Even) => 3,
            (AtomKind::Metal, Parity::Odd) => 2,
            (AtomKind::Chalcogen, _) => 3,
        }
    }
}

/// A selection of parities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ParitySet {
    Even,
    Odd,
    Both,
}

impl ParitySet {
    pub fn contains(self, parity: Parity) -> bool {
        matches!(
            (self, parity),
            (ParitySet::Both, _) | (ParitySet::Even, Parity::Even) | (ParitySet::Odd, Parity::Odd)
        )
    }

    /// Orbitals of `atom` covered by this selection.
    pub fn size(self, atom: AtomKind) -> usize {
        Parity::ALL
            .iter()
            .filter(|p| self.contains(**p))
            .map(|p| p.size(atom))
            .sum()
    }
}

/// The hopping shells of an $MX_2$ monolayer.
///
/// Shells 1, 3 and 4 connect the metal to the chalcogen, the others connect
/// equal atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum HoppingKind {
    H1M,
    H2M,
    H2C,
    H3M,
    H4M,
    H5M,
    H5C,
    H6M,
    H6C,
}

impl HoppingKind {
    pub const ALL: [HoppingKind; 9] = [
        HoppingKind::H1M,
        HoppingKind::H2M,
        HoppingKind::H2C,
        HoppingKind::H3M,
        HoppingKind::H4M,
        HoppingKind::H5M,
        HoppingKind::H5C,
        HoppingKind::H6M,
        HoppingKind::H6C,
    ];

    pub fn shell(self) -> u8 {
        match self {
            HoppingKind::H1M => 1,
            HoppingKind::H2M | HoppingKind::H2C => 2,
            HoppingKind::H3M => 3,
            HoppingKind::H4M => 4,
            HoppingKind::H5M | HoppingKind::H5C => 5,
            HoppingKind::H6M | HoppingKind::H6C => 6,
        }
    }

    pub fn from(self) -> AtomKind {
        match self {
            HoppingKind::H2C | HoppingKind::H5C | HoppingKind::H6C => AtomKind::Chalcogen,
            _ => AtomKind::Metal,
        }
    }

    pub fn to(self) -> AtomKind {
        match self {
            HoppingKind::H2M | HoppingKind::H5M | HoppingKind::H6M => AtomKind::Metal,
            _ => AtomKind::Chalcogen,
        }
    }

    /// `h_{shell}_{m|c}`
    pub fn name(self) -> String {
        format!("h_{}_{}", self.shell(), self.from().tag())
    }

    /// In-plane bond length in units of the lattice constant.
    pub fn distance(self) -> f64 {
        let s3 = 3f64.sqrt();
        match self.shell() {
            1 => 1.0 / s3,
            2 => 1.0,
            3 => 2.0 / s3,
            4 => 7f64.sqrt() / s3,
            5 => s3,
            _ => 2.0,
        }
    }
}

/// Onsite and hopping matrices of one parity, and the parity blocks built
/// from them.
pub trait ShellTemplates {
    fn onsite(&self, atom: AtomKind, parity: Parity) -> Array2<f64>;

    /// Representative hopping matrix of one shell and parity.
    fn hopping(&self, kind: HoppingKind, parity: Parity) -> Array2<f64>;

    /// Onsite matrix of `atom` over the selected parities, even block first.
    fn onsite_block(&self, atom: AtomKind, parities: ParitySet) -> Array2<f64> {
        let blocks: Vec<Array2<f64>> = Parity::ALL
            .into_iter()
            .filter(|p| parities.contains(*p))
            .map(|p| self.onsite(atom, p))
            .collect();
        block_diag(&blocks)
    }

    /// Hopping matrix between atoms carrying `from` and `to` parities.
    ///
    /// Parities outside `selection` contribute zero blocks of the right shape,
    /// so the result always matches the onsite sizes of both ends.
    fn hopping_block(
        &self,
        kind: HoppingKind,
        selection: ParitySet,
        from: ParitySet,
        to: ParitySet,
    ) -> Array2<f64> {
        let blocks: Vec<Array2<f64>> = Parity::ALL
            .into_iter()
            .map(|p| {
                let rows = if to.contains(p) { p.size(kind.to()) } else { 0 };
                let cols = if from.contains(p) { p.size(kind.from()) } else { 0 };
                if selection.contains(p) && rows > 0 && cols > 0 {
                    self.hopping(kind, p)
                } else {
                    Array2::zeros((rows, cols))
                }
            })
            .collect();
        block_diag(&blocks)
    }
}

/// Builds shell matrices from a parameter set.
///
/// With a key suffix every coefficient `k` is read from `{k}{suffix}`, which
/// is how the biaxial and uniaxial strain corrections reuse these layouts.
#[derive(Debug, Clone, Copy)]
pub struct ShellMatrices<'a> {
    params: &'a ParameterSet,
    suffix: &'a str,
}

impl<'a> ShellMatrices<'a> {
    pub fn new(params: &'a ParameterSet) -> Self {
        ShellMatrices { params, suffix: "" }
    }

    pub fn with_suffix(params: &'a ParameterSet, suffix: &'a str) -> Self {
        ShellMatrices { params, suffix }
    }

    fn p(&self, key: &str) -> f64 {
        self.params.get_or_zero(&format!("{key}{}", self.suffix))
    }

    fn u<const N: usize>(&self, shell: u8, index: [u8; N], suffix: &str) -> [f64; N] {
        index.map(|i| self.p(&format!("u_{shell}_{i}_{suffix}")))
    }
}

impl ShellTemplates for ShellMatrices<'_> {
    /// Diagonal crystal-field matrix of one parity.
    fn onsite(&self, atom: AtomKind, parity: Parity) -> Array2<f64> {
        let (a, b, c) = match (atom, parity) {
            (AtomKind::Metal, Parity::Even) => {
                let (e0, e1) = (self.p("eps_0_m_e"), self.p("eps_1_m_e"));
                (e0, e1, Some(e1))
            }
            (AtomKind::Metal, Parity::Odd) => {
                let e0 = self.p("eps_0_m_o");
                (e0, e0, None)
            }
            (AtomKind::Chalcogen, Parity::Even) => {
                let (e0, e1) = (self.p("eps_0_x_e"), self.p("eps_1_x_e"));
                (e0, e0, Some(e1))
            }
            (AtomKind::Chalcogen, Parity::Odd) => {
                let (e0, e1) = (self.p("eps_0_x_o"), self.p("eps_1_x_o"));
                (e0, e0, Some(e1))
            }
        };
        let diag: Vec<f64> = [Some(a), Some(b), c].into_iter().flatten().collect();
        Array2::from_diag(&ndarray::Array1::from(diag))
    }

    fn hopping(&self, kind: HoppingKind, parity: Parity) -> Array2<f64> {
        let n = kind.shell();
        match (kind, parity) {
            (HoppingKind::H1M | HoppingKind::H3M | HoppingKind::H4M, Parity::Even) => {
                let [u0, u1, u2, u3, u4] = self.u(n, [0, 1, 2, 3, 4], "m_e");
                array![[0.0, 0.0, u0], [u1, u2, 0.0], [u3, u4, 0.0]]
            }
            (HoppingKind::H1M | HoppingKind::H3M | HoppingKind::H4M, Parity::Odd) => {
                let [u0, u1, u2] = self.u(n, [0, 1, 2], "m_o");
                array![[u0, 0.0], [0.0, u1], [0.0, u2]]
            }
            (HoppingKind::H2M | HoppingKind::H6M, Parity::Even) => {
                let [u0, u1, u2, u3, u4, u5] = self.u(n, [0, 1, 2, 3, 4, 5], "m_e");
                array![[u0, u1, u2], [u1, u3, u4], [-u2, -u4, u5]]
            }
            (HoppingKind::H2M | HoppingKind::H6M, Parity::Odd) => {
                let [u0, u1, u2] = self.u(n, [0, 1, 2], "m_o");
                array![[u0, u1], [-u1, u2]]
            }
            (HoppingKind::H2C | HoppingKind::H6C, _) => {
                let suffix = if parity == Parity::Even { "x_e" } else { "x_o" };
                let [u0, u1, u2, u3, u4, u5] = self.u(n, [0, 1, 2, 3, 4, 5], suffix);
                array![[u0, u1, u2], [-u1, u3, u4], [-u2, u4, u5]]
            }
            (HoppingKind::H5M, Parity::Even) => {
                let [u0, u1, u3, u5, u6] = self.u(n, [0, 1, 3, 5, 6], "m_e");
                array![[u0, -u1, 0.0], [-u6, u3, 0.0], [0.0, 0.0, u5]]
            }
            (HoppingKind::H5M, Parity::Odd) => {
                let [u0, u2] = self.u(n, [0, 2], "m_o");
                array![[u2, 0.0], [0.0, u0]]
            }
            (HoppingKind::H5C, _) => {
                let suffix = if parity == Parity::Even { "x_e" } else { "x_o" };
                let [u0, u2, u3, u5, u6] = self.u(n, [0, 2, 3, 5, 6], suffix);
                array![[u3, 0.0, 0.0], [0.0, u0, u2], [0.0, u6, u5]]
            }
        }
    }
}
