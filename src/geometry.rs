//! 晶格几何: 原胞矢量, 原子位置和每个近邻壳层的键表.
//!
//! The primitive cell holds one metal `M` at the origin and one chalcogen
//! `X` at $(2/3, 1/3)$. The rectangular (armchair) cell doubles it: `M`,
//! `M2`, `X`, `X2`. Each shell has three bonds related by $2\pi/3$
//! rotations; in the rectangular cell bond `i` splits into bonds `2i` and
//! `2i+1`, which carry the same matrix.
use ndarray::{Array1, Array2, array};
use serde::{Deserialize, Serialize};

use crate::matrices::HoppingKind;
use crate::orbitals::AtomKind;

/// An atom position inside the unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Site {
    M,
    X,
    /// Second metal of the rectangular cell.
    M2,
    /// Second chalcogen of the rectangular cell.
    X2,
}

impl Site {
    pub fn atom(self) -> AtomKind {
        match self {
            Site::M | Site::M2 => AtomKind::Metal,
            Site::X | Site::X2 => AtomKind::Chalcogen,
        }
    }

    pub fn is_image(self) -> bool {
        matches!(self, Site::M2 | Site::X2)
    }

    /// Sites of the cell in sublattice order.
    pub fn sites(lat4: bool) -> &'static [Site] {
        if lat4 {
            &[Site::M, Site::M2, Site::X, Site::X2]
        } else {
            &[Site::M, Site::X]
        }
    }

    /// Fractional coordinates.
    pub fn position(self, lat4: bool) -> Array1<f64> {
        match (self, lat4) {
            (Site::M, _) => array![0.0, 0.0],
            (Site::X, false) => array![2.0 / 3.0, 1.0 / 3.0],
            (Site::X, true) => array![0.5, 1.0 / 6.0],
            (Site::M2, _) => array![0.5, 0.5],
            (Site::X2, _) => array![0.0, 2.0 / 3.0],
        }
    }
}

/// Lattice vectors as rows, in the same length unit as `a`.
pub fn lattice_vectors(a: f64, lat4: bool) -> Array2<f64> {
    if lat4 {
        array![[a, 0.0], [0.0, a * 3f64.sqrt()]]
    } else {
        array![[a, 0.0], [-a / 2.0, a * 3f64.sqrt() / 2.0]]
    }
}

/// One directional bond: a hopping from `from` in cell 0 to `to` in cell `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    pub offset: [isize; 2],
    pub from: Site,
    pub to: Site,
}

const fn b(offset: [isize; 2], from: Site, to: Site) -> Bond {
    Bond { offset, from, to }
}

/// The bonds of one shell (or one branch of the fourth shell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondTable {
    /// Suffix added to the hopping name, empty except for the fourth shell.
    pub branch: &'static str,
    pub normal: [Bond; 3],
    pub lat4: [Bond; 6],
}

impl BondTable {
    pub fn bonds(&self, lat4: bool) -> &[Bond] {
        if lat4 { &self.lat4 } else { &self.normal }
    }
}

use Site::{M, M2, X, X2};

const H1: BondTable = BondTable {
    branch: "",
    normal: [b([-1, -1], M, X), b([0, 0], M, X), b([-1, 0], M, X)],
    lat4: [
        b([0, -1], M, X2),
        b([0, 0], M2, X),
        b([0, 0], M, X),
        b([1, 0], M2, X2),
        b([-1, 0], M, X),
        b([0, 0], M2, X2),
    ],
};

const H2M: BondTable = BondTable {
    branch: "",
    normal: [b([1, 0], M, M), b([0, 1], M, M), b([-1, -1], M, M)],
    lat4: [
        b([1, 0], M, M),
        b([1, 0], M2, M2),
        b([-1, 0], M, M2),
        b([0, 1], M2, M),
        b([-1, -1], M, M2),
        b([0, 0], M2, M),
    ],
};

const H2C: BondTable = BondTable {
    branch: "",
    normal: [b([1, 0], X, X), b([0, 1], X, X), b([-1, -1], X, X)],
    lat4: [
        b([1, 0], X, X),
        b([1, 0], X2, X2),
        b([0, 0], X, X2),
        b([-1, 1], X2, X),
        b([0, -1], X, X2),
        b([-1, 0], X2, X),
    ],
};

const H3: BondTable = BondTable {
    branch: "",
    normal: [b([0, 1], M, X), b([-2, -1], M, X), b([0, -1], M, X)],
    lat4: [
        b([0, 0], M, X2),
        b([0, 1], M2, X),
        b([-1, -1], M, X2),
        b([-1, 0], M2, X),
        b([1, -1], M, X2),
        b([1, 0], M2, X),
    ],
};

const H4A: BondTable = BondTable {
    branch: "a",
    normal: [b([-1, -2], M, X), b([1, 1], M, X), b([-2, 0], M, X)],
    lat4: [
        b([0, -1], M, X),
        b([1, -1], M2, X2),
        b([1, 0], M, X2),
        b([1, 1], M2, X),
        b([-2, 0], M, X),
        b([-1, 0], M2, X2),
    ],
};

const H4B: BondTable = BondTable {
    branch: "b",
    normal: [b([-2, -2], M, X), b([1, 0], M, X), b([-1, 1], M, X)],
    lat4: [
        b([-1, -1], M, X),
        b([0, -1], M2, X2),
        b([1, 0], M, X),
        b([2, 0], M2, X2),
        b([-1, 0], M, X2),
        b([-1, 1], M2, X),
    ],
};

const H5M: BondTable = BondTable {
    branch: "",
    normal: [b([1, 2], M, M), b([-2, -1], M, M), b([1, -1], M, M)],
    lat4: [
        b([0, 1], M, M),
        b([0, 1], M2, M2),
        b([-2, -1], M, M2),
        b([-1, 0], M2, M),
        b([1, -1], M, M2),
        b([2, 0], M2, M),
    ],
};

const H5C: BondTable = BondTable {
    branch: "",
    normal: [b([1, 2], X, X), b([-2, -1], X, X), b([1, -1], X, X)],
    lat4: [
        b([0, 1], X, X),
        b([0, 1], X2, X2),
        b([-1, -1], X, X2),
        b([-2, 0], X2, X),
        b([2, -1], X, X2),
        b([1, 0], X2, X),
    ],
};

const H6M: BondTable = BondTable {
    branch: "",
    normal: [b([2, 0], M, M), b([0, 2], M, M), b([-2, -2], M, M)],
    lat4: [
        b([2, 0], M, M),
        b([2, 0], M2, M2),
        b([-1, 1], M, M),
        b([-1, 1], M2, M2),
        b([-1, -1], M, M),
        b([-1, -1], M2, M2),
    ],
};

const H6C: BondTable = BondTable {
    branch: "",
    normal: [b([2, 0], X, X), b([0, 2], X, X), b([-2, -2], X, X)],
    lat4: [
        b([2, 0], X, X),
        b([2, 0], X2, X2),
        b([-1, 1], X, X),
        b([-1, 1], X2, X2),
        b([-1, -1], X, X),
        b([-1, -1], X2, X2),
    ],
};

/// Bond tables of a shell; the fourth shell has the two branches at
/// $\pm\arctan(\sqrt{3}/5)$ from the metal-chalcogen axis.
pub fn bond_tables(kind: HoppingKind) -> &'static [BondTable] {
    match kind {
        HoppingKind::H1M => &[H1],
        HoppingKind::H2M => &[H2M],
        HoppingKind::H2C => &[H2C],
        HoppingKind::H3M => &[H3],
        HoppingKind::H4M => &[H4A, H4B],
        HoppingKind::H5M => &[H5M],
        HoppingKind::H5C => &[H5C],
        HoppingKind::H6M => &[H6M],
        HoppingKind::H6C => &[H6C],
    }
}

/// Cartesian vector of `bond`, from its source atom to its destination atom.
pub fn bond_vector(bond: &Bond, a: f64, lat4: bool) -> Array1<f64> {
    let lat = lattice_vectors(a, lat4);
    let frac = array![bond.offset[0] as f64, bond.offset[1] as f64] + bond.to.position(lat4)
        - bond.from.position(lat4);
    frac.dot(&lat)
}
