//! Strain corrections to the shell matrices.
//!
//! A parameter set of style [`ParameterStyle::Strain`] expands every
//! coefficient $c$ in the applied strain $\varepsilon$,
//! $$c(\varepsilon)=c+\sum_{n\ge1}\varepsilon^n c_{k,n},\qquad k\in\{b,u,s\},$$
//! and [`StrainMatrices`] lays out the corrections $c_{k,n}$ of one kind and
//! order as onsite and hopping matrices.
//!
//! Biaxial strain keeps the point group, so its corrections use the
//! unstrained layouts. Uniaxial and shear strain break the threefold
//! rotation: the onsite matrices pick up off-diagonal terms, and under shear
//! the hoppings fill the entries that vanish without strain. Shear has no
//! onsite keys of its own and reads the uniaxial ones.
//!
//! [`ParameterStyle::Strain`]: crate::params::ParameterStyle::Strain
use ndarray::{Array2, array};
use serde::{Deserialize, Serialize};

use crate::matrices::{HoppingKind, Parity, ShellMatrices, ShellTemplates};
use crate::orbitals::AtomKind;
use crate::params::ParameterSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum StrainKind {
    Biaxial,
    Uniaxial,
    Shear,
}

impl StrainKind {
    pub const ALL: [StrainKind; 3] = [StrainKind::Biaxial, StrainKind::Uniaxial, StrainKind::Shear];

    /// Letter used in the parameter keys, `u_2_0_m_e_b_1`.
    pub fn tag(self) -> char {
        match self {
            StrainKind::Biaxial => 'b',
            StrainKind::Uniaxial => 'u',
            StrainKind::Shear => 's',
        }
    }
}

/// Correction matrices of one strain kind and order.
#[derive(Debug, Clone)]
pub struct StrainMatrices<'a> {
    params: &'a ParameterSet,
    kind: StrainKind,
    order: u8,
    suffix: String,
}

impl<'a> StrainMatrices<'a> {
    pub fn new(params: &'a ParameterSet, kind: StrainKind, order: u8) -> Self {
        StrainMatrices {
            params,
            kind,
            order,
            suffix: format!("_{}_{order}", kind.tag()),
        }
    }

    /// One entry per order the parameter set carries, lowest first. Empty
    /// for a set without strain keys.
    pub fn orders(params: &'a ParameterSet, kind: StrainKind) -> Vec<Self> {
        (1..=params.style().max_strain_order())
            .map(|n| StrainMatrices::new(params, kind, n))
            .collect()
    }

    pub fn kind(&self) -> StrainKind {
        self.kind
    }

    pub fn order(&self) -> u8 {
        self.order
    }

    fn shell(&self) -> ShellMatrices<'_> {
        ShellMatrices::with_suffix(self.params, &self.suffix)
    }

    /// `{key}_u_{n}`: the onsite corrections of uniaxial and shear strain.
    fn uniaxial(&self, key: &str) -> f64 {
        self.params.get_or_zero(&format!("{key}_u_{}", self.order))
    }

    fn shear<const N: usize>(&self, shell: u8, index: [u8; N], suffix: &str) -> [f64; N] {
        index.map(|i| {
            self.params
                .get_or_zero(&format!("u_{shell}_{i}_{suffix}_s_{}", self.order))
        })
    }

    fn shear_hopping(&self, kind: HoppingKind, parity: Parity) -> Array2<f64> {
        let n = kind.shell();
        let chalcogen = if parity == Parity::Even { "x_e" } else { "x_o" };
        match (kind, parity) {
            (HoppingKind::H1M | HoppingKind::H3M | HoppingKind::H4M, Parity::Even) => {
                let [u5, u6, u7, u8] = self.shear(n, [5, 6, 7, 8], "m_e");
                array![[u5, u6, 0.0], [0.0, 0.0, u7], [0.0, 0.0, u8]]
            }
            (HoppingKind::H1M | HoppingKind::H3M | HoppingKind::H4M, Parity::Odd) => {
                let [u3, u4, u5] = self.shear(n, [3, 4, 5], "m_o");
                array![[0.0, u3], [u4, 0.0], [u5, 0.0]]
            }
            (HoppingKind::H2M | HoppingKind::H6M, Parity::Even) => {
                let [u1, u2, u4] = self.shear(n, [1, 2, 4], "m_e");
                array![[0.0, u1, u2], [-u1, 0.0, u4], [u2, u4, 0.0]]
            }
            (HoppingKind::H2M | HoppingKind::H6M, Parity::Odd) => {
                let [u1] = self.shear(n, [1], "m_o");
                array![[0.0, u1], [u1, 0.0]]
            }
            (HoppingKind::H2C | HoppingKind::H6C, _) => {
                let [u1, u2, u4] = self.shear(n, [1, 2, 4], chalcogen);
                array![[0.0, u1, u2], [u1, 0.0, u4], [u2, -u4, 0.0]]
            }
            (HoppingKind::H5M, Parity::Even) => {
                let [u2, u4, u7, u8] = self.shear(n, [2, 4, 7, 8], "m_e");
                array![[0.0, 0.0, u2], [0.0, 0.0, u4], [u7, u8, 0.0]]
            }
            (HoppingKind::H5M, Parity::Odd) => {
                let [u1, u3] = self.shear(n, [1, 3], "m_o");
                array![[0.0, u1], [u3, 0.0]]
            }
            (HoppingKind::H5C, _) => {
                let [u1, u4, u7, u8] = self.shear(n, [1, 4, 7, 8], chalcogen);
                array![[0.0, u1, u4], [u7, 0.0, 0.0], [u8, 0.0, 0.0]]
            }
        }
    }
}

impl ShellTemplates for StrainMatrices<'_> {
    fn onsite(&self, atom: AtomKind, parity: Parity) -> Array2<f64> {
        let e = |k: &str| self.uniaxial(k);
        match (self.kind, atom, parity) {
            (StrainKind::Biaxial, ..) => self.shell().onsite(atom, parity),
            (StrainKind::Uniaxial, AtomKind::Metal, Parity::Even) => {
                let (u0, u1) = (e("eps_0_m_e"), e("eps_1_m_e"));
                array![[0.0, u0, 0.0], [u0, -u1, 0.0], [0.0, 0.0, u1]]
            }
            (StrainKind::Uniaxial, AtomKind::Metal, Parity::Odd) => {
                let u0 = e("eps_0_m_o");
                array![[u0, 0.0], [0.0, -u0]]
            }
            (StrainKind::Uniaxial, AtomKind::Chalcogen, _) => {
                let r = if parity == Parity::Even { "e" } else { "o" };
                let (u0, u1) = (e(&format!("eps_0_x_{r}")), e(&format!("eps_1_x_{r}")));
                array![[u0, 0.0, 0.0], [0.0, -u0, u1], [0.0, u1, 0.0]]
            }
            (StrainKind::Shear, AtomKind::Metal, Parity::Even) => {
                let (u0, u1) = (e("eps_0_m_e"), e("eps_1_m_e"));
                array![[0.0, 0.0, -u0], [0.0, 0.0, -u1], [-u0, -u1, 0.0]]
            }
            (StrainKind::Shear, AtomKind::Metal, Parity::Odd) => {
                let u0 = e("eps_0_m_o");
                array![[0.0, -u0], [-u0, 0.0]]
            }
            (StrainKind::Shear, AtomKind::Chalcogen, _) => {
                let r = if parity == Parity::Even { "e" } else { "o" };
                let (u0, u1) = (e(&format!("eps_0_x_{r}")), e(&format!("eps_1_x_{r}")));
                array![[0.0, -u0, -u1], [-u0, 0.0, 0.0], [-u1, 0.0, 0.0]]
            }
        }
    }

    fn hopping(&self, kind: HoppingKind, parity: Parity) -> Array2<f64> {
        match self.kind {
            StrainKind::Shear => self.shear_hopping(kind, parity),
            _ => self.shell().hopping(kind, parity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::ParitySet;
    use crate::params::ParameterStyle;

    /// Every strain key set to a distinct value, the unstrained keys left out.
    fn strained(max_order: u8) -> ParameterSet {
        let style = ParameterStyle::Strain { max_order };
        let plain = ParameterSet::new(ParameterStyle::SymmetryGroup);
        let keys: Vec<(String, f64)> = ParameterSet::new(style)
            .keys()
            .filter(|k| !plain.contains(k))
            .enumerate()
            .map(|(i, k)| (k.to_string(), 1.0 + i as f64))
            .collect();
        let (set, warnings) = ParameterSet::from_mapping(style, keys);
        assert!(warnings.is_empty());
        set
    }

    fn is_symmetric(a: &Array2<f64>) -> bool {
        *a == a.t()
    }

    #[test]
    fn test_orders_follow_style() {
        let p = strained(2);
        let orders = StrainMatrices::orders(&p, StrainKind::Uniaxial);
        assert_eq!(orders.iter().map(|m| m.order()).collect::<Vec<_>>(), vec![1, 2]);
        assert!(orders.iter().all(|m| m.kind() == StrainKind::Uniaxial));
        assert!(StrainMatrices::orders(&ParameterSet::default(), StrainKind::Shear).is_empty());
    }

    #[test]
    fn test_biaxial_keeps_unstrained_layout() {
        let p = strained(1);
        let m = StrainMatrices::new(&p, StrainKind::Biaxial, 1);
        let g = |k: &str| p.get_or_zero(k);

        let e = m.onsite(AtomKind::Metal, Parity::Even);
        assert_eq!(e[[0, 0]], g("eps_0_m_e_b_1"));
        assert_eq!(e[[1, 1]], g("eps_1_m_e_b_1"));
        assert_eq!(e[[2, 2]], g("eps_1_m_e_b_1"));
        let e = m.onsite(AtomKind::Metal, Parity::Odd);
        assert_eq!(e[[1, 1]], g("eps_0_m_o_b_1"));

        let h = m.hopping(HoppingKind::H2M, Parity::Even);
        assert_eq!(h[[2, 0]], -g("u_2_2_m_e_b_1"));
        let h = m.hopping(HoppingKind::H5C, Parity::Odd);
        assert_eq!(h[[0, 0]], g("u_5_3_x_o_b_1"));
    }

    #[test]
    fn test_uniaxial_onsite_mixes_orbitals() {
        let p = strained(1);
        let m = StrainMatrices::new(&p, StrainKind::Uniaxial, 1);
        let g = |k: &str| p.get_or_zero(k);

        let e = m.onsite(AtomKind::Metal, Parity::Even);
        assert_eq!(e[[0, 1]], g("eps_0_m_e_u_1"));
        assert_eq!(e[[1, 1]], -g("eps_1_m_e_u_1"));
        assert_eq!(e[[0, 0]], 0.0);
        let e = m.onsite(AtomKind::Chalcogen, Parity::Odd);
        assert_eq!(e[[1, 1]], -g("eps_0_x_o_u_1"));
        assert_eq!(e[[2, 1]], g("eps_1_x_o_u_1"));
        for atom in AtomKind::ALL {
            for parity in Parity::ALL {
                let e = m.onsite(atom, parity);
                assert!(is_symmetric(&e));
                // traceless: uniaxial strain only splits levels
                assert_eq!(e.diag().sum(), 0.0, "{atom:?} {parity:?}");
            }
        }

        let h = m.hopping(HoppingKind::H1M, Parity::Odd);
        assert_eq!(h[[2, 1]], g("u_1_2_m_o_u_1"));
    }

    #[test]
    fn test_shear_fills_vanishing_entries() {
        let p = strained(1);
        let m = StrainMatrices::new(&p, StrainKind::Shear, 1);
        let g = |k: &str| p.get_or_zero(k);

        // onsite terms come from the uniaxial keys
        let e = m.onsite(AtomKind::Metal, Parity::Even);
        assert_eq!(e[[0, 2]], -g("eps_0_m_e_u_1"));
        assert_eq!(e[[2, 1]], -g("eps_1_m_e_u_1"));
        assert!(e.diag().iter().all(|x| *x == 0.0));
        assert!(is_symmetric(&m.onsite(AtomKind::Chalcogen, Parity::Even)));

        let h = m.hopping(HoppingKind::H3M, Parity::Even);
        assert_eq!(h[[0, 0]], g("u_3_5_m_e_s_1"));
        assert_eq!(h[[2, 2]], g("u_3_8_m_e_s_1"));
        // exactly where the unstrained hopping vanishes
        assert_eq!(h[[0, 2]], 0.0);
        assert_eq!(h[[1, 0]], 0.0);

        let h = m.hopping(HoppingKind::H6M, Parity::Odd);
        assert_eq!(h[[0, 1]], g("u_6_1_m_o_s_1"));
        assert_eq!(h[[1, 0]], g("u_6_1_m_o_s_1"));
        let h = m.hopping(HoppingKind::H2C, Parity::Odd);
        assert_eq!(h[[2, 1]], -g("u_2_4_x_o_s_1"));
        let h = m.hopping(HoppingKind::H5M, Parity::Even);
        assert_eq!(h[[2, 1]], g("u_5_8_m_e_s_1"));
        let h = m.hopping(HoppingKind::H5C, Parity::Even);
        assert_eq!(h[[0, 2]], g("u_5_4_x_e_s_1"));
    }

    #[test]
    fn test_second_order_reads_its_own_keys() {
        let p = strained(2);
        let first = StrainMatrices::new(&p, StrainKind::Biaxial, 1);
        let second = StrainMatrices::new(&p, StrainKind::Biaxial, 2);
        let a = first.hopping(HoppingKind::H2M, Parity::Even);
        let b = second.hopping(HoppingKind::H2M, Parity::Even);
        assert_eq!(b[[0, 0]], p.get_or_zero("u_2_0_m_e_b_2"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_blocks_pad_like_unstrained() {
        let p = strained(1);
        for kind in StrainKind::ALL {
            let m = StrainMatrices::new(&p, kind, 1);
            let h = m.hopping_block(HoppingKind::H1M, ParitySet::Even, ParitySet::Both, ParitySet::Both);
            assert_eq!(h.dim(), (6, 5));
            assert!(h.slice(ndarray::s![3.., 3..]).iter().all(|x| *x == 0.0));
            assert_eq!(m.onsite_block(AtomKind::Metal, ParitySet::Both).dim(), (5, 5));
        }
    }
}
