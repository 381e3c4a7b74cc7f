//! 晶格组装: from a parameter set and a declarative descriptor to an emitted
//! [`LatticeModel`].
//!
//! The pipeline runs through fixed stages, orbitals bound, parameters bound,
//! matrices generated, validated and lattice emitted. [`rebuild`] runs all of
//! them from scratch every time; nothing is cached or patched in place.
//!
//! For a representative hopping $H$ of a shell the bonds rotated by
//! $2\pi/3$ and $4\pi/3$ carry $U_B H U_A^T$ and $U_B^T H U_A$. With
//! spin-orbit coupling every block becomes $\mathbb 1_2\otimes H$ and the
//! onsite matrices become
//! $$H_0(s_z)=H_0+i s_z\lambda L_z,\qquad H_0(s_z)\oplus H_0(-s_z).$$
use std::collections::BTreeMap;

use log::debug;
use ndarray::{Array2, array, s};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::config::{LatticeConfig, split_material};
use crate::error::{Result, TbError};
use crate::geometry::{BondTable, Site, bond_tables, lattice_vectors};
use crate::math::{block_diag, spin_double, to_complex};
use crate::matrices::{HoppingKind, ParitySet, ShellMatrices, ShellTemplates};
use crate::model::{Energy, HoppingTerm, LatticeModel, Sublattice};
use crate::orbitals::{AtomKind, AtomOrbitals, LatticeOrbitals};
use crate::params::ParameterSet;
use crate::registry;
use crate::strain::{StrainKind, StrainMatrices};
use crate::symm::rotated_triple;
use crate::validate::{LatticeBlocks, check_model};

/// Which orbitals, parities and shells make up a lattice.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LatticeDescriptor {
    pub lattice_name: String,
    pub orbitals: LatticeOrbitals,
    /// Parities carried by the metal, `None` without metal orbitals.
    pub metal: Option<ParitySet>,
    /// Parities carried by the chalcogen.
    pub chalcogen: Option<ParitySet>,
    /// Hopping shells and the parities each one couples.
    pub shells: Vec<(HoppingKind, ParitySet)>,
    /// Registry table and entry used when no parameters are given.
    pub default_params: (String, String),
    /// Highest valence band of the spinless primitive cell.
    pub n_v: usize,
    pub n_b: usize,
}

impl LatticeDescriptor {
    pub fn parities(&self, atom: AtomKind) -> Option<ParitySet> {
        match atom {
            AtomKind::Metal => self.metal,
            AtomKind::Chalcogen => self.chalcogen,
        }
    }

    /// The spinless blocks of this lattice for `params`.
    pub fn blocks(&self, params: &ParameterSet) -> Result<LatticeBlocks> {
        let blocks = LatticeBlocks::new(params.get_or_zero("a"))
            .with_soc(params.get_or_zero("lamb_m"), params.get_or_zero("lamb_x"));
        self.fill(blocks, &ShellMatrices::new(params))
    }

    /// The strain corrections of order `order` laid out like [`blocks`](Self::blocks).
    ///
    /// Spin-orbit strengths are left at zero, strain only corrects the
    /// orbital part.
    pub fn strain_blocks(
        &self,
        params: &ParameterSet,
        kind: StrainKind,
        order: u8,
    ) -> Result<LatticeBlocks> {
        let max_order = params.style().max_strain_order();
        if order == 0 || order > max_order {
            return Err(TbError::InvalidConfig {
                field: "strain order",
                message: format!("order {order} outside 1..={max_order} of the parameter set"),
            });
        }
        let blocks = LatticeBlocks::new(params.get_or_zero("a"));
        self.fill(blocks, &StrainMatrices::new(params, kind, order))
    }

    fn fill<T: ShellTemplates>(&self, mut blocks: LatticeBlocks, m: &T) -> Result<LatticeBlocks> {
        for atom in AtomKind::ALL {
            if let Some(p) = self.parities(atom) {
                blocks = blocks.with_onsite(atom, m.onsite_block(atom, p));
            }
        }
        for (kind, selection) in &self.shells {
            let (from, to) = (kind.from(), kind.to());
            let (Some(pf), Some(pt)) = (self.parities(from), self.parities(to)) else {
                let atom = if self.parities(from).is_none() { from } else { to };
                return Err(TbError::MissingOnsite {
                    hopping: kind.name(),
                    atom,
                });
            };
            blocks = blocks.with_hopping(*kind, m.hopping_block(*kind, *selection, pf, pt));
        }
        Ok(blocks)
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    OrbitalsBound,
    ParametersBound,
    MatricesGenerated,
    Validated,
    LatticeEmitted,
}

/// Build the lattice of `descriptor` for `params` under `config`.
///
/// The material name comes from `config.material`, falling back to the
/// `material` parameter.
pub fn rebuild(
    params: &ParameterSet,
    descriptor: &LatticeDescriptor,
    config: &LatticeConfig,
) -> Result<LatticeModel> {
    let name = descriptor.lattice_name.as_str();
    let stage = |s: Stage| debug!("{name}: {s:?}");
    config.validate()?;
    stage(Stage::OrbitalsBound);

    let material = match (&config.material, params.material()) {
        (Some(m), _) => m.clone(),
        (None, Some(m)) => m.to_string(),
        (None, None) => return Err(TbError::MissingMaterial),
    };
    stage(Stage::ParametersBound);

    let blocks = descriptor.blocks(params)?;
    stage(Stage::MatricesGenerated);

    let blocks = blocks.normalized()?;
    stage(Stage::Validated);

    let mut model = assemble(&blocks, &descriptor.orbitals, config, &material)?;
    model.lattice_name = descriptor.lattice_name.clone();
    model.n_valence_band = config.n_valence_band(descriptor.n_v);
    model.n_bands = config.n_bands(descriptor.n_b);
    stage(Stage::LatticeEmitted);
    debug!(
        "{name}: {} sublattices, {} hoppings, {} orbitals",
        model.sublattices.len(),
        model.hoppings.len(),
        model.norb()
    );
    Ok(model)
}

/// Emit the lattice of already generated `blocks`.
///
/// The band counts of the result are left at zero and the lattice name is
/// empty; [`rebuild`] fills them from a descriptor.
pub fn assemble(
    blocks: &LatticeBlocks,
    orbitals: &LatticeOrbitals,
    config: &LatticeConfig,
    material: &str,
) -> Result<LatticeModel> {
    let blocks = blocks.clone().normalized()?;
    let (metal, chalcogen) = split_material(material)?;
    let assembler = Assembler {
        blocks: &blocks,
        orbitals,
        config,
        metal,
        chalcogen,
    };
    assembler.check_orbitals()?;
    let model = assembler.emit(material)?;
    check_model(&model)?;
    Ok(model)
}

struct Assembler<'a> {
    blocks: &'a LatticeBlocks,
    orbitals: &'a LatticeOrbitals,
    config: &'a LatticeConfig,
    metal: String,
    chalcogen: String,
}

impl Assembler<'_> {
    fn atom_orbitals(&self, atom: AtomKind) -> Result<&AtomOrbitals> {
        self.orbitals.get(atom).ok_or_else(|| TbError::InvalidOrbitals {
            atom,
            message: "the atom carries matrices but no orbitals are declared".to_string(),
        })
    }

    /// Orbitals are well formed, their counts agree with the blocks, and the
    /// spin-flip term fits.
    fn check_orbitals(&self) -> Result<()> {
        self.orbitals.validate()?;
        for atom in AtomKind::ALL {
            let Some(h) = self.blocks.onsite(atom) else {
                continue;
            };
            let norb = self.atom_orbitals(atom)?.len();
            if norb != h.nrows() {
                return Err(TbError::DimensionMismatch {
                    context: format!("orbitals of {atom:?}"),
                    expected: h.nrows(),
                    found: norb,
                });
            }
            if self.config.soc_eo_flip {
                check_spin_flip(atom, self.atom_orbitals(atom)?.l())?;
            }
        }
        Ok(())
    }

    fn site_name(&self, site: Site) -> String {
        match site {
            Site::M => self.metal.clone(),
            Site::M2 => format!("{}2", self.metal),
            Site::X => self.chalcogen.clone(),
            Site::X2 => format!("{}2", self.chalcogen),
        }
    }

    /// `{site}{orbital}`, followed by all labels again with `u` and `d` when
    /// spin doubled.
    fn orbital_labels(&self, site: Site) -> Vec<String> {
        let name = self.site_name(site);
        let orbs = self.orbitals.get(site.atom()).map(AtomOrbitals::orbs).unwrap_or_default();
        let labels: Vec<String> = orbs.iter().map(|o| format!("{name}{o}")).collect();
        if self.config.soc_doubled_ham() {
            let up = labels.iter().map(|l| format!("{l}u"));
            let down = labels.iter().map(|l| format!("{l}d"));
            up.chain(down).collect()
        } else {
            labels
        }
    }

    fn onsite(&self, atom: AtomKind, h: &Array2<f64>) -> Result<Array2<Complex<f64>>> {
        let lamb = self.blocks.lamb(atom);
        let l_z = self.atom_orbitals(atom)?.s_h();
        let ham_sz = |sz: f64| {
            let h = to_complex(h);
            if self.config.soc_sz_part {
                h + l_z.mapv(|x| Complex::new(0.0, sz * lamb * x))
            } else {
                h
            }
        };
        let sz = self.config.soc_sz;
        let mut onsite = match (self.config.soc, self.config.soc_polarized) {
            (false, _) => ham_sz(0.0),
            (true, true) => ham_sz(sz),
            (true, false) => block_diag(&[ham_sz(sz), ham_sz(-sz)]),
        };
        if self.config.soc_eo_flip_used() {
            let flip = spin_flip(atom, self.atom_orbitals(atom)?.l(), sz * lamb);
            let n = flip.nrows();
            onsite.slice_mut(s![..n, n..]).assign(&flip);
            onsite.slice_mut(s![n.., ..n]).assign(&flip.t().mapv(|x| x.conj()));
        }
        Ok(onsite)
    }

    fn emit(&self, material: &str) -> Result<LatticeModel> {
        let lat4 = self.config.lat4;
        let single = self.config.single_orbital;
        let mut sublattices = Vec::new();
        let mut hoppings = Vec::new();

        let mut onsite = BTreeMap::new();
        for atom in AtomKind::ALL {
            if let Some(h) = self.blocks.onsite(atom) {
                onsite.insert(atom, self.onsite(atom, h)?);
            }
        }

        for site in Site::sites(lat4) {
            let atom = site.atom();
            let Some(h) = onsite.get(&atom) else {
                continue;
            };
            let labels = self.orbital_labels(*site);
            let position = site.position(lat4);
            if single {
                for (i, label) in labels.iter().enumerate() {
                    sublattices.push(Sublattice {
                        name: label.clone(),
                        position: position.clone(),
                        orbitals: vec![label.clone()],
                        onsite: Energy::Scalar(Complex::new(h[[i, i]].re, 0.0)),
                    });
                }
                for i in 0..labels.len() {
                    for j in i + 1..labels.len() {
                        hoppings.push(HoppingTerm {
                            name: format!("h_0_{}-0-{}-{}", atom.tag(), labels[i], labels[j]),
                            offset: [0, 0],
                            from: labels[i].clone(),
                            to: labels[j].clone(),
                            energy: Energy::Scalar(h[[i, j]]),
                        });
                    }
                }
            } else {
                sublattices.push(Sublattice {
                    name: self.site_name(*site),
                    position,
                    orbitals: labels,
                    onsite: Energy::Matrix(h.clone()),
                });
            }
        }

        for (kind, h) in self.blocks.hoppings() {
            let tables = bond_tables(kind);
            if kind == HoppingKind::H4M {
                // two independent bond families at +-arctan(sqrt(3)/5)
                let angle = (3f64.sqrt() / 5.0).atan();
                let clockwise = self.orbitals.clockwise;
                let ur_to = self.atom_orbitals(kind.to())?.ur_angle(angle, clockwise);
                let ur_from = self.atom_orbitals(kind.from())?.ur_angle(angle, clockwise);
                let [_, ha, hb] = rotated_triple(h, &ur_to, &ur_from);
                for (table, rep) in tables.iter().zip([ha, hb]) {
                    hoppings.extend(self.shell_hoppings(kind, table, &rep)?);
                }
            } else {
                for table in tables {
                    hoppings.extend(self.shell_hoppings(kind, table, h)?);
                }
            }
        }

        Ok(LatticeModel {
            name: material.to_string(),
            lattice_name: String::new(),
            lat: lattice_vectors(self.blocks.a, lat4),
            sublattices,
            hoppings,
            n_valence_band: 0,
            n_bands: 0,
        })
    }

    /// The hoppings of one bond table, named `{shell}{branch}-{n}-{from}-{to}`
    /// where `n` is the rotation index of the bond.
    fn shell_hoppings(
        &self,
        kind: HoppingKind,
        table: &BondTable,
        h: &Array2<f64>,
    ) -> Result<Vec<HoppingTerm>> {
        let clockwise = self.orbitals.clockwise;
        let ur_to = self.atom_orbitals(kind.to())?.ur(clockwise);
        let ur_from = self.atom_orbitals(kind.from())?.ur(clockwise);
        let mut triple = rotated_triple(h, &ur_to, &ur_from);
        if self.config.soc_doubled_ham() {
            triple = triple.map(|m| spin_double(&m));
        }
        let prefix = format!("{}{}", kind.name(), table.branch);
        let lat4 = self.config.lat4;

        let mut out = Vec::new();
        for (i, bond) in table.bonds(lat4).iter().enumerate() {
            let n = if lat4 { i / 2 } else { i };
            let m = &triple[n];
            if self.config.single_orbital {
                let from = self.orbital_labels(bond.from);
                let to = self.orbital_labels(bond.to);
                for (fi, f) in from.iter().enumerate() {
                    for (tj, t) in to.iter().enumerate() {
                        out.push(HoppingTerm {
                            name: format!("{prefix}-{n}-{f}-{t}"),
                            offset: bond.offset,
                            from: f.clone(),
                            to: t.clone(),
                            energy: Energy::Scalar(Complex::new(m[[tj, fi]], 0.0)),
                        });
                    }
                }
            } else {
                let (f, t) = (self.site_name(bond.from), self.site_name(bond.to));
                out.push(HoppingTerm {
                    name: format!("{prefix}-{n}-{f}-{t}"),
                    offset: bond.offset,
                    from: f,
                    to: t,
                    energy: Energy::Matrix(m.t().mapv(|x| Complex::new(x, 0.0))),
                });
            }
        }
        Ok(out)
    }
}

const METAL_L: [i32; 5] = [0, 2, -2, 1, -1];
const CHALCOGEN_L: [i32; 3] = [1, -1, 0];

fn check_spin_flip(atom: AtomKind, l: &[i32]) -> Result<()> {
    let mut sorted = l.to_vec();
    sorted.sort_unstable();
    let expected: &[i32] = match atom {
        AtomKind::Metal => &[-2, -1, 0, 1, 2],
        AtomKind::Chalcogen => &[-1, -1, 0, 0, 1, 1],
    };
    if sorted != expected {
        return Err(TbError::SpinFlipUnsupported {
            atom,
            message: format!("needs l = {expected:?}, the orbitals have l = {l:?}"),
        });
    }
    Ok(())
}

/// Index of the entry of `reference` closest to `l`.
fn nearest(reference: &[i32], l: i32) -> usize {
    reference
        .iter()
        .enumerate()
        .min_by_key(|(_, r)| (**r - l).abs())
        .map_or(0, |(j, _)| j)
}

fn reorder(m: &Array2<Complex<f64>>, keys: &[usize]) -> Array2<Complex<f64>> {
    Array2::from_shape_fn((keys.len(), keys.len()), |(x, y)| m[[keys[x], keys[y]]])
}

/// Spin-up to spin-down block of the spin-orbit coupling between even and
/// odd orbitals, in the orbital order given by `l`.
fn spin_flip(atom: AtomKind, l: &[i32], sz_lamb: f64) -> Array2<Complex<f64>> {
    let c = |re: f64, im: f64| Complex::new(re, im) * sz_lamb;
    match atom {
        AtomKind::Metal => {
            let s3 = 3f64.sqrt();
            let lower = array![
                [c(s3 / 2.0, 0.0), c(-0.5, 0.0), c(0.0, 0.5)],
                [c(0.0, -s3 / 2.0), c(0.0, -0.5), c(-0.5, 0.0)]
            ];
            let mut soc = Array2::<Complex<f64>>::zeros((5, 5));
            soc.slice_mut(s![3.., ..3]).assign(&lower);
            soc.slice_mut(s![..3, 3..]).assign(&lower.t().mapv(|x| -x));
            let keys: Vec<usize> = l.iter().map(|x| nearest(&METAL_L, *x)).collect();
            reorder(&soc, &keys)
        }
        AtomKind::Chalcogen => {
            let upper = array![
                [c(0.0, 0.0), c(0.0, 0.0), c(0.5, 0.0)],
                [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -0.5)],
                [c(-0.5, 0.0), c(0.0, 0.5), c(0.0, 0.0)]
            ];
            let mut soc = Array2::<Complex<f64>>::zeros((6, 6));
            soc.slice_mut(s![..3, 3..]).assign(&upper);
            soc.slice_mut(s![3.., ..3]).assign(&upper.t().mapv(|x| -x));
            let keys: Vec<usize> = l
                .iter()
                .enumerate()
                .map(|(i, x)| nearest(&CHALCOGEN_L, *x) + if i < 3 { 0 } else { 3 })
                .collect();
            reorder(&soc, &keys)
        }
    }
}

/// A lattice variant together with its parameters and switches.
///
/// Changing any of them only changes what the next [`TmdLattice::lattice`]
/// call builds.
#[derive(Debug, Clone, PartialEq)]
pub struct TmdLattice {
    descriptor: LatticeDescriptor,
    params: ParameterSet,
    config: LatticeConfig,
}

impl TmdLattice {
    /// Lattice with the default parameters of `descriptor`.
    pub fn new(descriptor: LatticeDescriptor) -> Result<Self> {
        descriptor.orbitals.validate()?;
        let (table, entry) = &descriptor.default_params;
        let params = registry::lookup(table, entry)?;
        Ok(TmdLattice {
            descriptor,
            params,
            config: LatticeConfig::default(),
        })
    }

    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    pub fn with_config(mut self, config: LatticeConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn descriptor(&self) -> &LatticeDescriptor {
        &self.descriptor
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// The validated spinless blocks.
    pub fn blocks(&self) -> Result<LatticeBlocks> {
        self.descriptor.blocks(&self.params)?.normalized()
    }

    pub fn lattice(&self) -> Result<LatticeModel> {
        rebuild(&self.params, &self.descriptor, &self.config)
    }

    pub fn n_valence_band(&self) -> usize {
        self.config.n_valence_band(self.descriptor.n_v)
    }

    pub fn n_bands(&self) -> usize {
        self.config.n_bands(self.descriptor.n_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::max_diff;
    use crate::params::ParameterStyle;
    use ndarray::arr1;

    fn three_band() -> LatticeDescriptor {
        let metal = AtomOrbitals::new(vec![0, 2, -2], vec!["dz2", "dx2y2", "dxy"]);
        LatticeDescriptor {
            lattice_name: "three band".into(),
            orbitals: LatticeOrbitals::new(Some(metal), None).unwrap(),
            metal: Some(ParitySet::Even),
            chalcogen: None,
            shells: vec![(HoppingKind::H2M, ParitySet::Even)],
            default_params: ("liu2".into(), "MoS2".into()),
            n_v: 0,
            n_b: 3,
        }
    }

    fn minimal_params() -> ParameterSet {
        let mut values: Vec<(&str, crate::params::Value)> = vec![
            ("a", 0.319.into()),
            ("material", "MoS2".into()),
            ("eps_0_m_e", 1.046.into()),
            ("eps_1_m_e", 2.104.into()),
        ];
        let u = [-0.184, 0.507, -0.401, 0.057, 0.338, 0.218];
        let keys = ["u_2_0_m_e", "u_2_1_m_e", "u_2_2_m_e", "u_2_3_m_e", "u_2_4_m_e", "u_2_5_m_e"];
        for (k, v) in keys.into_iter().zip(u) {
            values.push((k, v.into()));
        }
        let (set, warnings) = ParameterSet::from_mapping(ParameterStyle::SymmetryGroup, values);
        assert!(warnings.is_empty());
        set
    }

    #[test]
    fn test_three_band_lattice() {
        let model = rebuild(&minimal_params(), &three_band(), &LatticeConfig::default()).unwrap();
        assert_eq!(model.name, "MoS2");
        assert_eq!(model.lattice_name, "three band");
        assert_eq!(model.sublattices.len(), 1);
        let mo = &model.sublattices[0];
        assert_eq!(mo.name, "Mo");
        assert_eq!(mo.orbitals, vec!["Modz2", "Modx2y2", "Modxy"]);
        let Energy::Matrix(onsite) = &mo.onsite else {
            panic!("matrix onsite expected");
        };
        assert_eq!(onsite.dim(), (3, 3));
        for ((i, j), x) in onsite.indexed_iter() {
            assert_eq!(x.im, 0.0);
            if i != j {
                assert_eq!(x.re, 0.0);
            }
        }
        assert_eq!(onsite[[0, 0]].re, 1.046);
        assert_eq!(onsite[[2, 2]].re, 2.104);

        let offsets: Vec<[isize; 2]> = model.hoppings.iter().map(|h| h.offset).collect();
        assert_eq!(offsets, vec![[1, 0], [0, 1], [-1, -1]]);
        let names: Vec<&str> = model.hoppings.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["h_2_m-0-Mo-Mo", "h_2_m-1-Mo-Mo", "h_2_m-2-Mo-Mo"]);
        assert!((model.lat[[1, 1]] - 0.319 * 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!((model.n_valence_band, model.n_bands), (0, 3));
    }

    #[test]
    fn test_emitted_hoppings_are_rotations() {
        let descriptor = three_band();
        let params = minimal_params();
        let model = rebuild(&params, &descriptor, &LatticeConfig::default()).unwrap();
        let h = descriptor.blocks(&params).unwrap().hopping(HoppingKind::H2M).unwrap().clone();
        let u = descriptor.orbitals.ur(AtomKind::Metal).unwrap();
        let expected = [h.clone(), u.dot(&h).dot(&u.t()), u.t().dot(&h).dot(&u)];
        for (hop, e) in model.hoppings.iter().zip(expected) {
            let Energy::Matrix(m) = &hop.energy else {
                panic!("matrix hopping expected");
            };
            assert!(max_diff(m, &to_complex(&e.t().to_owned())) < 1e-12, "{}", hop.name);
        }
    }

    #[test]
    fn test_soc_doubles_blocks() {
        let descriptor = three_band();
        let params = minimal_params();
        let plain = rebuild(&params, &descriptor, &LatticeConfig::default()).unwrap();
        let soc = LatticeConfig::default().with_soc(true);
        let doubled = rebuild(&params, &descriptor, &soc).unwrap();
        assert_eq!(doubled.norb(), 6);
        assert_eq!(doubled.n_bands, 6);
        assert_eq!(doubled.n_valence_band, 1);
        assert_eq!(doubled.sublattices[0].orbitals[0], "Modz2u");
        assert_eq!(doubled.sublattices[0].orbitals[3], "Modz2d");
        for (a, b) in plain.hoppings.iter().zip(&doubled.hoppings) {
            assert_eq!(b.energy.shape(), (6, 6));
            assert!(max_diff(&spin_double(&a.energy.to_matrix()), &b.energy.to_matrix()) < 1e-12);
        }

        // lambda = 0 gives two copies of the spinless onsite matrix
        let mut no_lamb = params.clone();
        no_lamb.set("lamb_m", 0.0);
        let zero = rebuild(&no_lamb, &descriptor, &soc).unwrap();
        let onsite = plain.sublattices[0].onsite.to_matrix();
        assert!(max_diff(&zero.sublattices[0].onsite.to_matrix(), &spin_double(&onsite)) < 1e-12);

        // with lambda the spin sectors carry opposite L_z terms
        let mut with_lamb = params;
        with_lamb.set("lamb_m", 0.073);
        let m = rebuild(&with_lamb, &descriptor, &soc).unwrap().sublattices[0].onsite.to_matrix();
        assert!((m[[1, 2]].im + m[[4, 5]].im).abs() < 1e-12);
        assert!(m[[1, 2]].im.abs() > 0.05);
        assert!(max_diff(&m, &m.t().mapv(|x| x.conj())) < 1e-12);
    }

    #[test]
    fn test_polarized_keeps_one_sector() {
        let mut params = minimal_params();
        params.set("lamb_m", 0.073);
        let config = LatticeConfig::default()
            .with_soc(true)
            .with_soc_polarized(true)
            .with_soc_sz(-1.0)
            .unwrap();
        let model = rebuild(&params, &three_band(), &config).unwrap();
        assert_eq!(model.norb(), 3);
        let m = model.sublattices[0].onsite.to_matrix();
        // L_z on (dx2y2, dxy) is [[0,-1],[1,0]], times i * sz * lambda
        assert!((m[[1, 2]].im - 0.073).abs() < 1e-12);
    }

    #[test]
    fn test_single_orbital_matches_matrix_form() {
        let mut params = minimal_params();
        params.set("lamb_m", 0.073);
        for soc in [false, true] {
            for lat4 in [false, true] {
                let config = LatticeConfig::default().with_soc(soc).with_lat4(lat4);
                let matrix = rebuild(&params, &three_band(), &config).unwrap();
                let single =
                    rebuild(&params, &three_band(), &config.clone().with_single_orbital(true)).unwrap();
                assert_eq!(single.sublattices.len(), matrix.norb());
                assert_eq!(single.orbitals(), matrix.orbitals());
                for k in [arr1(&[0.0, 0.0]), arr1(&[0.13, 0.41]), arr1(&[1.0 / 3.0, 2.0 / 3.0])] {
                    let a = matrix.gen_ham(&k).unwrap();
                    let b = single.gen_ham(&k).unwrap();
                    assert!(max_diff(&a, &b) < 1e-12, "soc {soc}, lat4 {lat4}");
                }
            }
        }
    }

    #[test]
    fn test_single_orbital_names() {
        let config = LatticeConfig::default().with_single_orbital(true);
        let model = rebuild(&minimal_params(), &three_band(), &config).unwrap();
        assert_eq!(model.sublattices[1].name, "Modx2y2");
        assert!(model.hopping("h_0_m-0-Modz2-Modxy").is_some());
        assert!(model.hopping("h_2_m-1-Modx2y2-Modz2").is_some());
        // three intra-atom pairs plus 3 bonds x 9 orbital pairs
        assert_eq!(model.hoppings.len(), 3 + 27);
    }

    #[test]
    fn test_lat4_sites() {
        let config = LatticeConfig::default().with_lat4(true);
        let model = rebuild(&minimal_params(), &three_band(), &config).unwrap();
        let names: Vec<&str> = model.sublattices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Mo", "Mo2"]);
        assert_eq!(model.sublattices[1].position, arr1(&[0.5, 0.5]));
        assert_eq!(model.hoppings.len(), 6);
        assert_eq!(model.hoppings[3].name, "h_2_m-1-Mo2-Mo");
    }

    #[test]
    fn test_material_errors() {
        let mut params = minimal_params();
        params.clear("material");
        assert_eq!(
            rebuild(&params, &three_band(), &LatticeConfig::default()),
            Err(TbError::MissingMaterial)
        );
        let config = LatticeConfig::default().with_material("WSe2").unwrap();
        let model = rebuild(&params, &three_band(), &config).unwrap();
        assert_eq!(model.sublattices[0].name, "W");

        let mut bad = minimal_params();
        bad.set("material", "mos2");
        assert!(matches!(
            rebuild(&bad, &three_band(), &LatticeConfig::default()),
            Err(TbError::InvalidMaterialName(_))
        ));
    }

    #[test]
    fn test_structural_errors() {
        let mut descriptor = three_band();
        descriptor.shells.push((HoppingKind::H1M, ParitySet::Even));
        assert!(matches!(
            rebuild(&minimal_params(), &descriptor, &LatticeConfig::default()),
            Err(TbError::MissingOnsite { atom: AtomKind::Chalcogen, .. })
        ));

        let mut descriptor = three_band();
        descriptor.metal = Some(ParitySet::Both);
        descriptor.shells = vec![(HoppingKind::H2M, ParitySet::Both)];
        assert!(matches!(
            rebuild(&minimal_params(), &descriptor, &LatticeConfig::default()),
            Err(TbError::DimensionMismatch { expected: 5, found: 3, .. })
        ));

        let config = LatticeConfig::default().with_soc(true).with_soc_eo_flip(true);
        assert!(matches!(
            rebuild(&minimal_params(), &three_band(), &config),
            Err(TbError::SpinFlipUnsupported { atom: AtomKind::Metal, .. })
        ));
    }

    #[test]
    fn test_assemble_custom_blocks() {
        let blocks = LatticeBlocks::new(1.0)
            .with_onsite(AtomKind::Metal, array![[0.0, 1.0, 1.0]])
            .with_hopping(HoppingKind::H6M, Array2::eye(3));
        let orbitals = three_band().orbitals;
        let model = assemble(&blocks, &orbitals, &LatticeConfig::default(), "WS2").unwrap();
        let offsets: Vec<[isize; 2]> = model.hoppings.iter().map(|h| h.offset).collect();
        assert_eq!(offsets, vec![[2, 0], [0, 2], [-2, -2]]);
        assert_eq!(model.sublattices[0].onsite.shape(), (3, 3));
        assert!(model.lattice_name.is_empty());
    }

    #[test]
    fn test_spin_flip_block() {
        let l = [0, 2, -2, 1, -1];
        let m = spin_flip(AtomKind::Metal, &l, 1.0);
        assert!((m[[3, 0]].re - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!(m[[0, 3]], -m[[3, 0]]);
        assert!(m.slice(s![..3, ..3]).iter().all(|x| x.norm() == 0.0));

        // a permuted orbital order permutes the block
        let p = spin_flip(AtomKind::Metal, &[1, -1, 0, 2, -2], 1.0);
        assert_eq!(p[[0, 2]], m[[3, 0]]);

        let x = spin_flip(AtomKind::Chalcogen, &[1, -1, 0, 1, -1, 0], 2.0);
        assert_eq!(x[[0, 5]], Complex::new(1.0, 0.0));
        assert_eq!(x[[5, 0]], Complex::new(-1.0, 0.0));
        assert_eq!(nearest(&CHALCOGEN_L, -1), 1);

        assert!(check_spin_flip(AtomKind::Chalcogen, &[1, -1, 0, 1, -1, 0]).is_ok());
        assert!(check_spin_flip(AtomKind::Chalcogen, &[1, -1, 0]).is_err());
        assert!(check_spin_flip(AtomKind::Metal, &[0, 2, -2, 1, -1]).is_ok());
    }

    #[test]
    fn test_deserialized_descriptor_rejects_bad_groups() {
        let json = serde_json::to_value(three_band()).unwrap();
        let back: LatticeDescriptor = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, three_band());

        for group in [serde_json::json!([0, 0, 1]), serde_json::json!([0, 2, 2, 5])] {
            let mut bad = json.clone();
            bad["orbitals"]["metal"]["group"] = group;
            let err = serde_json::from_value::<LatticeDescriptor>(bad).unwrap_err();
            assert!(err.to_string().contains("l-values") || err.to_string().contains("pair"));
        }

        // explicit groups pass, an unpaired l = 1 does not
        let raw = serde_json::json!({
            "metal": {"l": [0, 2, -2], "orbs": ["dz2", "dx2y2", "dxy"], "group": [0, 1, 1]},
            "chalcogen": null,
        });
        assert!(serde_json::from_value::<LatticeOrbitals>(raw).is_ok());
        let raw = serde_json::json!({
            "metal": {"l": [1, 2, -2], "orbs": ["a", "b", "c"]},
            "chalcogen": null,
        });
        assert!(serde_json::from_value::<LatticeOrbitals>(raw).is_err());
    }

    #[test]
    fn test_unvalidated_groups_do_not_panic() {
        let metal = AtomOrbitals::new(vec![0, 2, -2], vec!["dz2", "dx2y2", "dxy"]);
        let orbitals = LatticeOrbitals::new(Some(metal), None).unwrap();
        assert!(orbitals.validate().is_ok());

        // a group vector that no constructor accepted still fails the build
        let broken = AtomOrbitals::new(vec![0, 2, -2], vec!["dz2", "dx2y2", "dxy"]).with_group(vec![0, 2, 2, 5]);
        assert!(matches!(
            LatticeOrbitals::new(Some(broken.clone()), None),
            Err(TbError::InvalidOrbitals { atom: AtomKind::Metal, .. })
        ));
        assert_eq!(broken.s_h().dim(), (3, 3));
    }

    #[test]
    fn test_strain_blocks() {
        let style = ParameterStyle::Strain { max_order: 1 };
        let (params, warnings) = ParameterSet::from_mapping(
            style,
            vec![
                ("eps_0_m_e_b_1", -0.3),
                ("eps_1_m_e_b_1", -0.1),
                ("u_2_1_m_e_b_1", 0.05),
                ("eps_0_m_e_u_1", 0.2),
                ("u_2_2_m_e_s_1", 0.07),
            ],
        );
        assert!(warnings.is_empty());
        let descriptor = three_band();

        let b = descriptor.strain_blocks(&params, StrainKind::Biaxial, 1).unwrap();
        let same = ShellMatrices::with_suffix(&params, "_b_1");
        assert_eq!(b.onsite(AtomKind::Metal), Some(&same.onsite_block(AtomKind::Metal, ParitySet::Even)));
        assert_eq!(b.hopping(HoppingKind::H2M).map(|h| h[[1, 0]]), Some(0.05));
        assert_eq!(b.lamb_m, 0.0);

        let u = descriptor.strain_blocks(&params, StrainKind::Uniaxial, 1).unwrap();
        assert_eq!(u.onsite(AtomKind::Metal).map(|h| h[[0, 1]]), Some(0.2));
        let s = descriptor.strain_blocks(&params, StrainKind::Shear, 1).unwrap();
        assert_eq!(s.hopping(HoppingKind::H2M).map(|h| h[[0, 2]]), Some(0.07));
        assert_eq!(s.onsite(AtomKind::Metal).map(|h| h[[2, 0]]), Some(-0.2));

        // the corrections assemble like any other blocks
        let model = assemble(&s, &descriptor.orbitals, &LatticeConfig::default(), "MoS2").unwrap();
        let h = model.gen_ham(&arr1(&[0.1, 0.3])).unwrap();
        assert!(max_diff(&h, &h.t().mapv(|x| x.conj())) < 1e-12);

        for order in [0, 2] {
            assert!(matches!(
                descriptor.strain_blocks(&params, StrainKind::Biaxial, order),
                Err(TbError::InvalidConfig { .. })
            ));
        }
        assert!(descriptor.strain_blocks(&minimal_params(), StrainKind::Shear, 1).is_err());
    }
}
