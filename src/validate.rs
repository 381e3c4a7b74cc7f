//! Structural checks between the matrices of a lattice and between the
//! emitted model and its sublattices. Every failure is fatal.
use std::collections::{BTreeMap, HashMap};

use ndarray::{Array1, Array2};

use crate::error::{Result, TbError};
use crate::matrices::HoppingKind;
use crate::model::LatticeModel;
use crate::orbitals::AtomKind;

/// The spinless matrices of a lattice, before rotation and doubling.
///
/// Onsite matrices are square or a single row holding the diagonal.
/// Hopping matrices have destination rows and source columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LatticeBlocks {
    onsite: BTreeMap<AtomKind, Array2<f64>>,
    hoppings: BTreeMap<HoppingKind, Array2<f64>>,
    /// Lattice constant.
    pub a: f64,
    pub lamb_m: f64,
    pub lamb_c: f64,
}

impl LatticeBlocks {
    pub fn new(a: f64) -> Self {
        LatticeBlocks {
            a,
            ..Default::default()
        }
    }

    pub fn with_onsite(mut self, atom: AtomKind, matrix: Array2<f64>) -> Self {
        self.onsite.insert(atom, matrix);
        self
    }

    pub fn with_hopping(mut self, kind: HoppingKind, matrix: Array2<f64>) -> Self {
        self.hoppings.insert(kind, matrix);
        self
    }

    pub fn with_soc(mut self, lamb_m: f64, lamb_c: f64) -> Self {
        self.lamb_m = lamb_m;
        self.lamb_c = lamb_c;
        self
    }

    pub fn onsite(&self, atom: AtomKind) -> Option<&Array2<f64>> {
        self.onsite.get(&atom)
    }

    pub fn hopping(&self, kind: HoppingKind) -> Option<&Array2<f64>> {
        self.hoppings.get(&kind)
    }

    /// Hoppings in shell order.
    pub fn hoppings(&self) -> impl Iterator<Item = (HoppingKind, &Array2<f64>)> {
        self.hoppings.iter().map(|(k, v)| (*k, v))
    }

    /// Spin-orbit strength of `atom`.
    pub fn lamb(&self, atom: AtomKind) -> f64 {
        match atom {
            AtomKind::Metal => self.lamb_m,
            AtomKind::Chalcogen => self.lamb_c,
        }
    }

    /// Check the blocks and expand single-row onsite matrices to diagonals.
    pub fn normalized(mut self) -> Result<Self> {
        check_blocks(&self)?;
        for m in self.onsite.values_mut() {
            if m.nrows() == 1 && m.ncols() != 1 {
                *m = Array2::from_diag(&Array1::from_iter(m.iter().copied()));
            }
        }
        Ok(self)
    }
}

/// Orbital count implied by an onsite matrix.
fn onsite_size(atom: AtomKind, m: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows == cols || rows == 1 {
        Ok(cols)
    } else {
        Err(TbError::InvalidOnsiteShape { atom, rows, cols })
    }
}

/// Consistency of a set of lattice blocks.
///
/// Some atom carries an onsite matrix, every hopping connects atoms that
/// carry one, at least one hopping is given, and all shapes agree.
pub fn check_blocks(blocks: &LatticeBlocks) -> Result<()> {
    if blocks.onsite.is_empty() {
        return Err(TbError::NoOnsite);
    }
    for kind in blocks.hoppings.keys() {
        for atom in [kind.from(), kind.to()] {
            if !blocks.onsite.contains_key(&atom) {
                return Err(TbError::MissingOnsite {
                    hopping: kind.name(),
                    atom,
                });
            }
        }
    }
    if blocks.hoppings.is_empty() {
        return Err(TbError::NoHoppings);
    }

    let mut sizes = BTreeMap::new();
    for (atom, m) in &blocks.onsite {
        sizes.insert(*atom, onsite_size(*atom, m)?);
    }
    for (kind, m) in &blocks.hoppings {
        let (rows, cols) = m.dim();
        let to = sizes[&kind.to()];
        let from = sizes[&kind.from()];
        if rows != to {
            return Err(TbError::DimensionMismatch {
                context: format!("rows of {} (orbitals of {:?})", kind.name(), kind.to()),
                expected: to,
                found: rows,
            });
        }
        if cols != from {
            return Err(TbError::DimensionMismatch {
                context: format!("columns of {} (orbitals of {:?})", kind.name(), kind.from()),
                expected: from,
                found: cols,
            });
        }
    }
    Ok(())
}

/// Consistency of an emitted model.
///
/// Onsite energies are square over the orbitals of their sublattice, and
/// every hopping names known sublattices with an energy of shape
/// (source orbitals, destination orbitals).
pub fn check_model(model: &LatticeModel) -> Result<()> {
    let mut norb: HashMap<&str, usize> = HashMap::new();
    for sub in &model.sublattices {
        let n = sub.orbitals.len();
        let (rows, cols) = sub.onsite.shape();
        if rows != n || cols != n {
            return Err(TbError::DimensionMismatch {
                context: format!("onsite energy of {}", sub.name),
                expected: n,
                found: if rows != n { rows } else { cols },
            });
        }
        norb.insert(sub.name.as_str(), n);
    }
    for hop in &model.hoppings {
        let size = |name: &str| {
            norb.get(name).copied().ok_or_else(|| TbError::UnknownSublattice {
                hopping: hop.name.clone(),
                sublattice: name.to_string(),
            })
        };
        let from = size(&hop.from)?;
        let to = size(&hop.to)?;
        let (rows, cols) = hop.energy.shape();
        if rows != from {
            return Err(TbError::DimensionMismatch {
                context: format!("rows of {} (orbitals of {})", hop.name, hop.from),
                expected: from,
                found: rows,
            });
        }
        if cols != to {
            return Err(TbError::DimensionMismatch {
                context: format!("columns of {} (orbitals of {})", hop.name, hop.to),
                expected: to,
                found: cols,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Energy, HoppingTerm, Sublattice};
    use ndarray::{arr1, array};
    use num_complex::Complex;

    fn metal_blocks() -> LatticeBlocks {
        LatticeBlocks::new(1.0)
            .with_onsite(AtomKind::Metal, Array2::eye(3))
            .with_hopping(HoppingKind::H2M, Array2::zeros((3, 3)))
    }

    #[test]
    fn test_valid_blocks() {
        assert!(check_blocks(&metal_blocks()).is_ok());
        let full = metal_blocks()
            .with_onsite(AtomKind::Chalcogen, Array2::eye(6))
            .with_hopping(HoppingKind::H1M, Array2::zeros((6, 3)))
            .with_hopping(HoppingKind::H2C, Array2::zeros((6, 6)));
        assert!(check_blocks(&full).is_ok());
    }

    #[test]
    fn test_missing_parts() {
        let none = LatticeBlocks::new(1.0).with_hopping(HoppingKind::H2M, Array2::zeros((3, 3)));
        assert_eq!(check_blocks(&none), Err(TbError::NoOnsite));

        let lonely = LatticeBlocks::new(1.0).with_onsite(AtomKind::Metal, Array2::eye(3));
        assert_eq!(check_blocks(&lonely), Err(TbError::NoHoppings));

        let no_x = metal_blocks().with_hopping(HoppingKind::H1M, Array2::zeros((3, 3)));
        assert_eq!(
            check_blocks(&no_x),
            Err(TbError::MissingOnsite {
                hopping: "h_1_m".into(),
                atom: AtomKind::Chalcogen
            })
        );
    }

    #[test]
    fn test_shapes() {
        let bad_onsite = LatticeBlocks::new(1.0)
            .with_onsite(AtomKind::Metal, Array2::zeros((2, 3)))
            .with_hopping(HoppingKind::H2M, Array2::zeros((3, 3)));
        assert!(matches!(
            check_blocks(&bad_onsite),
            Err(TbError::InvalidOnsiteShape { rows: 2, cols: 3, .. })
        ));

        let bad_hop = metal_blocks()
            .with_onsite(AtomKind::Chalcogen, Array2::eye(3))
            .with_hopping(HoppingKind::H1M, Array2::zeros((3, 2)));
        assert!(matches!(
            check_blocks(&bad_hop),
            Err(TbError::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_row_onsite_is_broadcast() {
        let blocks = LatticeBlocks::new(1.0)
            .with_onsite(AtomKind::Metal, array![[1.0, 2.0, 3.0]])
            .with_hopping(HoppingKind::H2M, Array2::zeros((3, 3)))
            .normalized()
            .unwrap();
        let m = blocks.onsite(AtomKind::Metal).unwrap();
        assert_eq!(m, &Array2::from_diag(&arr1(&[1.0, 2.0, 3.0])));
    }

    fn sub(name: &str, n: usize) -> Sublattice {
        Sublattice {
            name: name.to_string(),
            position: arr1(&[0.0, 0.0]),
            orbitals: (0..n).map(|i| format!("{name}{i}")).collect(),
            onsite: Energy::Matrix(Array2::zeros((n, n))),
        }
    }

    fn model(hop_shape: (usize, usize), to: &str) -> LatticeModel {
        LatticeModel {
            name: "MoS2".into(),
            lattice_name: "test".into(),
            lat: Array2::eye(2),
            sublattices: vec![sub("Mo", 3), sub("S", 2)],
            hoppings: vec![HoppingTerm {
                name: "h_1_m-0-Mo-S".into(),
                offset: [0, 0],
                from: "Mo".into(),
                to: to.into(),
                energy: Energy::Matrix(Array2::from_elem(hop_shape, Complex::new(1.0, 0.0))),
            }],
            n_valence_band: 0,
            n_bands: 5,
        }
    }

    #[test]
    fn test_check_model() {
        assert!(check_model(&model((3, 2), "S")).is_ok());
        assert!(matches!(
            check_model(&model((2, 3), "S")),
            Err(TbError::DimensionMismatch { .. })
        ));
        assert_eq!(
            check_model(&model((3, 2), "Se")),
            Err(TbError::UnknownSublattice {
                hopping: "h_1_m-0-Mo-S".into(),
                sublattice: "Se".into()
            })
        );
    }
}
