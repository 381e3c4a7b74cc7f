//! The named lattice variants, from the three-band metal model up to the
//! eleven-band model with all six neighbour shells.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TbError};
use crate::lattice::{LatticeDescriptor, TmdLattice};
use crate::matrices::{HoppingKind, ParitySet};
use crate::orbitals::{AtomOrbitals, LatticeOrbitals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ModelVariant {
    /// $d_{z^2}, d_{x^2-y^2}, d_{xy}$ on the metal, second neighbours.
    TmdNN2Me,
    /// Even metal and chalcogen orbitals, first and second neighbours.
    TmdNN12MeXe,
    /// All eleven orbitals, first and second neighbours.
    TmdNN12MeoXeo,
    /// As [`ModelVariant::TmdNN12MeoXeo`] with even third-neighbour metal hopping.
    TmdNN123MeoXeo,
    TmdNN125MeoXeo,
    TmdNN256Me,
    TmdNN256Meo,
    TmdNN123456MeoXeo,
    /// The five metal $d$ orbitals with second, fifth and sixth neighbours,
    /// on the group-1 parameter set.
    Group1Tmd5Band,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 9] = [
        ModelVariant::TmdNN2Me,
        ModelVariant::TmdNN12MeXe,
        ModelVariant::TmdNN12MeoXeo,
        ModelVariant::TmdNN123MeoXeo,
        ModelVariant::TmdNN125MeoXeo,
        ModelVariant::TmdNN256Me,
        ModelVariant::TmdNN256Meo,
        ModelVariant::TmdNN123456MeoXeo,
        ModelVariant::Group1Tmd5Band,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelVariant::TmdNN2Me => "TmdNN2Me",
            ModelVariant::TmdNN12MeXe => "TmdNN12MeXe",
            ModelVariant::TmdNN12MeoXeo => "TmdNN12MeoXeo",
            ModelVariant::TmdNN123MeoXeo => "TmdNN123MeoXeo",
            ModelVariant::TmdNN125MeoXeo => "TmdNN125MeoXeo",
            ModelVariant::TmdNN256Me => "TmdNN256Me",
            ModelVariant::TmdNN256Meo => "TmdNN256Meo",
            ModelVariant::TmdNN123456MeoXeo => "TmdNN123456MeoXeo",
            ModelVariant::Group1Tmd5Band => "Group1Tmd5Band",
        }
    }

    pub fn descriptor(self) -> Result<LatticeDescriptor> {
        use HoppingKind::*;
        use ParitySet::{Both, Even};
        let desc = match self {
            ModelVariant::TmdNN2Me => LatticeDescriptor {
                lattice_name: "3 bands 2NN model".into(),
                orbitals: LatticeOrbitals::new(Some(metal_even(vec![0, 1, 1])), None)?,
                metal: Some(Even),
                chalcogen: None,
                shells: vec![(H2M, Even)],
                default_params: ("liu2".into(), "MoS2".into()),
                n_v: 0,
                n_b: 3,
            },
            ModelVariant::TmdNN12MeXe => LatticeDescriptor {
                lattice_name: "6 bands 2NN model".into(),
                orbitals: LatticeOrbitals::new(
                    Some(metal_even(vec![0, 2, 2])),
                    Some(
                        AtomOrbitals::new(vec![1, -1, 0], vec!["pxe", "pye", "pze"])
                            .with_group(vec![0, 0, 1]),
                    ),
                )?,
                metal: Some(Even),
                chalcogen: Some(Even),
                shells: vec![(H1M, Even), (H2M, Even), (H2C, Even)],
                default_params: ("jorissen".into(), "MoS2".into()),
                n_v: 3,
                n_b: 6,
            },
            ModelVariant::TmdNN12MeoXeo => eleven_band(
                "11 bands 2NN model",
                vec![(H1M, Both), (H2M, Both), (H2C, Both)],
                "cappelluti",
            )?,
            ModelVariant::TmdNN123MeoXeo => eleven_band(
                "11 bands 3NN model",
                vec![(H1M, Both), (H2M, Both), (H2C, Both), (H3M, Even)],
                "fang",
            )?,
            ModelVariant::TmdNN125MeoXeo => eleven_band(
                "11 bands 5NN model",
                vec![(H1M, Both), (H2M, Both), (H2C, Both), (H5M, Both), (H5C, Both)],
                "dias",
            )?,
            ModelVariant::TmdNN256Me => LatticeDescriptor {
                lattice_name: "3 bands 6NN model".into(),
                orbitals: LatticeOrbitals::new(Some(metal_even(vec![0, 1, 1])), None)?,
                metal: Some(Even),
                chalcogen: None,
                shells: vec![(H2M, Even), (H5M, Even), (H6M, Even)],
                default_params: ("liu6".into(), "MoS2".into()),
                n_v: 0,
                n_b: 3,
            },
            ModelVariant::TmdNN256Meo => LatticeDescriptor {
                lattice_name: "5 bands 6NN model".into(),
                orbitals: LatticeOrbitals::new(Some(metal_full()), None)?,
                metal: Some(Both),
                chalcogen: None,
                shells: vec![(H2M, Both), (H5M, Both), (H6M, Both)],
                default_params: ("wu".into(), "MoS2".into()),
                n_v: 0,
                n_b: 5,
            },
            ModelVariant::TmdNN123456MeoXeo => eleven_band(
                "11 bands 6NN model",
                HoppingKind::ALL.iter().map(|k| (*k, Both)).collect(),
                "all",
            )?,
            ModelVariant::Group1Tmd5Band => LatticeDescriptor {
                lattice_name: "Liu/Wu 5 bands 6NN model".into(),
                orbitals: LatticeOrbitals::new(Some(metal_full()), None)?,
                metal: Some(Both),
                chalcogen: None,
                shells: vec![(H2M, Both), (H5M, Both), (H6M, Both)],
                default_params: ("group1".into(), "MoS2".into()),
                n_v: 0,
                n_b: 5,
            },
        };
        Ok(desc)
    }

    /// The variant with its default parameters.
    pub fn lattice(self) -> Result<TmdLattice> {
        TmdLattice::new(self.descriptor()?)
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelVariant {
    type Err = TbError;

    fn from_str(s: &str) -> Result<Self> {
        ModelVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| TbError::InvalidConfig {
                field: "variant",
                message: format!("unknown lattice variant {s}"),
            })
    }
}

fn metal_even(group: Vec<usize>) -> AtomOrbitals {
    AtomOrbitals::new(vec![0, 2, -2], vec!["dz2", "dx2y2", "dxy"]).with_group(group)
}

fn metal_full() -> AtomOrbitals {
    AtomOrbitals::new(vec![0, 2, -2, 1, -1], vec!["dz2", "dx2y2", "dxy", "dxz", "dyz"])
}

fn eleven_band(
    lattice_name: &str,
    shells: Vec<(HoppingKind, ParitySet)>,
    table: &str,
) -> Result<LatticeDescriptor> {
    let chalcogen = AtomOrbitals::new(
        vec![1, -1, 0, 1, -1, 0],
        vec!["pxe", "pye", "pze", "pxo", "pyo", "pzo"],
    )
    .with_group(vec![0, 0, 1, 2, 2, 3]);
    Ok(LatticeDescriptor {
        lattice_name: lattice_name.to_string(),
        orbitals: LatticeOrbitals::new(
            Some(metal_full().with_group(vec![0, 1, 1, 2, 2])),
            Some(chalcogen),
        )?,
        metal: Some(ParitySet::Both),
        chalcogen: Some(ParitySet::Both),
        shells,
        default_params: (table.to_string(), "MoS2".to_string()),
        n_v: 6,
        n_b: 11,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;
    use crate::math::max_diff;
    use ndarray::{Array1, Array2, arr1};
    use num_complex::Complex;

    fn trace_pow(h: &Array2<Complex<f64>>, p: usize) -> Complex<f64> {
        let mut m = h.clone();
        for _ in 1..p {
            m = m.dot(h);
        }
        m.diag().sum()
    }

    fn is_hermitian(h: &Array2<Complex<f64>>) -> bool {
        max_diff(h, &h.t().mapv(|x| x.conj())) < 1e-12
    }

    #[test]
    fn test_every_variant_builds() {
        for variant in ModelVariant::ALL {
            let lat = variant.lattice().unwrap();
            let model = lat.lattice().unwrap();
            assert_eq!(model.norb(), lat.n_bands(), "{variant}");
            assert_eq!(model.lattice_name, lat.descriptor().lattice_name);
            assert_eq!(model.name, "MoS2");
            let h = model.gen_ham(&arr1(&[0.21, 0.07])).unwrap();
            assert!(is_hermitian(&h), "{variant}");
            assert_eq!(variant.name().parse::<ModelVariant>().unwrap(), variant);
        }
        assert!("TmdNN7".parse::<ModelVariant>().is_err());
    }

    #[test]
    fn test_group1_five_band() {
        let lat = ModelVariant::Group1Tmd5Band.lattice().unwrap();
        assert_eq!(lat.params().get("u_5_1_m_e"), Some(0.273));
        assert_eq!((lat.n_valence_band(), lat.n_bands()), (0, 5));
        let model = lat.lattice().unwrap();
        assert_eq!(model.lattice_name, "Liu/Wu 5 bands 6NN model");
        assert_eq!(model.sublattices.len(), 1);
        assert_eq!(model.sublattices[0].orbitals, vec!["Modz2", "Modx2y2", "Modxy", "Modxz", "Modyz"]);
        for shell in ["h_2_m", "h_5_m", "h_6_m"] {
            assert!(model.hopping(&format!("{shell}-0-Mo-Mo")).is_some(), "{shell}");
        }

        // same shells as the Wu model, only the fifth shell differs
        let wu = ModelVariant::TmdNN256Meo.lattice().unwrap().lattice().unwrap();
        let k = arr1(&[0.0, 0.0]);
        let g = arr1(&[0.23, 0.11]);
        assert!(max_diff(&model.gen_ham(&g).unwrap(), &wu.gen_ham(&g).unwrap()) > 1e-6);
        let soc = lat.with_config(LatticeConfig::default().with_soc(true)).unwrap();
        assert_eq!(soc.lattice().unwrap().gen_ham(&k).unwrap().nrows(), 10);
    }

    #[test]
    fn test_band_counts() {
        let lat = ModelVariant::TmdNN12MeoXeo.lattice().unwrap();
        assert_eq!((lat.n_valence_band(), lat.n_bands()), (6, 11));
        let lat = lat.with_config(LatticeConfig::default().with_soc(true)).unwrap();
        assert_eq!((lat.n_valence_band(), lat.n_bands()), (13, 22));
        assert_eq!(lat.lattice().unwrap().norb(), 22);
    }

    #[test]
    fn test_spin_flip_model_is_hermitian() {
        let config = LatticeConfig::default().with_soc(true).with_soc_eo_flip(true);
        let lat = ModelVariant::TmdNN12MeoXeo
            .lattice()
            .unwrap()
            .with_config(config.clone())
            .unwrap();
        let flipped = lat.lattice().unwrap();
        let plain = lat.with_config(config.with_soc_eo_flip(false)).unwrap().lattice().unwrap();
        let k = arr1(&[0.31, -0.12]);
        let h = flipped.gen_ham(&k).unwrap();
        assert!(is_hermitian(&h));
        // the flip only couples opposite spins
        let n = 11;
        let diff = &h - &plain.gen_ham(&k).unwrap();
        assert!(diff.slice(ndarray::s![..n, ..n]).iter().all(|x| x.norm() < 1e-12));
        assert!(diff.slice(ndarray::s![..n, n..]).iter().any(|x| x.norm() > 1e-6));
    }

    #[test]
    fn test_spin_flip_needs_full_orbitals() {
        let config = LatticeConfig::default().with_soc(true).with_soc_eo_flip(true);
        let lat = ModelVariant::TmdNN2Me.lattice().unwrap().with_config(config).unwrap();
        assert!(matches!(lat.lattice(), Err(TbError::SpinFlipUnsupported { .. })));
    }

    #[test]
    fn test_single_orbital_matches_matrix_form() {
        let lat = ModelVariant::TmdNN12MeXe.lattice().unwrap();
        let config = LatticeConfig::default().with_soc(true);
        let matrix = lat.clone().with_config(config.clone()).unwrap().lattice().unwrap();
        let single = lat
            .with_config(config.with_single_orbital(true))
            .unwrap()
            .lattice()
            .unwrap();
        assert_eq!(single.sublattices.len(), 12);
        for k in [arr1(&[0.0, 0.0]), arr1(&[0.4, 0.15])] {
            let a = matrix.gen_ham(&k).unwrap();
            let b = single.gen_ham(&k).unwrap();
            assert!(max_diff(&a, &b) < 1e-12);
        }
    }

    #[test]
    fn test_fourth_shell_branches() {
        let model = ModelVariant::TmdNN123456MeoXeo.lattice().unwrap().lattice().unwrap();
        for branch in ["a", "b"] {
            for n in 0..3 {
                let name = format!("h_4_m{branch}-{n}-Mo-S");
                assert!(model.hopping(&name).is_some(), "{name}");
            }
        }
        assert!(model.hopping("h_6_c-2-S-S").is_some());
    }

    #[test]
    fn test_rectangular_cell_folds_primitive_bands() {
        let lat = ModelVariant::TmdNN123456MeoXeo
            .lattice()
            .unwrap()
            .with_config(LatticeConfig::default().with_soc(true).with_soc_eo_flip(true))
            .unwrap();
        let prim = lat.lattice().unwrap();
        let config = lat.config().clone().with_lat4(true);
        let rect = lat.with_config(config).unwrap().lattice().unwrap();
        assert_eq!(rect.norb(), 2 * prim.norb());

        let kk = [0.17, 0.43];
        let k = arr1(&[kk[0], (kk[1] - kk[0]) / 2.0]);
        let k2: Array1<f64> = &k + &arr1(&[0.0, 0.5]);
        let h4 = rect.gen_ham(&arr1(&kk)).unwrap();
        let h = prim.gen_ham(&k).unwrap();
        let h2 = prim.gen_ham(&k2).unwrap();
        for p in 1..=3 {
            let lhs = trace_pow(&h4, p);
            let rhs = trace_pow(&h, p) + trace_pow(&h2, p);
            assert!((lhs - rhs).norm() < 1e-8 * (1.0 + rhs.norm()), "p = {p}");
        }
    }
}
