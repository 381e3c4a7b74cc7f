//! Switches that shape an emitted lattice: spin-orbit coupling, the
//! rectangular cell and the single-orbital layout.
use serde::{Deserialize, Serialize};

use crate::error::{Result, TbError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Include spin-orbit coupling.
    pub soc: bool,
    /// Add the spin-flip term between even and odd orbitals.
    pub soc_eo_flip: bool,
    /// Keep only the spin sector given by `soc_sz`.
    pub soc_polarized: bool,
    /// Add the $S_z$ part $s_z\lambda\, i L_z$ to the onsite matrices.
    pub soc_sz_part: bool,
    /// Spin of the first sector.
    pub soc_sz: f64,
    /// Use the rectangular four-atom cell.
    pub lat4: bool,
    /// One sublattice per orbital instead of one per atom.
    pub single_orbital: bool,
    /// Override of the highest valence band index of the spinless cell.
    pub n_v: Option<usize>,
    /// Override of the band count of the spinless cell.
    pub n_b: Option<usize>,
    /// Override of the material name stored in the parameters.
    pub material: Option<String>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            soc: false,
            soc_eo_flip: false,
            soc_polarized: false,
            soc_sz_part: true,
            soc_sz: 1.0,
            lat4: false,
            single_orbital: false,
            n_v: None,
            n_b: None,
            material: None,
        }
    }
}

impl LatticeConfig {
    pub fn with_soc(mut self, soc: bool) -> Self {
        self.soc = soc;
        self
    }

    pub fn with_soc_eo_flip(mut self, flip: bool) -> Self {
        self.soc_eo_flip = flip;
        self
    }

    pub fn with_soc_polarized(mut self, polarized: bool) -> Self {
        self.soc_polarized = polarized;
        self
    }

    pub fn with_soc_sz_part(mut self, sz_part: bool) -> Self {
        self.soc_sz_part = sz_part;
        self
    }

    pub fn with_soc_sz(mut self, sz: f64) -> Result<Self> {
        self.soc_sz = sz;
        self.validate()?;
        Ok(self)
    }

    pub fn with_lat4(mut self, lat4: bool) -> Self {
        self.lat4 = lat4;
        self
    }

    pub fn with_single_orbital(mut self, single: bool) -> Self {
        self.single_orbital = single;
        self
    }

    pub fn with_bands(mut self, n_v: usize, n_b: usize) -> Self {
        self.n_v = Some(n_v);
        self.n_b = Some(n_b);
        self
    }

    pub fn with_material(mut self, material: &str) -> Result<Self> {
        self.material = Some(material.to_string());
        self.validate()?;
        Ok(self)
    }

    /// Reject values no lattice can be built from.
    pub fn validate(&self) -> Result<()> {
        if !self.soc_sz.is_finite() {
            return Err(TbError::InvalidConfig {
                field: "soc_sz",
                message: format!("{} is not a finite number", self.soc_sz),
            });
        }
        if let Some(material) = &self.material {
            split_material(material)?;
        }
        Ok(())
    }

    /// Spin up and spin down are both carried, doubling every block.
    pub fn soc_doubled_ham(&self) -> bool {
        self.soc && !self.soc_polarized
    }

    pub fn soc_eo_flip_used(&self) -> bool {
        self.soc && self.soc_eo_flip && !self.soc_polarized
    }

    /// Highest valence band index, counting both spins when doubled.
    pub fn n_valence_band(&self, n_v: usize) -> usize {
        let n_v = self.n_v.unwrap_or(n_v);
        if self.soc_doubled_ham() { (n_v + 1) * 2 - 1 } else { n_v }
    }

    pub fn n_bands(&self, n_b: usize) -> usize {
        let n_b = self.n_b.unwrap_or(n_b);
        if self.soc_doubled_ham() { 2 * n_b } else { n_b }
    }
}

/// Split a formula such as `MoS2` into the metal and chalcogen symbols.
///
/// Every capital letter starts a symbol which takes the lower-case letters
/// following it; anything else is skipped. Exactly two symbols are required.
pub fn split_material(name: &str) -> Result<(String, String)> {
    let mut symbols: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if let Some(s) = current.take() {
                symbols.push(s);
            }
            current = Some(ch.to_string());
        } else if ch.is_ascii_lowercase() {
            if let Some(s) = current.as_mut() {
                s.push(ch);
            }
        } else if let Some(s) = current.take() {
            symbols.push(s);
        }
    }
    if let Some(s) = current {
        symbols.push(s);
    }
    match <[String; 2]>::try_from(symbols) {
        Ok([metal, chalcogen]) => Ok((metal, chalcogen)),
        Err(_) => Err(TbError::InvalidMaterialName(name.to_string())),
    }
}
