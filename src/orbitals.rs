//! Orbital descriptors: which orbitals sit on the metal and on the chalcogen,
//! with their angular momentum $l$ and the group that shares one
//! representation of the threefold rotation.
use serde::{Deserialize, Serialize};

use crate::error::{Result, TbError};

/// The two atom types of an $MX_2$ monolayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum AtomKind {
    /// Transition metal, `M`.
    Metal,
    /// Chalcogen, `X`.
    Chalcogen,
}

impl AtomKind {
    pub const ALL: [AtomKind; 2] = [AtomKind::Metal, AtomKind::Chalcogen];

    /// Letter used in block names: `h_0_m`, `h_2_c`.
    pub fn tag(self) -> char {
        match self {
            AtomKind::Metal => 'm',
            AtomKind::Chalcogen => 'c',
        }
    }
}

/// Orbitals of one atom.
///
/// `l[i]` is the magnetic quantum number of orbital `i` and `orbs[i]` its
/// label. Orbitals sharing a `group` id form one two-dimensional
/// representation $\{+l, -l\}$; a lone orbital must have $l=0$. Without an
/// explicit grouping orbitals are grouped by $|l|$.
///
/// Deserialized values are checked the same way as [`LatticeOrbitals::new`]
/// checks them, a malformed descriptor never reaches the operators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawAtomOrbitals")]
pub struct AtomOrbitals {
    l: Vec<i32>,
    orbs: Vec<String>,
    group: Vec<usize>,
}

impl AtomOrbitals {
    pub fn new<S: Into<String>>(l: Vec<i32>, orbs: Vec<S>) -> Self {
        let group = l.iter().map(|x| x.unsigned_abs() as usize).collect();
        AtomOrbitals {
            l,
            orbs: orbs.into_iter().map(Into::into).collect(),
            group,
        }
    }

    pub fn with_group(mut self, group: Vec<usize>) -> Self {
        self.group = group;
        self
    }

    pub fn len(&self) -> usize {
        self.l.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }

    pub fn l(&self) -> &[i32] {
        &self.l
    }

    pub fn orbs(&self) -> &[String] {
        &self.orbs
    }

    pub fn group(&self) -> &[usize] {
        &self.group
    }

    /// Member indices of every group, in order of first appearance.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut ids: Vec<usize> = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::new();
        for (i, g) in self.group.iter().enumerate() {
            match ids.iter().position(|x| x == g) {
                Some(j) => members[j].push(i),
                None => {
                    ids.push(*g);
                    members.push(vec![i]);
                }
            }
        }
        members
    }

    pub(crate) fn validate(&self, atom: AtomKind) -> Result<()> {
        self.check()
            .map_err(|message| TbError::InvalidOrbitals { atom, message })
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.orbs.len() != self.l.len() {
            return Err(format!(
                "{} orbital labels for {} l-values",
                self.orbs.len(),
                self.l.len()
            ));
        }
        if self.group.len() != self.l.len() {
            return Err(format!(
                "{} group ids for {} l-values",
                self.group.len(),
                self.l.len()
            ));
        }
        for members in self.groups() {
            match members.as_slice() {
                [i] if self.l[*i] == 0 => {}
                [i] => {
                    return Err(format!(
                        "orbital '{}' with l = {} has no partner with l = {}",
                        self.orbs[*i],
                        self.l[*i],
                        -self.l[*i]
                    ));
                }
                [i, j] if self.l[*i] != 0 && self.l[*i] == -self.l[*j] => {}
                [i, j] => {
                    return Err(format!(
                        "orbitals '{}' and '{}' have l = {} and {}, a pair needs opposite non-zero l",
                        self.orbs[*i], self.orbs[*j], self.l[*i], self.l[*j]
                    ));
                }
                _ => {
                    return Err(format!(
                        "a representation holds at most two orbitals, {} given",
                        members.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawAtomOrbitals {
    l: Vec<i32>,
    orbs: Vec<String>,
    group: Option<Vec<usize>>,
}

impl TryFrom<RawAtomOrbitals> for AtomOrbitals {
    type Error = String;

    fn try_from(raw: RawAtomOrbitals) -> std::result::Result<Self, String> {
        let mut orbitals = AtomOrbitals::new(raw.l, raw.orbs);
        if let Some(group) = raw.group {
            orbitals.group = group;
        }
        orbitals.check()?;
        Ok(orbitals)
    }
}

/// Validated orbitals of both atoms of a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawLatticeOrbitals")]
pub struct LatticeOrbitals {
    metal: Option<AtomOrbitals>,
    chalcogen: Option<AtomOrbitals>,
    /// Use clockwise rotation matrices.
    pub clockwise: bool,
}

impl LatticeOrbitals {
    pub fn new(metal: Option<AtomOrbitals>, chalcogen: Option<AtomOrbitals>) -> Result<Self> {
        if let Some(m) = &metal {
            m.validate(AtomKind::Metal)?;
        }
        if let Some(c) = &chalcogen {
            c.validate(AtomKind::Chalcogen)?;
        }
        Ok(LatticeOrbitals {
            metal,
            chalcogen,
            clockwise: false,
        })
    }

    /// Check both atoms again, reporting the first malformed one.
    pub fn validate(&self) -> Result<()> {
        for atom in AtomKind::ALL {
            if let Some(orbitals) = self.get(atom) {
                orbitals.validate(atom)?;
            }
        }
        Ok(())
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn get(&self, atom: AtomKind) -> Option<&AtomOrbitals> {
        match atom {
            AtomKind::Metal => self.metal.as_ref(),
            AtomKind::Chalcogen => self.chalcogen.as_ref(),
        }
    }

    /// Number of orbitals on `atom`, zero when the atom carries none.
    pub fn norb(&self, atom: AtomKind) -> usize {
        self.get(atom).map_or(0, AtomOrbitals::len)
    }
}

#[derive(Deserialize)]
struct RawLatticeOrbitals {
    metal: Option<AtomOrbitals>,
    chalcogen: Option<AtomOrbitals>,
    #[serde(default)]
    clockwise: bool,
}

impl TryFrom<RawLatticeOrbitals> for LatticeOrbitals {
    type Error = TbError;

    fn try_from(raw: RawLatticeOrbitals) -> Result<Self> {
        Ok(LatticeOrbitals::new(raw.metal, raw.chalcogen)?.with_clockwise(raw.clockwise))
    }
}
