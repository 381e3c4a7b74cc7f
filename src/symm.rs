//! Point-group representations of the orbitals.
//!
//! For a hopping $H$ from orbital group $A$ to $B$ along one bond, the bonds
//! rotated by $2\pi/3$ and $4\pi/3$ carry
//! $$U_B H U_A^T \quad\text{and}\quad U_B^T H U_A,$$
//! where $U$ is [`AtomOrbitals::ur`]. Only one matrix per shell is ever
//! computed from the parameters; the other two are obtained this way.
use std::f64::consts::PI;

use ndarray::Array2;

use crate::math::rot_mat;
use crate::orbitals::{AtomKind, AtomOrbitals, LatticeOrbitals};

impl AtomOrbitals {
    /// Place `pair(|l|, sign)` on every two-member group and `single` on the
    /// diagonal of every one-member group.
    fn make_matrix<F>(&self, pair: F, single: f64) -> Array2<f64>
    where
        F: Fn(i32, i32) -> Array2<f64>,
    {
        let n = self.len();
        let mut value = Array2::<f64>::zeros((n, n));
        for members in self.groups() {
            // only reachable with a group vector that failed validation
            if members.iter().any(|k| *k >= n) {
                continue;
            }
            let first = self.l()[members[0]];
            let sign = if first < 0 { -1 } else { 1 };
            if members.len() == 2 {
                let m = pair(first.abs(), sign);
                for (ik, k) in members.iter().enumerate() {
                    for (ikk, kk) in members.iter().enumerate() {
                        value[[*k, *kk]] = m[[ik, ikk]];
                    }
                }
            } else {
                for k in members {
                    value[[k, k]] = single;
                }
            }
        }
        value
    }

    /// Rotation by `angle` on every orbital: $R(\text{angle}\cdot|l|)$ per pair,
    /// transposed for a pair listed as $(-l, +l)$ and again when clockwise.
    pub fn ur_angle(&self, angle: f64, clockwise: bool) -> Array2<f64> {
        self.make_matrix(
            |lm, sign| {
                let mut u = rot_mat(angle * lm as f64);
                if sign == -1 {
                    u = u.reversed_axes();
                }
                if clockwise {
                    u = u.reversed_axes();
                }
                u
            },
            1.0,
        )
    }

    /// Rotation over $2\pi/3$.
    pub fn ur(&self, clockwise: bool) -> Array2<f64> {
        self.ur_angle(2.0 * PI / 3.0, clockwise)
    }

    /// Mirror in the $yz$ plane.
    pub fn sr(&self) -> Array2<f64> {
        self.make_matrix(
            |lm, sign| {
                let s = f64::from(sign) * if lm == 1 { 1.0 } else { -1.0 };
                Array2::from_diag(&ndarray::arr1(&[-s, s]))
            },
            1.0,
        )
    }

    /// Orbital angular momentum $L_z$ in the real basis, $\frac{l}{2}\begin{pmatrix}0&-1\\\\1&0\end{pmatrix}$
    /// per pair and $0$ for $l=0$.
    pub fn s_h(&self) -> Array2<f64> {
        self.make_matrix(
            |lm, sign| {
                let h = f64::from(lm) / 2.0;
                let m = ndarray::array![[0.0, -h], [h, 0.0]];
                if sign == -1 { m.reversed_axes() } else { m }
            },
            0.0,
        )
    }
}

impl LatticeOrbitals {
    pub fn ur(&self, atom: AtomKind) -> Option<Array2<f64>> {
        self.get(atom).map(|o| o.ur(self.clockwise))
    }

    pub fn ur_angle(&self, atom: AtomKind, angle: f64) -> Option<Array2<f64>> {
        self.get(atom).map(|o| o.ur_angle(angle, self.clockwise))
    }

    pub fn sr(&self, atom: AtomKind) -> Option<Array2<f64>> {
        self.get(atom).map(AtomOrbitals::sr)
    }

    pub fn s_h(&self, atom: AtomKind) -> Option<Array2<f64>> {
        self.get(atom).map(AtomOrbitals::s_h)
    }
}

/// The three symmetry-related partners $(H, U_B H U_A^T, U_B^T H U_A)$.
pub fn rotated_triple(h: &Array2<f64>, ur_to: &Array2<f64>, ur_from: &Array2<f64>) -> [Array2<f64>; 3] {
    [
        h.clone(),
        ur_to.dot(h).dot(&ur_from.t()),
        ur_to.t().dot(h).dot(ur_from),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn metal() -> AtomOrbitals {
        AtomOrbitals::new(vec![0, 2, -2, 1, -1], vec!["dz2", "dx2y2", "dxy", "dxz", "dyz"])
            .with_group(vec![0, 1, 1, 2, 2])
    }

    fn small(a: &Array2<f64>) -> bool {
        a.iter().all(|x| x.abs() < 1e-12)
    }

    #[test]
    fn test_ur_is_orthogonal_of_order_three() {
        let u = metal().ur(false);
        let eye = Array2::<f64>::eye(5);
        assert!(small(&(u.dot(&u.t()) - &eye)));
        assert!(small(&(u.dot(&u).dot(&u) - &eye)));
        assert_eq!(u[[0, 0]], 1.0);
    }

    #[test]
    fn test_ur_pair_block() {
        let u = metal().ur(false);
        let c = (4.0 * PI / 3.0).cos();
        let s = (4.0 * PI / 3.0).sin();
        assert!((u[[1, 1]] - c).abs() < 1e-14);
        assert!((u[[1, 2]] + s).abs() < 1e-14);
        assert!((u[[2, 1]] - s).abs() < 1e-14);
        // clockwise is the inverse rotation
        let cw = metal().ur(true);
        assert!(small(&(cw - u.t())));
    }

    #[test]
    fn test_negative_member_first_transposes() {
        let plus = AtomOrbitals::new(vec![1, -1], vec!["px", "py"]);
        let minus = AtomOrbitals::new(vec![-1, 1], vec!["py", "px"]);
        assert!(small(&(minus.ur(false) - plus.ur(false).t())));
    }

    #[test]
    fn test_mirror_inverts_rotation() {
        let m = metal();
        let u = m.ur(false);
        let sr = m.sr();
        assert!(small(&(sr.dot(&u).dot(&sr) - u.t())));
        assert_eq!(sr[[3, 3]], -1.0);
        assert_eq!(sr[[1, 1]], 1.0);
    }

    #[test]
    fn test_spin_operator() {
        let sh = metal().s_h();
        assert_eq!(sh[[0, 0]], 0.0);
        assert_eq!(sh[[1, 2]], -1.0);
        assert_eq!(sh[[2, 1]], 1.0);
        assert_eq!(sh[[3, 4]], -0.5);
        assert!(small(&(&sh + &sh.t())));
        // L_z commutes with rotations about z
        let u = metal().ur(false);
        assert!(small(&(sh.dot(&u) - u.dot(&sh))));
    }

    #[test]
    fn test_rotated_triple_cycles() {
        let m = metal();
        let u = m.ur(false);
        let h = array![
            [1.0, 0.2, 0.3, 0.0, 0.0],
            [0.1, 2.0, 0.5, 0.0, 0.0],
            [0.4, 0.6, 3.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.7, 0.8],
            [0.0, 0.0, 0.0, 0.9, 1.1]
        ];
        let [h0, h1, h2] = rotated_triple(&h, &u, &u);
        // rotating the second bond once more gives the third
        assert!(small(&(u.dot(&h1).dot(&u.t()) - &h2)));
        assert!(small(&(u.dot(&h2).dot(&u.t()) - &h0)));
    }

    #[test]
    fn test_arbitrary_angle() {
        let m = metal();
        assert!(small(&(m.ur_angle(2.0 * PI / 3.0, false) - m.ur(false))));
        assert!(small(&(m.ur_angle(0.0, false) - Array2::<f64>::eye(5))));
    }
}
