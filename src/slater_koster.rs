//! Slater-Koster transform: two-center integrals to symmetry-adapted coefficients.
//!
//! Every function here works on `Option<f64>`. A coefficient that needs an
//! undefined integral is itself undefined. Coefficients that vanish by
//! symmetry are `Some(0.0)` as soon as one integral of the same shell and
//! parity is known, so "zero by symmetry" stays distinct from "unknown".
//!
//! The geometry enters through the ratio $r/\tan\theta$, where $\theta$ is the
//! angle between the metal plane and the metal-chalcogen bond. Without a
//! defined `theta` the undistorted value $\tan\theta=\sqrt{3/4}$ is used.
use crate::params::ParameterSet;

/// Slater-Koster two-center integrals of one neighbour shell and one parity.
///
/// The parameters follow the standard Slater-Koster notation; the `_tb`
/// pair are the additional $pp$ integrals between the two chalcogen layers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkParams {
    /// $V_{pp\sigma}$
    pub v_pp_sigma: Option<f64>,
    /// $V_{pp\pi}$
    pub v_pp_pi: Option<f64>,
    /// $V_{pp\sigma}$ between top and bottom chalcogen
    pub v_pp_sigma_tb: Option<f64>,
    /// $V_{pp\pi}$ between top and bottom chalcogen
    pub v_pp_pi_tb: Option<f64>,
    /// $V_{dd\sigma}$
    pub v_dd_sigma: Option<f64>,
    /// $V_{dd\pi}$
    pub v_dd_pi: Option<f64>,
    /// $V_{dd\delta}$
    pub v_dd_delta: Option<f64>,
    /// $V_{pd\sigma}$
    pub v_pd_sigma: Option<f64>,
    /// $V_{pd\pi}$
    pub v_pd_pi: Option<f64>,
}

impl SkParams {
    /// Read the integrals `v_{shell}_{parity}_*` from `set`.
    pub fn from_set(set: &ParameterSet, shell: u8, parity: char) -> Self {
        let g = |name: &str| set.get(&format!("v_{shell}_{parity}_{name}"));
        SkParams {
            v_pp_sigma: g("pps"),
            v_pp_pi: g("ppp"),
            v_pp_sigma_tb: g("pps_tb"),
            v_pp_pi_tb: g("ppp_tb"),
            v_dd_sigma: g("dds"),
            v_dd_pi: g("ddp"),
            v_dd_delta: g("ddd"),
            v_pd_sigma: g("pds"),
            v_pd_pi: g("pdp"),
        }
    }
}

/// Sum of the defined terms, undefined when none is defined.
pub fn comb(terms: &[Option<f64>]) -> Option<f64> {
    terms.iter().flatten().copied().reduce(|a, b| a + b)
}

/// `a - b` with the same rule as [`comb`].
pub fn subtract(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    comb(&[a, b.map(|x| -x)])
}

fn zero_if(defined: bool) -> Option<f64> {
    defined.then_some(0.0)
}

/// $dd$ hopping along a shell axis, even parity: `[u0, u1, u2, u3, u4, u5]`.
pub fn mm_x_e(p: &SkParams) -> [Option<f64>; 6] {
    let sd = p.v_dd_sigma.zip(p.v_dd_delta);
    let any = sd.is_some() || p.v_dd_pi.is_some();
    let s3 = 3f64.sqrt();
    [
        sd.map(|(s, d)| 0.25 * (s + 3.0 * d)),
        sd.map(|(s, d)| s3 / 4.0 * (-s + d)),
        zero_if(any),
        sd.map(|(s, d)| 0.25 * (3.0 * s + d)),
        zero_if(any),
        p.v_dd_pi,
    ]
}

/// Fifth-shell form of [`mm_x_e`]: `[u0, u1, u3, u5, u6]`.
pub fn mm_y_e(p: &SkParams) -> [Option<f64>; 5] {
    let sd = p.v_dd_sigma.zip(p.v_dd_delta);
    let s3 = 3f64.sqrt();
    [
        sd.map(|(s, d)| 0.25 * (s + 3.0 * d)),
        sd.map(|(s, d)| s3 / 4.0 * (-s + d)),
        sd.map(|(s, d)| 0.25 * (3.0 * s + d)),
        p.v_dd_pi,
        sd.map(|(s, d)| s3 / 4.0 * (-s + d)),
    ]
}

/// Odd parity $dd$ hopping: `[u0, u1, u2]`.
pub fn mm_x_o(p: &SkParams) -> [Option<f64>; 3] {
    [
        p.v_dd_pi,
        zero_if(p.v_dd_pi.is_some() || p.v_dd_delta.is_some()),
        p.v_dd_delta,
    ]
}

/// Fifth-shell form of [`mm_x_o`]: `[u0, u2]`.
pub fn mm_y_o(p: &SkParams) -> [Option<f64>; 2] {
    [p.v_dd_pi, p.v_dd_delta]
}

/// The angle-dependent part of the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlaterKoster {
    tan_theta: f64,
}

impl Default for SlaterKoster {
    fn default() -> Self {
        SlaterKoster::new(None)
    }
}

/// Interlayer corrections shared by the $pp$ transforms.
struct TbTerms {
    pps_tb: f64,
    ppp_tb: f64,
    /// $r^2 (V^{tb}_{pp\pi}-V^{tb}_{pp\sigma}) / (r^2+4\tan^2\theta)$
    axial: f64,
    /// $2 r\tan\theta (V^{tb}_{pp\pi}-V^{tb}_{pp\sigma}) / (r^2+4\tan^2\theta)$
    mixed: f64,
}

impl SlaterKoster {
    pub fn new(theta: Option<f64>) -> Self {
        let tan_theta = theta.map_or((3.0f64 / 4.0).sqrt(), f64::tan);
        SlaterKoster { tan_theta }
    }

    pub fn tan_theta(&self) -> f64 {
        self.tan_theta
    }

    fn tb_terms(&self, r: f64, p: &SkParams) -> Option<TbTerms> {
        let (pps_tb, ppp_tb) = p.v_pp_sigma_tb.zip(p.v_pp_pi_tb)?;
        let t = self.tan_theta;
        let diff = (ppp_tb - pps_tb) / (r * r + 4.0 * t * t);
        Some(TbTerms {
            pps_tb,
            ppp_tb,
            axial: r * r * diff,
            mixed: 2.0 * t * r * diff,
        })
    }

    fn pp_any(p: &SkParams) -> bool {
        p.v_pp_sigma.is_some() || p.v_pp_pi.is_some() || p.v_pp_sigma_tb.is_some() || p.v_pp_pi_tb.is_some()
    }

    /// Chalcogen $p$ hopping, even parity: `[u0, u1, u2, u3, u4, u5]`.
    pub fn xx_x_e(&self, r: f64, p: &SkParams) -> [Option<f64>; 6] {
        let tb = self.tb_terms(r, p);
        let zero = zero_if(Self::pp_any(p));
        [
            comb(&[p.v_pp_sigma, tb.as_ref().map(|t| t.ppp_tb), tb.as_ref().map(|t| -t.axial)]),
            zero,
            tb.as_ref().map(|t| -t.mixed),
            comb(&[p.v_pp_pi, tb.as_ref().map(|t| t.ppp_tb)]),
            zero,
            comb(&[p.v_pp_pi, tb.as_ref().map(|t| -t.pps_tb), tb.as_ref().map(|t| -t.axial)]),
        ]
    }

    /// Fifth-shell even form: `[u0, u2, u3, u5, u6]`.
    pub fn xx_y_e(&self, r: f64, p: &SkParams) -> [Option<f64>; 5] {
        let [u0, _, u2, u3, _, u5] = self.xx_x_e(r, p);
        let u6 = self.tb_terms(r, p).map(|t| t.mixed);
        [u0, u2, u3, u5, u6]
    }

    /// Chalcogen $p$ hopping, odd parity: `[u0, u1, u2, u3, u4, u5]`.
    pub fn xx_x_o(&self, r: f64, p: &SkParams) -> [Option<f64>; 6] {
        let tb = self.tb_terms(r, p);
        let zero = zero_if(Self::pp_any(p));
        [
            comb(&[p.v_pp_sigma, tb.as_ref().map(|t| -t.ppp_tb), tb.as_ref().map(|t| t.axial)]),
            zero,
            tb.as_ref().map(|t| -t.mixed),
            comb(&[p.v_pp_pi, tb.as_ref().map(|t| -t.ppp_tb)]),
            zero,
            comb(&[p.v_pp_pi, tb.as_ref().map(|t| t.pps_tb), tb.as_ref().map(|t| t.axial)]),
        ]
    }

    /// Fifth-shell odd form: `[u0, u2, u3, u5, u6]`.
    pub fn xx_y_o(&self, r: f64, p: &SkParams) -> [Option<f64>; 5] {
        let [u0, _, _, u3, _, u5] = self.xx_x_o(r, p);
        let tb = self.tb_terms(r, p);
        [
            u0,
            tb.as_ref().map(|t| t.mixed),
            u3,
            u5,
            tb.as_ref().map(|t| -t.mixed),
        ]
    }

    /// Metal to chalcogen $pd$ hopping, even parity: `[u0, u1, u2, u3, u4]`.
    ///
    /// Both $V_{pd\sigma}$ and $V_{pd\pi}$ are needed.
    pub fn mx_e(&self, r: f64, p: &SkParams) -> [Option<f64>; 5] {
        let Some((pds, pdp)) = p.v_pd_sigma.zip(p.v_pd_pi) else {
            return [None; 5];
        };
        let t = self.tan_theta;
        let (s2, s3) = (2f64.sqrt(), 3f64.sqrt());
        let r2 = r * r;
        let t2 = t * t;
        let norm = s2 * (r2 + t2).powf(1.5);
        [
            Some(s2 * r * pdp / (r2 + t2).sqrt()),
            Some(-r * (2.0 * s3 * t2 * pdp + (r2 - 2.0 * t2) * pds) / norm),
            Some(-r * (2.0 * t2 * pdp + s3 * r2 * pds) / norm),
            Some(t * (2.0 * s3 * r2 * pdp + (2.0 * t2 - r2) * pds) / norm),
            Some(r2 * t * (2.0 * pdp - s3 * pds) / norm),
        ]
    }

    /// Metal to chalcogen $pd$ hopping, odd parity: `[u0, u1, u2]`.
    pub fn mx_o(&self, r: f64, p: &SkParams) -> [Option<f64>; 3] {
        let Some((pds, pdp)) = p.v_pd_sigma.zip(p.v_pd_pi) else {
            return [None; 3];
        };
        let t = self.tan_theta;
        let (s2, s3) = (2f64.sqrt(), 3f64.sqrt());
        let r2 = r * r;
        let t2 = t * t;
        let norm = (r2 + t2).powf(1.5);
        [
            Some(s2 * t * pdp / (r2 + t2).sqrt()),
            Some(s2 * t * ((t2 - r2) * pdp + s3 * r2 * pds) / norm),
            Some(s2 * r * ((r2 - t2) * pdp + s3 * t2 * pds) / norm),
        ]
    }
}

/// Geometric ratio $r$ of the metal-chalcogen shells 1, 3 and 4.
fn mx_ratio(shell: u8) -> f64 {
    match shell {
        1 => -1.0,
        3 => 2.0,
        _ => -(7f64.sqrt()),
    }
}

fn put<const N: usize>(
    out: &mut Vec<(String, Option<f64>)>,
    shell: u8,
    index: [u8; N],
    suffix: &str,
    values: [Option<f64>; N],
) {
    for (i, v) in index.into_iter().zip(values) {
        out.push((format!("u_{shell}_{i}_{suffix}"), v));
    }
}

/// Refresh the protected `eps_*` / `u_*` keys of a Slater-Koster set.
pub(crate) fn recalculate(set: &mut ParameterSet) {
    let sk = SlaterKoster::new(set.get("theta"));
    let g = |k: &str| set.get(k);
    let mut out: Vec<(String, Option<f64>)> = vec![
        ("eps_0_x_e".into(), comb(&[g("delta_p"), g("v_0_ppp")])),
        ("eps_1_x_e".into(), subtract(g("delta_z"), g("v_0_pps"))),
        ("eps_0_x_o".into(), subtract(g("delta_p"), g("v_0_ppp"))),
        ("eps_1_x_o".into(), comb(&[g("delta_z"), g("v_0_pps")])),
        ("eps_0_m_e".into(), g("delta_0")),
        ("eps_1_m_e".into(), g("delta_2")),
        ("eps_0_m_o".into(), g("delta_1")),
    ];

    for shell in [1, 3, 4] {
        let r = mx_ratio(shell);
        let even = SkParams::from_set(set, shell, 'e');
        let odd = SkParams::from_set(set, shell, 'o');
        put(&mut out, shell, [0, 1, 2, 3, 4], "m_e", sk.mx_e(r, &even));
        put(&mut out, shell, [0, 1, 2], "m_o", sk.mx_o(r, &odd));
    }

    let r = 3f64.sqrt();
    for shell in [2, 6] {
        let even = SkParams::from_set(set, shell, 'e');
        let odd = SkParams::from_set(set, shell, 'o');
        put(&mut out, shell, [0, 1, 2, 3, 4, 5], "m_e", mm_x_e(&even));
        put(&mut out, shell, [0, 1, 2], "m_o", mm_x_o(&odd));
        put(&mut out, shell, [0, 1, 2, 3, 4, 5], "x_e", sk.xx_x_e(r, &even));
        put(&mut out, shell, [0, 1, 2, 3, 4, 5], "x_o", sk.xx_x_o(r, &odd));
    }

    let even = SkParams::from_set(set, 5, 'e');
    // the odd fifth shell takes its sigma interlayer integral from the even slot
    let odd = SkParams {
        v_pp_sigma_tb: even.v_pp_sigma_tb,
        ..SkParams::from_set(set, 5, 'o')
    };
    put(&mut out, 5, [0, 1, 3, 5, 6], "m_e", mm_y_e(&even));
    put(&mut out, 5, [0, 2], "m_o", mm_y_o(&odd));
    put(&mut out, 5, [0, 2, 3, 5, 6], "x_e", sk.xx_y_e(3.0, &even));
    put(&mut out, 5, [0, 2, 3, 5, 6], "x_o", sk.xx_y_o(3.0, &odd));

    for (key, value) in out {
        set.store_float(&key, value);
    }
}

/// Copy the parity-free integrals of a simple set into both parity slots.
///
/// $V_{dd\sigma}$ only exists for even parity.
pub(crate) fn broadcast_simple(set: &mut ParameterSet) {
    let mut out: Vec<(String, Option<f64>)> = Vec::new();
    for n in [1, 3, 4] {
        for i in ["s", "p"] {
            let v = set.get(&format!("v_{n}_pd{i}"));
            for r in ["e", "o"] {
                out.push((format!("v_{n}_{r}_pd{i}"), v));
            }
        }
    }
    for n in [2, 5, 6] {
        out.push((format!("v_{n}_e_dds"), set.get(&format!("v_{n}_dds"))));
        for i in ["p", "d"] {
            let v = set.get(&format!("v_{n}_dd{i}"));
            for r in ["e", "o"] {
                out.push((format!("v_{n}_{r}_dd{i}"), v));
            }
        }
        for i in ["s", "p"] {
            for t in ["", "_tb"] {
                let v = set.get(&format!("v_{n}_pp{i}{t}"));
                for r in ["e", "o"] {
                    out.push((format!("v_{n}_{r}_pp{i}{t}"), v));
                }
            }
        }
    }
    for (key, value) in out {
        set.store_float(&key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterStyle;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-12)
    }

    #[test]
    fn test_comb() {
        assert_eq!(comb(&[None, None]), None);
        assert_eq!(comb(&[Some(1.0), None, Some(2.5)]), Some(3.5));
        assert_eq!(subtract(None, Some(2.0)), Some(-2.0));
        assert_eq!(subtract(None, None), None);
    }

    #[test]
    fn test_default_angle() {
        assert!((SlaterKoster::default().tan_theta() - 0.75f64.sqrt()).abs() < 1e-15);
        assert!((SlaterKoster::new(Some(0.5)).tan_theta() - 0.5f64.tan()).abs() < 1e-15);
    }

    #[test]
    fn test_mm_even_values() {
        let p = SkParams {
            v_dd_sigma: Some(1.0),
            v_dd_pi: Some(2.0),
            v_dd_delta: Some(3.0),
            ..Default::default()
        };
        let u = mm_x_e(&p);
        assert!(close(u[0], 2.5));
        assert!(close(u[1], 3f64.sqrt() / 2.0));
        assert_eq!(u[2], Some(0.0));
        assert!(close(u[3], 1.5));
        assert_eq!(u[4], Some(0.0));
        assert_eq!(u[5], Some(2.0));
        let y = mm_y_e(&p);
        assert_eq!([y[0], y[1], y[2], y[3]], [u[0], u[1], u[3], u[5]]);
        assert_eq!(y[4], u[1]);
    }

    #[test]
    fn test_structural_zero_needs_a_sibling() {
        assert_eq!(mm_x_e(&SkParams::default()), [None; 6]);
        assert_eq!(mm_x_o(&SkParams::default()), [None; 3]);
        let only_delta = SkParams {
            v_dd_delta: Some(1.0),
            ..Default::default()
        };
        assert_eq!(mm_x_o(&only_delta), [None, Some(0.0), Some(1.0)]);
        let sk = SlaterKoster::default();
        assert_eq!(sk.xx_x_e(3f64.sqrt(), &SkParams::default()), [None; 6]);
    }

    #[test]
    fn test_pp_without_interlayer_terms() {
        let p = SkParams {
            v_pp_sigma: Some(0.7),
            v_pp_pi: Some(-0.2),
            ..Default::default()
        };
        let sk = SlaterKoster::default();
        let e = sk.xx_x_e(3f64.sqrt(), &p);
        assert_eq!(e, [Some(0.7), Some(0.0), None, Some(-0.2), Some(0.0), Some(-0.2)]);
        let o = sk.xx_y_o(3.0, &p);
        assert_eq!(o, [Some(0.7), None, Some(-0.2), Some(-0.2), None]);
    }

    #[test]
    fn test_interlayer_terms_need_both_integrals() {
        let sk = SlaterKoster::default();
        let half = SkParams {
            v_pp_sigma_tb: Some(0.4),
            ..Default::default()
        };
        let u = sk.xx_x_e(3.0, &half);
        assert_eq!(u, [None, Some(0.0), None, None, Some(0.0), None]);

        let full = SkParams {
            v_pp_sigma_tb: Some(0.4),
            v_pp_pi_tb: Some(-0.1),
            ..Default::default()
        };
        let r = 3.0;
        let t = sk.tan_theta();
        let diff = (-0.1 - 0.4) / (r * r + 4.0 * t * t);
        let e = sk.xx_y_e(r, &full);
        let o = sk.xx_y_o(r, &full);
        assert!(close(e[0], -0.1 - r * r * diff));
        assert!(close(e[1], -2.0 * t * r * diff));
        assert!(close(e[4], 2.0 * t * r * diff));
        assert!(close(o[0], 0.1 + r * r * diff));
        assert!(close(o[1], 2.0 * t * r * diff));
        assert!(close(o[3], 0.4 + r * r * diff));
    }

    #[test]
    fn test_pd_needs_both_integrals() {
        let sk = SlaterKoster::default();
        let p = SkParams {
            v_pd_sigma: Some(-3.0),
            ..Default::default()
        };
        assert_eq!(sk.mx_e(-1.0, &p), [None; 5]);
        assert_eq!(sk.mx_o(-1.0, &p), [None; 3]);
    }

    #[test]
    fn test_pd_pure_pi() {
        // with only the pi integral the even u0 reduces to sqrt(2) r V / sqrt(r^2+t^2)
        let sk = SlaterKoster::default();
        let p = SkParams {
            v_pd_sigma: Some(0.0),
            v_pd_pi: Some(1.0),
            ..Default::default()
        };
        let t2: f64 = 0.75;
        let e = sk.mx_e(2.0, &p);
        assert!(close(e[0], 2f64.sqrt() * 2.0 / (4.0 + t2).sqrt()));
        let o = sk.mx_o(2.0, &p);
        assert!(close(o[0], 2f64.sqrt() * t2.sqrt() / (4.0 + t2).sqrt()));
    }

    #[test]
    fn test_onsite_recalculation() {
        let (set, _) = ParameterSet::from_mapping(
            ParameterStyle::SlaterKoster,
            vec![("delta_p", -1.0), ("v_0_ppp", 0.5), ("delta_z", 2.0), ("delta_0", 0.3)],
        );
        assert_eq!(set.get("eps_0_x_e"), Some(-0.5));
        assert_eq!(set.get("eps_0_x_o"), Some(-1.5));
        assert_eq!(set.get("eps_1_x_e"), Some(2.0));
        assert_eq!(set.get("eps_1_x_o"), Some(2.0));
        assert_eq!(set.get("eps_0_m_e"), Some(0.3));
        assert_eq!(set.get("eps_0_m_o"), None);
    }

    #[test]
    fn test_only_ddp_leaves_second_shell_undefined() {
        let (set, _) = ParameterSet::from_mapping(ParameterStyle::SlaterKosterSimple, vec![("v_2_ddp", 0.25)]);
        for key in ["u_2_0_m_e", "u_2_1_m_e", "u_2_3_m_e"] {
            assert_eq!(set.get(key), None, "{key}");
        }
        assert_eq!(set.get("u_2_2_m_e"), Some(0.0));
        assert_eq!(set.get("u_2_4_m_e"), Some(0.0));
        assert_eq!(set.get("u_2_5_m_e"), Some(0.25));
        assert_eq!(set.get("u_2_0_m_o"), Some(0.25));
        assert_eq!(set.get("u_2_2_m_o"), None);
    }

    #[test]
    fn test_simple_broadcast() {
        let (set, _) = ParameterSet::from_mapping(
            ParameterStyle::SlaterKosterSimple,
            vec![("v_1_pds", -2.0), ("v_5_dds", 0.1), ("v_6_pps_tb", 0.3)],
        );
        assert_eq!(set.get("v_1_e_pds"), Some(-2.0));
        assert_eq!(set.get("v_1_o_pds"), Some(-2.0));
        assert_eq!(set.get("v_5_e_dds"), Some(0.1));
        assert!(!set.contains("v_5_o_dds"));
        assert_eq!(set.get("v_6_e_pps_tb"), Some(0.3));
        assert_eq!(set.get("v_6_o_pps_tb"), Some(0.3));
        // a single pd integral is not enough for the metal-chalcogen block
        assert_eq!(set.get("u_1_0_m_e"), None);
    }

    #[test]
    fn test_fourth_shell_ratio() {
        assert!((mx_ratio(4) + 7f64.sqrt()).abs() < 1e-15);
        assert_eq!(mx_ratio(1), -1.0);
        assert_eq!(mx_ratio(3), 2.0);
    }
}
