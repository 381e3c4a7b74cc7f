//! Named tight-binding parameters with "undefined" semantics.
//!
//! A [`ParameterSet`] holds every key of one parameterisation style. The keys
//! are split into three partitions:
//!
//! - *general*: lattice constant $a$, the spin-orbit strengths $\lambda_M$,
//!   $\lambda_X$ and the material label;
//! - *unique*: the inputs of the style (symmetry-adapted coefficients, or
//!   Slater-Koster integrals);
//! - *protected*: values derived from the unique inputs.
//!
//! The strain style adds, for every order $n$, the biaxial and uniaxial
//! corrections `{key}_b_{n}` / `{key}_u_{n}` of each `eps_*` and `u_*` key
//! and the shear corrections `u_*_s_{n}` of the hoppings that shear allows.
//!
//! Nothing in here fails. Bad input is reported as a [`ParamWarning`], logged
//! through the `log` facade, and otherwise ignored.
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use log::warn;
use serde::{Deserialize, Serialize};

/// A parameter value. Keys are either numeric or textual (only `material`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Text(_) => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Float(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Which key vocabulary a [`ParameterSet`] accepts as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterStyle {
    /// The symmetry-adapted coefficients `eps_*` and `u_*` are given directly.
    SymmetryGroup,
    /// Slater-Koster integrals split into even and odd parity.
    SlaterKoster,
    /// Slater-Koster integrals without the parity split.
    SlaterKosterSimple,
    /// Symmetry-adapted coefficients plus their strain corrections up to
    /// `max_order`.
    Strain { max_order: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    General,
    Unique,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Float,
    Text,
}

impl ValueKind {
    fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ValueKind::Float, Value::Float(_)) | (ValueKind::Text, Value::Text(_))
        )
    }
    fn label(self) -> &'static str {
        match self {
            ValueKind::Float => "a number",
            ValueKind::Text => "a string",
        }
    }
}

/// One stored parameter: its LaTeX name, the partition it lives in and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub partition: Partition,
    kind: ValueKind,
    pub value: Option<Value>,
}

/// Non-fatal problems found while writing parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamWarning {
    UnknownKey(String),
    ProtectedWrite(String),
    WrongType { key: String, expected: &'static str },
}

impl fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamWarning::UnknownKey(key) => {
                write!(f, "Variable {key} is not an expected variable, it is ignored")
            }
            ParamWarning::ProtectedWrite(key) => {
                write!(f, "The variable {key} is read-only, you should not change it.")
            }
            ParamWarning::WrongType { key, expected } => {
                write!(f, "The variable {key} must be {expected}, the value is ignored")
            }
        }
    }
}

#[derive(Clone)]
struct KeySpec {
    key: String,
    name: String,
    kind: ValueKind,
}

fn float_keys(pairs: Vec<(String, String)>) -> Vec<KeySpec> {
    pairs
        .into_iter()
        .map(|(key, name)| KeySpec {
            key,
            name,
            kind: ValueKind::Float,
        })
        .collect()
}

fn general_keys() -> Vec<KeySpec> {
    let mut keys = float_keys(vec![
        ("a".into(), r"$a$".into()),
        ("lamb_m".into(), r"$\lambda_M$".into()),
        ("lamb_x".into(), r"$\lambda_X$".into()),
    ]);
    keys.push(KeySpec {
        key: "material".into(),
        name: "material".into(),
        kind: ValueKind::Text,
    });
    keys
}

/// `eps_*` and `u_*` keys, in the fixed vocabulary order.
fn energy_keys() -> Vec<KeySpec> {
    let mut k: Vec<(String, String)> = Vec::new();
    for i in 0..2 {
        for r in ["e", "o"] {
            k.push((format!("eps_{i}_x_{r}"), format!(r"$\epsilon_{i}^{{X,{r}}}$")));
        }
    }
    for r in ["e", "o"] {
        k.push((format!("eps_0_m_{r}"), format!(r"$\epsilon_0^{{M,{r}}}$")));
    }
    k.push(("eps_1_m_e".into(), r"$\epsilon_1^{M,e}$".into()));
    for u in [1, 3, 4] {
        for i in 0..5 {
            k.push((format!("u_{u}_{i}_m_e"), format!(r"$u_{u}^{{{i},e}}$")));
        }
    }
    for u in [1, 3, 4] {
        for i in 0..3 {
            k.push((format!("u_{u}_{i}_m_o"), format!(r"$u_{u}^{{{i},o}}$")));
        }
    }
    for u in [2, 6] {
        for i in 0..6 {
            for (m, big) in [("m", "M"), ("x", "X")] {
                k.push((format!("u_{u}_{i}_{m}_e"), format!(r"$u_{u}^{{{i},{big}e}}$")));
            }
        }
    }
    for u in [2, 6] {
        for i in 0..6 {
            k.push((format!("u_{u}_{i}_x_o"), format!(r"$u_{u}^{{{i},Xo}}$")));
        }
    }
    for u in [2, 6] {
        for i in 0..3 {
            k.push((format!("u_{u}_{i}_m_o"), format!(r"$u_{u}^{{{i},Mo}}$")));
        }
    }
    for i in [0, 1, 3, 5, 6] {
        k.push((format!("u_5_{i}_m_e"), format!(r"$u_5^{{{i},Me}}$")));
    }
    for i in [0, 2, 3, 5, 6] {
        for r in ["e", "o"] {
            k.push((format!("u_5_{i}_x_{r}"), format!(r"$u_5^{{{i},X{r}}}$")));
        }
    }
    for i in [0, 2] {
        k.push((format!("u_5_{i}_m_o"), format!(r"$u_5^{{{i},Mo}}$")));
    }
    float_keys(k)
}

/// Crystal-field splittings, distortion angle and onsite $pp$ integrals.
fn onsite_sk_keys() -> Vec<KeySpec> {
    let mut k: Vec<(String, String)> = vec![("theta".into(), r"$\theta$".into())];
    for r in ["p", "z", "0", "1", "2"] {
        k.push((format!("delta_{r}"), format!(r"$\delta_{r}$")));
    }
    for (r, greek) in [("s", r"\sigma"), ("p", r"\pi")] {
        k.push((format!("v_0_pp{r}"), format!(r"$V^0_{{pp{greek}}}$")));
    }
    float_keys(k)
}

const SIGMA_PI: [(&str, &str); 2] = [("s", r"\sigma"), ("p", r"\pi")];
const TB: [(&str, &str); 2] = [("", ""), ("_tb", ",tb")];

fn sk_keys() -> Vec<KeySpec> {
    let mut k: Vec<(String, String)> = Vec::new();
    for n in [1, 3, 4] {
        for r in ["e", "o"] {
            for (i, greek) in SIGMA_PI {
                k.push((format!("v_{n}_{r}_pd{i}"), format!(r"$V^{{{n}_{r}}}_{{pd{greek}}}$")));
            }
        }
    }
    for n in [2, 5, 6] {
        for r in ["e", "o"] {
            for (i, greek) in SIGMA_PI {
                for (t, tn) in TB {
                    k.push((
                        format!("v_{n}_{r}_pp{i}{t}"),
                        format!(r"$V^{{{n}_{r}}}_{{pp{greek}{tn}}}$"),
                    ));
                }
            }
        }
    }
    for n in [2, 5, 6] {
        k.push((format!("v_{n}_e_dds"), format!(r"$V^{{{n}_e}}_{{dd\sigma}}$")));
    }
    for n in [2, 5, 6] {
        for r in ["e", "o"] {
            for (i, greek) in [("p", r"\pi"), ("d", r"\delta")] {
                k.push((format!("v_{n}_{r}_dd{i}"), format!(r"$V^{{{n}_{r}}}_{{dd{greek}}}$")));
            }
        }
    }
    float_keys(k)
}

fn simple_keys() -> Vec<KeySpec> {
    let mut k: Vec<(String, String)> = Vec::new();
    for n in [1, 3, 4] {
        for (i, greek) in SIGMA_PI {
            k.push((format!("v_{n}_pd{i}"), format!(r"$V^{{{n}}}_{{pd{greek}}}$")));
        }
    }
    for n in [2, 5, 6] {
        for (i, greek) in SIGMA_PI {
            for (t, tn) in TB {
                k.push((format!("v_{n}_pp{i}{t}"), format!(r"$V^{{{n}}}_{{pp{greek}{tn}}}$")));
            }
        }
    }
    for n in [2, 5, 6] {
        for (i, greek) in [("s", r"\sigma"), ("p", r"\pi"), ("d", r"\delta")] {
            k.push((format!("v_{n}_dd{i}"), format!(r"$V^{{{n}}}_{{dd{greek}}}$")));
        }
    }
    float_keys(k)
}

/// `$\epsilon_0^{X,e}$` -> `$\epsilon_{0,b,1}^{X,e}$`
fn strained_name(name: &str, kind: &str, order: u8) -> String {
    let Some(i) = name.find('_') else {
        return format!("{name}_{{{kind},{order}}}");
    };
    let (pre, rest) = name.split_at(i + 1);
    let cut = rest.char_indices().nth(1).map_or(rest.len(), |(j, _)| j);
    let (index, post) = rest.split_at(cut);
    format!("{pre}{{{index},{kind},{order}}}{post}")
}

/// Strain corrections of every order up to `max_order`.
fn strain_keys(max_order: u8) -> Vec<KeySpec> {
    let mut k: Vec<(String, String)> = Vec::new();
    for kind in ["b", "u", "s"] {
        for n in 1..=max_order {
            if kind != "s" {
                for spec in ENERGY_KEYS.iter() {
                    k.push((format!("{}_{kind}_{n}", spec.key), strained_name(&spec.name, kind, n)));
                }
                continue;
            }
            // shear couples only the entries that vanish without it
            let mut push = |u: u8, i: u8, suffix: &str, label: &str| {
                k.push((format!("u_{u}_{i}_{suffix}_s_{n}"), format!(r"$u_{{{u},s,{n}}}^{{{i},{label}}}$")));
            };
            for u in [1, 3, 4] {
                for i in 5..9 {
                    push(u, i, "m_e", "e");
                }
            }
            for u in [1, 3, 4] {
                for i in 3..6 {
                    push(u, i, "m_o", "o");
                }
            }
            for u in [2, 6] {
                for i in [1, 2, 4] {
                    push(u, i, "m_e", "Me");
                    push(u, i, "x_e", "Xe");
                }
            }
            for u in [2, 6] {
                for i in [1, 2, 4] {
                    push(u, i, "x_o", "Xo");
                }
            }
            for u in [2, 6] {
                push(u, 1, "m_o", "Mo");
            }
            for i in [2, 4, 7, 8] {
                push(5, i, "m_e", "Me");
            }
            for i in [1, 4, 7, 8] {
                push(5, i, "x_e", "Xe");
                push(5, i, "x_o", "Xo");
            }
            for i in [1, 3] {
                push(5, i, "m_o", "Mo");
            }
        }
    }
    float_keys(k)
}

static GENERAL_KEYS: LazyLock<Vec<KeySpec>> = LazyLock::new(general_keys);
static ENERGY_KEYS: LazyLock<Vec<KeySpec>> = LazyLock::new(energy_keys);
static ONSITE_SK_KEYS: LazyLock<Vec<KeySpec>> = LazyLock::new(onsite_sk_keys);
static SK_KEYS: LazyLock<Vec<KeySpec>> = LazyLock::new(sk_keys);
static SIMPLE_KEYS: LazyLock<Vec<KeySpec>> = LazyLock::new(simple_keys);

impl ParameterStyle {
    fn vocabulary(self) -> Vec<(Cow<'static, [KeySpec]>, Partition)> {
        use Partition::*;
        let k = |keys: &'static LazyLock<Vec<KeySpec>>| Cow::Borrowed(keys.as_slice());
        match self {
            ParameterStyle::SymmetryGroup => vec![(k(&GENERAL_KEYS), General), (k(&ENERGY_KEYS), Unique)],
            ParameterStyle::SlaterKoster => vec![
                (k(&GENERAL_KEYS), General),
                (k(&ONSITE_SK_KEYS), Unique),
                (k(&SK_KEYS), Unique),
                (k(&ENERGY_KEYS), Protected),
            ],
            ParameterStyle::SlaterKosterSimple => vec![
                (k(&GENERAL_KEYS), General),
                (k(&ONSITE_SK_KEYS), Unique),
                (k(&SIMPLE_KEYS), Unique),
                (k(&SK_KEYS), Protected),
                (k(&ENERGY_KEYS), Protected),
            ],
            ParameterStyle::Strain { max_order } => vec![
                (k(&GENERAL_KEYS), General),
                (k(&ENERGY_KEYS), Unique),
                (Cow::Owned(strain_keys(max_order)), Unique),
            ],
        }
    }

    /// Highest strain order carried by this style, zero without strain.
    pub fn max_strain_order(self) -> u8 {
        match self {
            ParameterStyle::Strain { max_order } => max_order,
            _ => 0,
        }
    }
}

/// A complete, ordered set of parameters for one [`ParameterStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    style: ParameterStyle,
    keys: Vec<String>,
    params: HashMap<String, Parameter>,
}

impl ParameterSet {
    /// All keys of `style` are present and undefined, except `a = 1`.
    pub fn new(style: ParameterStyle) -> Self {
        let mut keys = Vec::new();
        let mut params = HashMap::new();
        for (specs, partition) in style.vocabulary() {
            for spec in specs.iter() {
                keys.push(spec.key.clone());
                params.insert(
                    spec.key.clone(),
                    Parameter {
                        name: spec.name.clone(),
                        partition,
                        kind: spec.kind,
                        value: None,
                    },
                );
            }
        }
        let mut set = ParameterSet { style, keys, params };
        set.store("a", Some(Value::Float(1.0)));
        set
    }

    /// Build a set from a mapping, recalculating derived values once at the end.
    pub fn from_mapping<I, K, V>(style: ParameterStyle, mapping: I) -> (Self, Vec<ParamWarning>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut set = ParameterSet::new(style);
        let warnings = set.update(mapping);
        (set, warnings)
    }

    /// Apply every entry of `mapping`, then recalculate derived values once.
    pub fn update<I, K, V>(&mut self, mapping: I) -> Vec<ParamWarning>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let warnings: Vec<ParamWarning> = mapping
            .into_iter()
            .filter_map(|(key, value)| self.write(key.as_ref(), Some(value.into())))
            .collect();
        self.recalculate();
        warnings
    }

    /// Store `value` under `key`.
    ///
    /// Writing an input key refreshes every derived value. Writing a protected
    /// key keeps the value but warns, and the value lives only until the next
    /// input write recalculates it.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<ParamWarning> {
        let warning = self.write(key, Some(value.into()));
        if warning.is_none() {
            self.recalculate();
        }
        warning
    }

    /// Make `key` undefined again.
    pub fn clear(&mut self, key: &str) -> Option<ParamWarning> {
        let warning = self.write(key, None);
        if warning.is_none() {
            self.recalculate();
        }
        warning
    }

    fn write(&mut self, key: &str, value: Option<Value>) -> Option<ParamWarning> {
        let Some(param) = self.params.get_mut(key) else {
            return Some(report(ParamWarning::UnknownKey(key.to_string())));
        };
        if let Some(v) = &value {
            if !param.kind.accepts(v) {
                return Some(report(ParamWarning::WrongType {
                    key: key.to_string(),
                    expected: param.kind.label(),
                }));
            }
        }
        param.value = value;
        match param.partition {
            Partition::Protected => Some(report(ParamWarning::ProtectedWrite(key.to_string()))),
            _ => None,
        }
    }

    /// Write a derived value without any checks or warnings.
    pub(crate) fn store(&mut self, key: &str, value: Option<Value>) {
        if let Some(param) = self.params.get_mut(key) {
            param.value = value;
        }
    }

    pub(crate) fn store_float(&mut self, key: &str, value: Option<f64>) {
        self.store(key, value.map(Value::Float));
    }

    fn recalculate(&mut self) {
        match self.style {
            ParameterStyle::SymmetryGroup | ParameterStyle::Strain { .. } => {}
            ParameterStyle::SlaterKoster => crate::slater_koster::recalculate(self),
            ParameterStyle::SlaterKosterSimple => {
                crate::slater_koster::broadcast_simple(self);
                crate::slater_koster::recalculate(self);
            }
        }
    }

    pub fn style(&self) -> ParameterStyle {
        self.style
    }

    /// The numeric value of `key`, `None` when undefined, textual or unknown.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.get_value(key).and_then(Value::as_f64)
    }

    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.params.get(key).and_then(|p| p.value.as_ref())
    }

    /// Like [`get`](Self::get) but undefined reads as `0.0`.
    pub fn get_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// The LaTeX name of `key`.
    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|p| p.name.as_str())
    }

    pub fn partition(&self, key: &str) -> Option<Partition> {
        self.params.get(key).map(|p| p.partition)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn material(&self) -> Option<&str> {
        self.get_value("material").and_then(Value::as_str)
    }

    /// Keys in vocabulary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.keys
            .iter()
            .filter_map(|k| self.params.get(k).map(|p| (k.as_str(), p)))
    }

    /// The defined general and unique entries, in vocabulary order.
    ///
    /// Feeding the result back through [`from_mapping`](Self::from_mapping)
    /// reproduces the set.
    pub fn get_dict(&self) -> Vec<(String, Value)> {
        self.iter()
            .filter(|(_, p)| p.partition != Partition::Protected)
            .filter_map(|(k, p)| p.value.clone().map(|v| (k.to_string(), v)))
            .collect()
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet::new(ParameterStyle::SymmetryGroup)
    }
}

fn report(warning: ParamWarning) -> ParamWarning {
    warn!("{warning}");
    warning
}
