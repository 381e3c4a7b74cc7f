//! Published parameter sets, keyed by table name and entry.
//!
//! Entries are plain material names (`"MoS2"`), fitted variants
//! (`"fitted/MoS2"`) or named sub-sets (`"MoS2/vb"`). The sets are built once
//! on first access; [`lookup`] hands out an owned copy.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;

use crate::error::{Result, TbError};
use crate::params::{ParameterSet, ParameterStyle, Value};

type Registry = BTreeMap<&'static str, Vec<(&'static str, ParameterSet)>>;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut db = Registry::new();
    load_embedded_tables(&mut db);
    debug!("parameter registry loaded: {} tables", db.len());
    db
});

/// Copy of the parameter set `entry` of `table`.
pub fn lookup(table: &str, entry: &str) -> Result<ParameterSet> {
    let entries = REGISTRY
        .get(table)
        .ok_or_else(|| TbError::UnknownTable(table.to_string()))?;
    entries
        .iter()
        .find(|(name, _)| *name == entry)
        .map(|(_, set)| set.clone())
        .ok_or_else(|| TbError::UnknownTableEntry {
            table: table.to_string(),
            entry: entry.to_string(),
        })
}

/// Entry names of `table` in their published order.
pub fn entries(table: &str) -> Result<Vec<&'static str>> {
    REGISTRY
        .get(table)
        .map(|e| e.iter().map(|(name, _)| *name).collect())
        .ok_or_else(|| TbError::UnknownTable(table.to_string()))
}

/// All table names, sorted.
pub fn tables() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

// Sources:
// liu2, liu6: doi.org/10.1103/PhysRevB.88.085433
// wu, group1: doi.org/10.1103/PhysRevB.91.075310
// fang: doi.org/10.1103/PhysRevB.92.205108
// cappelluti: doi.org/10.1103/PhysRevB.88.075409
// rostami: doi.org/10.1103/PhysRevB.92.195402
// dias: doi.org/10.1103/PhysRevB.98.075202
fn load_embedded_tables(db: &mut Registry) {
    macro_rules! add_entry {
        ($table:expr, $entry:expr, $style:ident, [$(($k:expr, $v:expr)),* $(,)?]) => {
            let (set, warnings) = ParameterSet::from_mapping(
                ParameterStyle::$style,
                [$(($k, Value::from($v))),*],
            );
            debug_assert!(warnings.is_empty(), "{}/{}: {:?}", $table, $entry, warnings);
            db.entry($table).or_default().push(($entry, set));
        };
    }

    // --- liu2 ---
    add_entry!("liu2", "MoS2", SymmetryGroup, [
        ("a", 0.319), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", 1.046),
        ("eps_1_m_e", 2.104), ("u_2_0_m_e", -0.184), ("u_2_1_m_e", 0.507), ("u_2_2_m_e", -0.401),
        ("u_2_3_m_e", 0.057), ("u_2_4_m_e", 0.338), ("u_2_5_m_e", 0.218),
    ]);
    add_entry!("liu2", "MoSe2", SymmetryGroup, [
        ("a", 0.3326), ("lamb_m", 0.091), ("material", "MoSe2"), ("eps_0_m_e", 0.919),
        ("eps_1_m_e", 2.065), ("u_2_0_m_e", -0.188), ("u_2_1_m_e", 0.456), ("u_2_2_m_e", -0.317),
        ("u_2_3_m_e", 0.13), ("u_2_4_m_e", 0.29), ("u_2_5_m_e", 0.211),
    ]);
    add_entry!("liu2", "MoTe2", SymmetryGroup, [
        ("a", 0.3557), ("lamb_m", 0.107), ("material", "MoTe2"), ("eps_0_m_e", 0.605),
        ("eps_1_m_e", 1.972), ("u_2_0_m_e", -0.169), ("u_2_1_m_e", 0.39), ("u_2_2_m_e", -0.228),
        ("u_2_3_m_e", 0.252), ("u_2_4_m_e", 0.239), ("u_2_5_m_e", 0.207),
    ]);
    add_entry!("liu2", "WS2", SymmetryGroup, [
        ("a", 0.3191), ("lamb_m", 0.211), ("material", "WS2"), ("eps_0_m_e", 1.13),
        ("eps_1_m_e", 2.275), ("u_2_0_m_e", -0.206), ("u_2_1_m_e", 0.536), ("u_2_2_m_e", -0.567),
        ("u_2_3_m_e", -0.061), ("u_2_4_m_e", 0.384), ("u_2_5_m_e", 0.286),
    ]);
    add_entry!("liu2", "WSe2", SymmetryGroup, [
        ("a", 0.3325), ("lamb_m", 0.228), ("material", "WSe2"), ("eps_0_m_e", 0.943),
        ("eps_1_m_e", 2.179), ("u_2_0_m_e", -0.207), ("u_2_1_m_e", 0.486), ("u_2_2_m_e", -0.457),
        ("u_2_3_m_e", 0.034), ("u_2_4_m_e", 0.329), ("u_2_5_m_e", 0.263),
    ]);
    add_entry!("liu2", "WTe2", SymmetryGroup, [
        ("a", 0.356), ("lamb_m", 0.237), ("material", "WTe2"), ("eps_0_m_e", 0.606),
        ("eps_1_m_e", 2.102), ("u_2_0_m_e", -0.175), ("u_2_1_m_e", 0.41), ("u_2_2_m_e", -0.342),
        ("u_2_3_m_e", 0.19), ("u_2_4_m_e", 0.27), ("u_2_5_m_e", 0.233),
    ]);
    add_entry!("liu2", "fitted/MoS2", SymmetryGroup, [
        ("a", 0.318955279), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", -4.75202031),
        ("eps_1_m_e", -3.81191516), ("u_2_0_m_e", -0.18254965), ("u_2_1_m_e", 0.56039034), ("u_2_2_m_e", -0.35035407),
        ("u_2_3_m_e", 0.02587717), ("u_2_4_m_e", 0.32520158), ("u_2_5_m_e", 0.22190189),
    ]);
    // --- liu6 ---
    add_entry!("liu6", "MoS2", SymmetryGroup, [
        ("a", 0.319), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", 0.683),
        ("eps_1_m_e", 1.707), ("u_2_0_m_e", -0.146), ("u_2_1_m_e", 0.506), ("u_2_2_m_e", 0.114),
        ("u_2_3_m_e", 0.073), ("u_2_4_m_e", 0.162), ("u_2_5_m_e", 0.085), ("u_5_0_m_e", 0.06),
        ("u_5_1_m_e", -0.077), ("u_5_3_m_e", -0.034), ("u_5_5_m_e", 0.167), ("u_5_6_m_e", 0.273),
        ("u_6_0_m_e", -0.038), ("u_6_1_m_e", 0.001), ("u_6_2_m_e", -0.046), ("u_6_3_m_e", -0.15),
        ("u_6_4_m_e", -0.176), ("u_6_5_m_e", 0.266),
    ]);
    add_entry!("liu6", "MoSe2", SymmetryGroup, [
        ("a", 0.3326), ("lamb_m", 0.091), ("material", "MoSe2"), ("eps_0_m_e", 0.684),
        ("eps_1_m_e", 1.546), ("u_2_0_m_e", -0.146), ("u_2_1_m_e", 0.432), ("u_2_2_m_e", 0.13),
        ("u_2_3_m_e", 0.075), ("u_2_4_m_e", 0.117), ("u_2_5_m_e", 0.144), ("u_5_0_m_e", 0.039),
        ("u_5_1_m_e", -0.0797), ("u_5_3_m_e", 0.0174), ("u_5_5_m_e", 0.1559), ("u_5_6_m_e", 0.2413),
        ("u_6_0_m_e", -0.042), ("u_6_1_m_e", 0.008), ("u_6_2_m_e", -0.036), ("u_6_3_m_e", -0.15),
        ("u_6_4_m_e", -0.172), ("u_6_5_m_e", 0.272),
    ]);
    add_entry!("liu6", "MoTe2", SymmetryGroup, [
        ("a", 0.3557), ("lamb_m", 0.107), ("material", "MoTe2"), ("eps_0_m_e", 0.588),
        ("eps_1_m_e", 1.303), ("u_2_0_m_e", -0.226), ("u_2_1_m_e", 0.036), ("u_2_2_m_e", 0.234),
        ("u_2_3_m_e", 0.017), ("u_2_4_m_e", 0.098), ("u_2_5_m_e", 0.4), ("u_5_0_m_e", 0.003),
        ("u_5_1_m_e", 0.1951), ("u_5_3_m_e", 0.0526), ("u_5_5_m_e", 0.1703), ("u_5_6_m_e", 0.0289),
        ("u_6_0_m_e", 0.057), ("u_6_1_m_e", 0.187), ("u_6_2_m_e", -0.103), ("u_6_3_m_e", 0.087),
        ("u_6_4_m_e", -0.141), ("u_6_5_m_e", -0.045),
    ]);
    add_entry!("liu6", "WS2", SymmetryGroup, [
        ("a", 0.3191), ("lamb_m", 0.211), ("material", "WS2"), ("eps_0_m_e", 0.717),
        ("eps_1_m_e", 1.916), ("u_2_0_m_e", -0.152), ("u_2_1_m_e", 0.59), ("u_2_2_m_e", 0.097),
        ("u_2_3_m_e", 0.016), ("u_2_4_m_e", 0.178), ("u_2_5_m_e", 0.047), ("u_5_0_m_e", 0.069),
        ("u_5_1_m_e", -0.1236), ("u_5_3_m_e", -0.0659), ("u_5_5_m_e", 0.1858), ("u_5_6_m_e", 0.3014),
        ("u_6_0_m_e", -0.054), ("u_6_1_m_e", 0.002), ("u_6_2_m_e", -0.045), ("u_6_3_m_e", -0.163),
        ("u_6_4_m_e", -0.206), ("u_6_5_m_e", 0.325),
    ]);
    add_entry!("liu6", "WSe2", SymmetryGroup, [
        ("a", 0.3325), ("lamb_m", 0.228), ("material", "WSe2"), ("eps_0_m_e", 0.728),
        ("eps_1_m_e", 1.655), ("u_2_0_m_e", -0.146), ("u_2_1_m_e", 0.507), ("u_2_2_m_e", 0.124),
        ("u_2_3_m_e", 0.015), ("u_2_4_m_e", 0.127), ("u_2_5_m_e", 0.117), ("u_5_0_m_e", 0.036),
        ("u_5_1_m_e", -0.1236), ("u_5_3_m_e", 0.0007), ("u_5_5_m_e", 0.1739), ("u_5_6_m_e", 0.2702),
        ("u_6_0_m_e", -0.061), ("u_6_1_m_e", 0.007), ("u_6_2_m_e", -0.032), ("u_6_3_m_e", -0.164),
        ("u_6_4_m_e", -0.202), ("u_6_5_m_e", 0.329),
    ]);
    add_entry!("liu6", "WTe2", SymmetryGroup, [
        ("a", 0.356), ("lamb_m", 0.237), ("material", "WTe2"), ("eps_0_m_e", 0.697),
        ("eps_1_m_e", 1.38), ("u_2_0_m_e", -0.109), ("u_2_1_m_e", 0.368), ("u_2_2_m_e", 0.164),
        ("u_2_3_m_e", 0.038), ("u_2_4_m_e", 0.093), ("u_2_5_m_e", 0.204), ("u_5_0_m_e", -0.015),
        ("u_5_1_m_e", -0.1236), ("u_5_3_m_e", 0.11), ("u_5_5_m_e", 0.1306), ("u_5_6_m_e", 0.241),
        ("u_6_0_m_e", -0.066), ("u_6_1_m_e", -0.013), ("u_6_2_m_e", -0.011), ("u_6_3_m_e", -0.132),
        ("u_6_4_m_e", -0.177), ("u_6_5_m_e", 0.312),
    ]);
    add_entry!("liu6", "fitted/MoS2", SymmetryGroup, [
        ("a", 0.318955279), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", -5.09750973),
        ("eps_1_m_e", -4.10128918), ("u_2_0_m_e", -0.14342346), ("u_2_1_m_e", 0.50944507), ("u_2_2_m_e", 0.11371639),
        ("u_2_3_m_e", 0.07975301), ("u_2_4_m_e", 0.16337675), ("u_2_5_m_e", 0.08534869), ("u_5_0_m_e", 0.05829675),
        ("u_5_1_m_e", -0.07413799), ("u_5_3_m_e", -0.04025448), ("u_5_5_m_e", 0.17963519), ("u_5_6_m_e", 0.26548849),
        ("u_6_0_m_e", -0.03801049), ("u_6_1_m_e", 0.00373271), ("u_6_2_m_e", -0.04490756), ("u_6_3_m_e", -0.15506986),
        ("u_6_4_m_e", -0.17736107), ("u_6_5_m_e", 0.26986353),
    ]);
    // --- wu ---
    add_entry!("wu", "MoS2", SymmetryGroup, [
        ("a", 0.319), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", 0.683),
        ("eps_1_m_e", 1.707), ("eps_0_m_o", 3.558), ("u_2_0_m_e", -0.146), ("u_2_1_m_e", 0.506),
        ("u_2_2_m_e", 0.114), ("u_2_3_m_e", 0.073), ("u_2_4_m_e", 0.162), ("u_2_5_m_e", 0.085),
        ("u_2_0_m_o", -0.189), ("u_2_1_m_o", -0.024), ("u_2_2_m_o", -0.117), ("u_5_0_m_e", 0.06),
        ("u_5_1_m_e", -0.077), ("u_5_3_m_e", -0.034), ("u_5_5_m_e", 0.167), ("u_5_6_m_e", 0.273),
        ("u_5_0_m_o", -0.063), ("u_5_2_m_o", 0.025), ("u_6_0_m_e", -0.038), ("u_6_1_m_e", 0.001),
        ("u_6_2_m_e", -0.046), ("u_6_3_m_e", -0.15), ("u_6_4_m_e", -0.176), ("u_6_5_m_e", 0.266),
        ("u_6_0_m_o", 0.165), ("u_6_1_m_o", 0.14), ("u_6_2_m_o", -0.122),
    ]);
    add_entry!("wu", "fitted/MoS2", SymmetryGroup, [
        ("a", 0.319), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", -5.098),
        ("eps_1_m_e", -4.101), ("eps_0_m_o", -2.246), ("u_2_0_m_e", -0.143), ("u_2_1_m_e", 0.509),
        ("u_2_2_m_e", 0.114), ("u_2_3_m_e", 0.079), ("u_2_4_m_e", 0.164), ("u_2_5_m_e", 0.085),
        ("u_2_0_m_o", -0.167), ("u_2_1_m_o", -0.022), ("u_2_2_m_o", -0.148), ("u_5_0_m_e", 0.058),
        ("u_5_1_m_e", -0.074), ("u_5_3_m_e", -0.04), ("u_5_5_m_e", 0.179), ("u_5_6_m_e", 0.265),
        ("u_5_0_m_o", -0.061), ("u_5_2_m_o", 0.037), ("u_6_0_m_e", -0.038), ("u_6_1_m_e", 0.004),
        ("u_6_2_m_e", -0.045), ("u_6_3_m_e", -0.155), ("u_6_4_m_e", -0.177), ("u_6_5_m_e", 0.27),
        ("u_6_0_m_o", 0.169), ("u_6_1_m_o", 0.149), ("u_6_2_m_o", -0.123),
    ]);
    // --- group1 ---
    // wu MoS2 with the fifth-shell u_5_1_m_e / u_5_6_m_e values in their
    // earlier assignment
    add_entry!("group1", "MoS2", SymmetryGroup, [
        ("a", 0.319), ("lamb_m", 0.073), ("material", "MoS2"), ("eps_0_m_e", 0.683),
        ("eps_1_m_e", 1.707), ("eps_0_m_o", 3.558), ("u_2_0_m_e", -0.146), ("u_2_1_m_e", 0.506),
        ("u_2_2_m_e", 0.114), ("u_2_3_m_e", 0.073), ("u_2_4_m_e", 0.162), ("u_2_5_m_e", 0.085),
        ("u_2_0_m_o", -0.189), ("u_2_1_m_o", -0.024), ("u_2_2_m_o", -0.117), ("u_5_0_m_e", 0.06),
        ("u_5_1_m_e", 0.273), ("u_5_3_m_e", -0.034), ("u_5_5_m_e", 0.167), ("u_5_6_m_e", -0.077),
        ("u_5_0_m_o", -0.063), ("u_5_2_m_o", 0.025), ("u_6_0_m_e", -0.038), ("u_6_1_m_e", 0.001),
        ("u_6_2_m_e", -0.046), ("u_6_3_m_e", -0.15), ("u_6_4_m_e", -0.176), ("u_6_5_m_e", 0.266),
        ("u_6_0_m_o", 0.165), ("u_6_1_m_o", 0.14), ("u_6_2_m_o", -0.122),
    ]);
    // --- fang ---
    add_entry!("fang", "MoS2", SymmetryGroup, [
        ("a", 0.318), ("lamb_m", 0.0836), ("lamb_x", 0.0556), ("material", "MoS2"),
        ("eps_0_m_e", -0.138), ("eps_1_m_e", 0.0874), ("eps_0_m_o", 1.0688), ("eps_0_x_e", -1.9065),
        ("eps_1_x_e", -2.8949), ("eps_0_x_o", -1.2902), ("eps_1_x_o", -0.7755), ("u_1_0_m_e", 1.4114),
        ("u_1_1_m_e", -0.9402), ("u_1_2_m_e", 0.6517), ("u_1_3_m_e", -0.8836), ("u_1_4_m_e", -0.9535),
        ("u_1_0_m_o", -0.7883), ("u_1_1_m_o", 2.1584), ("u_1_2_m_o", -1.379), ("u_2_0_m_e", -0.2979),
        ("u_2_1_m_e", 0.4096), ("u_2_2_m_e", -0.1145), ("u_2_3_m_e", -0.5581), ("u_2_4_m_e", 0.2487),
        ("u_2_5_m_e", 0.2747), ("u_2_0_m_o", -0.2069), ("u_2_1_m_o", -0.2562), ("u_2_2_m_o", 0.0323),
        ("u_2_0_x_e", 0.9122), ("u_2_1_x_e", -0.0385), ("u_2_2_x_e", -0.1063), ("u_2_3_x_e", 0.0059),
        ("u_2_4_x_e", 0.0075), ("u_2_5_x_e", -0.1916), ("u_2_0_x_o", 0.8651), ("u_2_1_x_o", -0.0705),
        ("u_2_2_x_o", 0.0995), ("u_2_3_x_o", -0.1872), ("u_2_4_x_o", -0.0679), ("u_2_5_x_o", -0.1739),
        ("u_3_1_m_e", -0.1498), ("u_3_2_m_e", -0.2451), ("u_3_3_m_e", -0.0686), ("u_3_4_m_e", -0.2205),
    ]);
    add_entry!("fang", "MoSe2", SymmetryGroup, [
        ("a", 0.332), ("lamb_m", 0.0836), ("lamb_x", 0.247), ("material", "MoSe2"),
        ("eps_0_m_e", -0.2297), ("eps_1_m_e", 0.0149), ("eps_0_m_o", 0.7819), ("eps_0_x_e", -1.7806),
        ("eps_1_x_e", -2.9015), ("eps_0_x_o", -1.1726), ("eps_1_x_o", -0.6567), ("u_1_0_m_e", 1.2677),
        ("u_1_1_m_e", -0.8738), ("u_1_2_m_e", 0.5545), ("u_1_3_m_e", -0.772), ("u_1_4_m_e", -0.8578),
        ("u_1_0_m_o", -0.6946), ("u_1_1_m_o", 1.9415), ("u_1_2_m_o", -1.3258), ("u_2_0_m_e", -0.2636),
        ("u_2_1_m_e", 0.352), ("u_2_2_m_e", -0.096), ("u_2_3_m_e", -0.4734), ("u_2_4_m_e", 0.2012),
        ("u_2_5_m_e", 0.2505), ("u_2_0_m_o", -0.146), ("u_2_1_m_o", -0.1912), ("u_2_2_m_o", 0.0177),
        ("u_2_0_x_e", 0.9911), ("u_2_1_x_e", -0.0394), ("u_2_2_x_e", -0.1216), ("u_2_3_x_e", -0.0036),
        ("u_2_4_x_e", 0.0047), ("u_2_5_x_e", -0.2166), ("u_2_0_x_o", 0.9638), ("u_2_1_x_o", -0.068),
        ("u_2_2_x_o", 0.0755), ("u_2_3_x_o", -0.1724), ("u_2_4_x_o", -0.0735), ("u_2_5_x_o", -0.2112),
        ("u_3_1_m_e", -0.1553), ("u_3_2_m_e", -0.2154), ("u_3_3_m_e", -0.0691), ("u_3_4_m_e", -0.2227),
    ]);
    add_entry!("fang", "WS2", SymmetryGroup, [
        ("a", 0.318), ("lamb_m", 0.2874), ("lamb_x", 0.0556), ("material", "WS2"),
        ("eps_0_m_e", -0.0393), ("eps_1_m_e", 0.1984), ("eps_0_m_o", 1.3754), ("eps_0_x_e", -2.3461),
        ("eps_1_x_e", -3.3706), ("eps_0_x_o", -1.5534), ("eps_1_x_o", -1.1278), ("u_1_0_m_e", 1.5629),
        ("u_1_1_m_e", -0.9878), ("u_1_2_m_e", 0.6718), ("u_1_3_m_e", -1.013), ("u_1_4_m_e", -0.9491),
        ("u_1_0_m_o", -0.8855), ("u_1_1_m_o", 2.3121), ("u_1_2_m_o", -1.4376), ("u_2_0_m_e", -0.3716),
        ("u_2_1_m_e", 0.4896), ("u_2_2_m_e", -0.1467), ("u_2_3_m_e", -0.6892), ("u_2_4_m_e", 0.303),
        ("u_2_5_m_e", 0.3537), ("u_2_0_m_o", -0.2011), ("u_2_1_m_o", -0.3106), ("u_2_2_m_o", 0.0263),
        ("u_2_0_x_e", 0.9673), ("u_2_1_x_e", -0.1018), ("u_2_2_x_e", -0.1645), ("u_2_3_x_e", 0.0143),
        ("u_2_4_x_e", -0.0315), ("u_2_5_x_e", -0.2112), ("u_2_0_x_o", 0.8726), ("u_2_1_x_o", -0.0989),
        ("u_2_2_x_o", 0.1105), ("u_2_3_x_o", -0.2187), ("u_2_4_x_o", -0.0818), ("u_2_5_x_o", -0.1749),
        ("u_3_1_m_e", -0.1533), ("u_3_2_m_e", -0.2736), ("u_3_3_m_e", -0.0659), ("u_3_4_m_e", -0.2618),
    ]);
    add_entry!("fang", "WSe2", SymmetryGroup, [
        ("a", 0.332), ("lamb_m", 0.2874), ("lamb_x", 0.247), ("material", "WSe2"),
        ("eps_0_m_e", -0.1667), ("eps_1_m_e", 0.0984), ("eps_0_m_o", 1.0349), ("eps_0_x_e", -2.182),
        ("eps_1_x_e", -3.3642), ("eps_0_x_o", -1.3937), ("eps_1_x_o", -0.9573), ("u_1_0_m_e", 1.403),
        ("u_1_1_m_e", -0.9044), ("u_1_2_m_e", 0.5711), ("u_1_3_m_e", -0.8998), ("u_1_4_m_e", -0.8548),
        ("u_1_0_m_o", -0.7744), ("u_1_1_m_o", 2.0858), ("u_1_2_m_o", -1.4014), ("u_2_0_m_e", -0.333),
        ("u_2_1_m_e", 0.4233), ("u_2_2_m_e", -0.125), ("u_2_3_m_e", -0.5837), ("u_2_4_m_e", 0.2456),
        ("u_2_5_m_e", 0.319), ("u_2_0_m_o", -0.1395), ("u_2_1_m_o", -0.2321), ("u_2_2_m_o", 0.0129),
        ("u_2_0_x_e", 1.047), ("u_2_1_x_e", -0.1027), ("u_2_2_x_e", -0.1857), ("u_2_3_x_e", 0.0029),
        ("u_2_4_x_e", -0.0377), ("u_2_5_x_e", -0.2399), ("u_2_0_x_o", 0.9763), ("u_2_1_x_o", -0.092),
        ("u_2_2_x_o", 0.0797), ("u_2_3_x_o", -0.1985), ("u_2_4_x_o", -0.0912), ("u_2_5_x_o", -0.2171),
        ("u_3_1_m_e", -0.1608), ("u_3_2_m_e", -0.2424), ("u_3_3_m_e", -0.0676), ("u_3_4_m_e", -0.2618),
    ]);
    add_entry!("fang", "fitted/MoS2", SymmetryGroup, [
        ("a", 0.3189552789), ("lamb_m", 0.0836), ("lamb_x", 0.0556), ("material", "MoS2"),
        ("eps_0_m_e", -6.48602262), ("eps_1_m_e", -5.18473506), ("eps_0_m_o", -4.59364376), ("eps_0_x_e", -7.7577787),
        ("eps_1_x_e", -9.05082632), ("eps_0_x_o", -7.23255442), ("eps_1_x_o", -7.02669394), ("u_1_0_m_e", 1.26825943),
        ("u_1_1_m_e", -1.08658995), ("u_1_2_m_e", 0.73122123), ("u_1_3_m_e", -0.69014034), ("u_1_4_m_e", -0.84531854),
        ("u_1_0_m_o", -0.78156314), ("u_1_1_m_o", 2.19543484), ("u_1_2_m_o", -1.3171294), ("u_2_0_m_e", -0.03516888),
        ("u_2_1_m_e", 0.47269242), ("u_2_2_m_e", -0.12368948), ("u_2_3_m_e", -0.39732265), ("u_2_4_m_e", 0.25919776),
        ("u_2_5_m_e", 0.14680296), ("u_2_0_m_o", -0.16375119), ("u_2_1_m_o", 0.10644792), ("u_2_2_m_o", -0.08866745),
        ("u_2_0_x_e", 0.87185047), ("u_2_1_x_e", 0.13267939), ("u_2_2_x_e", -0.06673336), ("u_2_3_x_e", -0.08669893),
        ("u_2_4_x_e", -0.1665462), ("u_2_5_x_e", -0.25628203), ("u_2_0_x_o", 0.77863574), ("u_2_1_x_o", 0.05642279),
        ("u_2_2_x_o", 0.055016), ("u_2_3_x_o", -0.07622647), ("u_2_4_x_o", 0.01287608), ("u_2_5_x_o", -0.09818404),
        ("u_3_1_m_e", -0.30871332), ("u_3_2_m_e", -0.14419783), ("u_3_3_m_e", 0.01966645), ("u_3_4_m_e", -0.37086515),
    ]);
    // --- jorissen ---
    add_entry!("jorissen", "MoS2", SymmetryGroup, [
        ("a", 0.3189552789), ("lamb_m", 0.0836), ("lamb_x", 0.0556), ("material", "MoS2"),
        ("eps_0_m_e", -6.47506922), ("eps_1_m_e", -4.89138157), ("eps_0_x_e", -7.90697285), ("eps_1_x_e", -9.47021899),
        ("u_1_0_m_e", 0.99874101), ("u_1_1_m_e", -1.28945959), ("u_1_2_m_e", 0.79526257), ("u_1_3_m_e", -0.68815634),
        ("u_1_4_m_e", -0.79456582), ("u_2_0_m_e", -0.04758008), ("u_2_1_m_e", 0.58038247), ("u_2_2_m_e", 0.07374717),
        ("u_2_3_m_e", -0.41375629), ("u_2_4_m_e", 0.29861063), ("u_2_5_m_e", 0.04452479), ("u_2_0_x_e", 0.79492166),
        ("u_2_1_x_e", 0.24849791), ("u_2_2_x_e", -0.16415515), ("u_2_3_x_e", -0.0019305), ("u_2_4_x_e", -0.2934992),
        ("u_2_5_x_e", -0.17447978),
    ]);
    // --- all ---
    add_entry!("all", "MoS2", SymmetryGroup, [
        ("a", 0.3189552789), ("lamb_m", 0.0836), ("lamb_x", 0.0556), ("material", "MoS2"),
        ("eps_0_x_e", -5.85535089), ("eps_1_x_e", -6.550028), ("eps_0_m_e", -4.11031485), ("eps_1_m_e", -3.50757649),
        ("u_1_0_m_e", 1.35813632), ("u_1_1_m_e", -0.939814832), ("u_1_2_m_e", 0.636315099), ("u_1_3_m_e", -0.865807106),
        ("u_1_4_m_e", -0.940867659), ("u_2_0_m_e", -0.288698499), ("u_2_1_m_e", 0.508367498), ("u_2_2_m_e", -0.117988537),
        ("u_2_3_m_e", -0.553682676), ("u_2_4_m_e", 0.22850487), ("u_2_5_m_e", 0.229751185), ("u_2_0_x_e", 0.910803109),
        ("u_2_1_x_e", 0.0224402452), ("u_2_2_x_e", -0.0961186364), ("u_2_3_x_e", 0.00312400382), ("u_2_4_x_e", -0.0279471707),
        ("u_2_5_x_e", -0.184215453), ("u_3_0_m_e", 0.0819856098), ("u_3_1_m_e", -0.136942029), ("u_3_2_m_e", -0.232226175),
        ("u_3_3_m_e", -0.0756614354), ("u_3_4_m_e", -0.218453245), ("u_4_0_m_e", -0.0105966154), ("u_4_1_m_e", 0.000818751691),
        ("u_4_2_m_e", -0.031973538), ("u_4_3_m_e", 0.00126355104), ("u_4_4_m_e", 0.028872409), ("u_5_0_m_e", 0.000540497529),
        ("u_5_1_m_e", -0.00774247515), ("u_5_3_m_e", 0.0339424467), ("u_5_5_m_e", 0.00911337396), ("u_5_6_m_e", -0.005237663),
        ("u_5_0_x_e", -0.0131303857), ("u_5_2_x_e", -2.16101527e-05), ("u_5_3_x_e", 0.0021889238), ("u_5_5_x_e", 0.00285609057),
        ("u_5_6_x_e", -0.00535732464), ("u_6_0_m_e", 0.000267882896), ("u_6_1_m_e", -0.0291376849), ("u_6_2_m_e", -0.000115194554),
        ("u_6_3_m_e", -0.0558489128), ("u_6_4_m_e", -0.0608538922), ("u_6_5_m_e", 0.0725848009), ("u_6_0_x_e", 0.0485565562),
        ("u_6_1_x_e", -0.0695112283), ("u_6_2_x_e", -0.00691879264), ("u_6_3_x_e", 0.0304557146), ("u_6_4_x_e", 0.0686382071),
        ("u_6_5_x_e", -0.00197025368), ("eps_0_x_o", -4.96490884), ("eps_1_x_o", -4.73278639), ("eps_0_m_o", -2.81154976),
        ("u_1_0_m_o", -0.782104656), ("u_1_1_m_o", 2.13753469), ("u_1_2_m_o", -1.45504793), ("u_2_0_m_o", -0.262365349),
        ("u_2_1_m_o", -0.215615929), ("u_2_2_m_o", 0.0102434139), ("u_2_0_x_o", 0.849785326), ("u_2_1_x_o", -0.0706226486),
        ("u_2_2_x_o", 0.0413053364), ("u_2_3_x_o", -0.11276933), ("u_2_4_x_o", 0.0411554466), ("u_2_5_x_o", -0.173215911),
        ("u_3_0_m_o", 0.0314319913), ("u_3_1_m_o", -0.0635638918), ("u_3_2_m_o", 0.0580612006), ("u_4_0_m_o", -0.0335710022),
        ("u_4_1_m_o", 0.0633229092), ("u_4_2_m_o", 0.0505315655), ("u_5_0_m_o", -0.0650386867), ("u_5_2_m_o", 0.128907505),
        ("u_5_0_x_o", -0.0272518553), ("u_5_2_x_o", -0.00845574502), ("u_5_3_x_o", -0.0719418647), ("u_5_5_x_o", 0.00994491714),
        ("u_5_6_x_o", -0.0239873085), ("u_6_0_m_o", 0.043063079), ("u_6_1_m_o", 0.0598009509), ("u_6_2_m_o", -0.126888729),
        ("u_6_0_x_o", 0.0730968724), ("u_6_1_x_o", -0.0437471809), ("u_6_2_x_o", -0.00940970153), ("u_6_3_x_o", 0.0287364009),
        ("u_6_4_x_o", -0.0288204369), ("u_6_5_x_o", 0.0228460254),
    ]);
    // --- rostami ---
    add_entry!("rostami", "MoS2", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.716), ("delta_0", -1.094), ("delta_2", -1.512), ("delta_p", -3.56),
        ("delta_z", -6.886), ("v_1_pds", 3.689), ("v_1_pdp", -1.241), ("v_2_dds", -0.895),
        ("v_2_ddp", 0.252), ("v_2_ddd", 0.228), ("v_0_pps", 1.225), ("v_0_ppp", -0.467),
        ("v_2_pps", 1.225), ("v_2_ppp", -0.467),
    ]);
    add_entry!("rostami", "fitted/MoS2", SlaterKosterSimple, [
        ("a", 0.31882931), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.703), ("delta_0", -6.2539434), ("delta_1", 0.0), ("delta_2", -5.64168266),
        ("delta_p", -10.24784771), ("delta_z", -16.61743716), ("v_1_pds", 3.89201485), ("v_1_pdp", -1.36521723),
        ("v_2_dds", -0.73264736), ("v_2_ddp", 0.65489363), ("v_2_ddd", 0.26205299), ("v_0_pps", 0.0),
        ("v_0_ppp", 0.0), ("v_2_pps", 0.73420676), ("v_2_ppp", -1.44859604),
    ]);
    // --- dias ---
    add_entry!("dias", "MoS2", SlaterKoster, [
        ("a", 0.3166), ("lamb_m", 0.0806), ("lamb_x", 0.0536), ("material", "MoS2"),
        ("theta", 0.71), ("delta_0", -0.4939), ("delta_1", 0.5624), ("delta_2", -0.2473),
        ("delta_p", -3.14115), ("delta_z", -4.0595), ("v_0_pps", 4.1989), ("v_0_ppp", -1.89235),
        ("v_1_e_pds", 4.2398), ("v_1_e_pdp", -1.2413), ("v_1_o_pds", 2.2251), ("v_1_o_pdp", -0.7614),
        ("v_2_e_dds", -0.6717), ("v_2_e_ddp", 0.5706), ("v_2_e_ddd", 0.2729), ("v_2_e_pps", -0.0914),
        ("v_2_e_ppp", -0.4619), ("v_2_o_ddp", 0.015), ("v_2_o_ddd", 0.0497), ("v_2_o_pps", 0.8131),
        ("v_2_o_ppp", -0.2763), ("v_5_e_dds", 0.0314), ("v_5_e_ddp", 0.0961), ("v_5_e_ddd", -0.0305),
        ("v_5_e_pps", 0.3723), ("v_5_e_ppp", 0.0014), ("v_5_o_ddp", 0.0051), ("v_5_o_ddd", 0.0184),
        ("v_5_o_pps", -0.0395), ("v_5_o_ppp", 0.0092),
    ]);
    add_entry!("dias", "MoSe2", SlaterKoster, [
        ("a", 0.3288), ("lamb_m", 0.0806), ("lamb_x", 0.082), ("material", "MoSe2"),
        ("theta", 0.71), ("delta_0", -0.1276), ("delta_1", 0.3046), ("delta_2", -0.2724),
        ("delta_p", -3.8352), ("delta_z", -4.30195), ("v_0_pps", 4.30095), ("v_0_ppp", -2.8093),
        ("v_1_e_pds", 3.4524), ("v_1_e_pdp", -1.4295), ("v_1_o_pds", 2.0197), ("v_1_o_pdp", -0.6811),
        ("v_2_e_dds", -0.6674), ("v_2_e_ddp", 0.5573), ("v_2_e_ddd", 0.097), ("v_2_e_pps", 1.263),
        ("v_2_e_ppp", -0.4857), ("v_2_o_ddp", 0.01637), ("v_2_o_ddd", 0.0965), ("v_2_o_pps", 0.9449),
        ("v_2_o_ppp", -0.3039), ("v_5_e_dds", 0.0776), ("v_5_e_ddp", 0.0573), ("v_5_e_ddd", -0.04778),
        ("v_5_e_pps", 0.2372), ("v_5_e_ppp", 0.0249), ("v_5_o_ddp", 0.014), ("v_5_o_ddd", 0.0354),
        ("v_5_o_pps", -0.0293), ("v_5_o_ppp", -0.0094),
    ]);
    add_entry!("dias", "MoTe2", SlaterKoster, [
        ("a", 0.3519), ("lamb_m", 0.0806), ("lamb_x", 0.102), ("material", "MoTe2"),
        ("theta", 0.71), ("delta_0", -0.663), ("delta_1", 0.0491), ("delta_2", -0.2852),
        ("delta_p", -0.9084), ("delta_z", -1.8434), ("v_0_pps", 2.6799), ("v_0_ppp", 0.0678),
        ("v_1_e_pds", 2.2362), ("v_1_e_pdp", -0.6279), ("v_1_o_pds", 1.8294), ("v_1_o_pdp", -0.5048),
        ("v_2_e_dds", -0.4795), ("v_2_e_ddp", -0.0934), ("v_2_e_ddd", 0.1656), ("v_2_e_pps", 0.8198),
        ("v_2_e_ppp", -0.2483), ("v_2_o_ddp", 0.3267), ("v_2_o_ddd", 0.3033), ("v_2_o_pps", 0.8459),
        ("v_2_o_ppp", -0.4143), ("v_5_e_dds", -0.1493), ("v_5_e_ddp", -0.0627), ("v_5_e_ddd", 0.036),
        ("v_5_e_pps", 0.1169), ("v_5_e_ppp", 0.2683), ("v_5_o_ddp", -0.0617), ("v_5_o_ddd", 0.1002),
        ("v_5_o_pps", 0.0114), ("v_5_o_ppp", -0.0092),
    ]);
    add_entry!("dias", "WS2", SlaterKoster, [
        ("a", 0.31532), ("lamb_m", 0.2754), ("lamb_x", 0.0536), ("material", "WS2"),
        ("theta", 0.71), ("delta_0", -0.3609), ("delta_1", 0.8877), ("delta_2", -0.7364),
        ("delta_p", -3.52825), ("delta_z", -4.5926), ("v_0_pps", 4.415), ("v_0_ppp", -1.97685),
        ("v_1_e_pds", 5.2769), ("v_1_e_pdp", -1.2119), ("v_1_o_pds", 2.4044), ("v_1_o_pdp", -0.8115),
        ("v_2_e_dds", -0.8942), ("v_2_e_ddp", 0.7347), ("v_2_e_ddd", 0.3417), ("v_2_e_pps", -0.3943),
        ("v_2_e_ppp", -0.4069), ("v_2_o_ddp", -0.0142), ("v_2_o_ddd", 0.0036), ("v_2_o_pps", 0.8415),
        ("v_2_o_ppp", -0.2661), ("v_5_e_dds", 0.0508), ("v_5_e_ddp", 0.1278), ("v_5_e_ddd", -0.0091),
        ("v_5_e_pps", 0.1415), ("v_5_e_ppp", 0.0261), ("v_5_o_ddp", -0.0135), ("v_5_o_ddd", -0.0191),
        ("v_5_o_pps", -0.0169), ("v_5_o_ppp", 0.0262),
    ]);
    add_entry!("dias", "WSe2", SlaterKoster, [
        ("a", 0.3282), ("lamb_m", 0.2754), ("lamb_x", 0.082), ("material", "WSe2"),
        ("theta", 0.71), ("delta_0", -0.5558), ("delta_1", 0.6233), ("delta_2", -1.934),
        ("delta_p", -2.20345), ("delta_z", -3.6177), ("v_0_pps", 3.1056), ("v_0_ppp", -0.99385),
        ("v_1_e_pds", 5.175), ("v_1_e_pdp", -0.9139), ("v_1_o_pds", 2.1733), ("v_1_o_pdp", -0.7688),
        ("v_2_e_dds", -0.8697), ("v_2_e_ddp", 0.6206), ("v_2_e_ddd", 0.3743), ("v_2_e_pps", 0.1311),
        ("v_2_e_ppp", -0.2475), ("v_2_o_ddp", -0.0469), ("v_2_o_ddd", 0.0923), ("v_2_o_pps", 0.9703),
        ("v_2_o_ppp", -0.292), ("v_5_e_dds", 0.0443), ("v_5_e_ddp", 0.0912), ("v_5_e_ddd", -0.0447),
        ("v_5_e_pps", 0.1197), ("v_5_e_ppp", 0.1075), ("v_5_o_ddp", 0.0096), ("v_5_o_ddd", 0.014),
        ("v_5_o_pps", -0.0451), ("v_5_o_ppp", 0.0113),
    ]);
    add_entry!("dias", "fitted/MoS2", SlaterKoster, [
        ("a", 0.31882931), ("lamb_m", 0.0806), ("lamb_x", 0.0536), ("material", "MoS2"),
        ("theta", 0.703), ("delta_0", -6.32462197), ("delta_1", -4.77732844), ("delta_2", -5.90160369),
        ("delta_p", -9.523165605), ("delta_z", -12.5025582), ("v_0_pps", 5.630393), ("v_0_ppp", -2.447044695),
        ("v_1_e_pds", 4.00851699), ("v_1_e_pdp", -1.59507645), ("v_1_o_pds", 2.15787943), ("v_1_o_pdp", -1.06942019),
        ("v_2_e_dds", -0.658197057), ("v_2_e_ddp", 0.572293847), ("v_2_e_ddd", 0.261828424), ("v_2_e_pps", 0.99250237),
        ("v_2_e_ppp", -1.66848188), ("v_2_o_ddp", 0.0427331648), ("v_2_o_ddd", 0.0142165455), ("v_2_o_pps", 0.574382013),
        ("v_2_o_ppp", -0.153696505), ("v_5_e_dds", 0.0322763559), ("v_5_e_ddp", 0.0567853736), ("v_5_e_ddd", -0.0379415525),
        ("v_5_e_pps", 0.160731513), ("v_5_e_ppp", 0.00150517193), ("v_5_o_ddp", 0.000710141101), ("v_5_o_ddd", 0.0655934811),
        ("v_5_o_pps", -0.0336741023), ("v_5_o_ppp", -0.0223077491),
    ]);
    // --- cappelluti ---
    add_entry!("cappelluti", "MoS2", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.716), ("delta_0", -1.512), ("delta_2", -3.025), ("delta_p", -1.276),
        ("delta_z", -8.236), ("v_1_pds", -2.619), ("v_1_pdp", -1.396), ("v_2_dds", -0.933),
        ("v_2_ddp", -0.478), ("v_2_ddd", -0.442), ("v_0_pps", 0.696), ("v_0_ppp", 0.278),
        ("v_2_pps", 0.696), ("v_2_ppp", 0.278),
    ]);
    add_entry!("cappelluti", "fitted/MoS2", SlaterKosterSimple, [
        ("a", 0.31882931), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.703), ("delta_0", -6.2539434), ("delta_1", -7.6674323), ("delta_2", -5.64168266),
        ("delta_p", -10.24784771), ("delta_z", -9.10842771), ("v_1_pds", 3.89201485), ("v_1_pdp", -1.36521723),
        ("v_2_dds", -0.73264736), ("v_2_ddp", 0.65489363), ("v_2_ddd", 0.26205299), ("v_0_pps", 7.50900945),
        ("v_0_ppp", -0.62850624), ("v_2_pps", 0.73420676), ("v_2_ppp", -1.44859604),
    ]);
    // --- roldan ---
    add_entry!("roldan", "MoS2", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.716), ("delta_0", -1.512), ("delta_1", 0.419), ("delta_2", -3.025),
        ("delta_p", -1.276), ("delta_z", -8.236), ("v_1_pds", -2.619), ("v_1_pdp", -1.396),
        ("v_2_dds", -0.933), ("v_2_ddp", -0.478), ("v_2_ddd", -0.442), ("v_0_pps", 0.696),
        ("v_0_ppp", 0.278), ("v_2_pps", 0.696), ("v_2_ppp", 0.278),
    ]);
    add_entry!("roldan", "WS2", SlaterKosterSimple, [
        ("a", 0.3153), ("lamb_m", 0.215), ("lamb_x", 0.057), ("material", "WS2"),
        ("theta", 0.712), ("delta_0", -1.55), ("delta_1", 0.851), ("delta_2", -3.09),
        ("delta_p", -1.176), ("delta_z", -7.836), ("v_1_pds", -0.619), ("v_1_pdp", -1.396),
        ("v_2_dds", -0.983), ("v_2_ddp", -0.478), ("v_2_ddd", -0.442), ("v_0_pps", 0.696),
        ("v_0_ppp", 0.278), ("v_2_pps", 0.696), ("v_2_ppp", 0.278),
    ]);
    // --- ridolfi ---
    add_entry!("ridolfi", "MoS2/normal", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.707), ("delta_0", 0.201), ("delta_1", -1.563), ("delta_2", -0.352),
        ("delta_p", -54.839), ("delta_z", -39.275), ("v_1_pds", -9.88), ("v_1_pdp", 4.196),
        ("v_2_dds", -1.153), ("v_2_ddp", 0.612), ("v_2_ddd", 0.086), ("v_0_pps", 12.734),
        ("v_0_ppp", -2.175), ("v_2_pps", 12.734), ("v_2_ppp", -2.175),
    ]);
    add_entry!("ridolfi", "MoS2/vb", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.707), ("delta_0", 0.191), ("delta_1", -1.599), ("delta_2", 0.081),
        ("delta_p", -48.934), ("delta_z", -37.981), ("v_1_pds", -8.963), ("v_1_pdp", 4.115),
        ("v_2_dds", -1.154), ("v_2_ddp", 0.964), ("v_2_ddd", 0.117), ("v_0_pps", 10.707),
        ("v_0_ppp", -4.084), ("v_2_pps", 10.707), ("v_2_ppp", -4.084),
    ]);
    add_entry!("ridolfi", "MoS2/minimal", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.707), ("delta_0", -11.683), ("delta_1", -208.435), ("delta_2", -75.952),
        ("delta_p", -23.761), ("delta_z", -35.968), ("v_1_pds", -56.738), ("v_1_pdp", 1.318),
        ("v_2_dds", -2.652), ("v_2_ddp", 1.75), ("v_2_ddd", 1.482), ("v_0_pps", 0.0),
        ("v_0_ppp", 0.0), ("v_2_pps", 0.0), ("v_2_ppp", 0.0),
    ]);
    // --- venkateswarlu ---
    add_entry!("venkateswarlu", "MoS2", SlaterKosterSimple, [
        ("a", 0.318), ("lamb_m", 0.086), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.704), ("delta_0", 0.1356), ("delta_1", -0.4204), ("delta_2", 0.0149),
        ("delta_p", -38.71), ("delta_z", -29.45), ("v_1_pds", -7.193), ("v_1_pdp", 3.267),
        ("v_2_dds", -0.9035), ("v_2_ddp", 0.7027), ("v_2_ddd", 0.0897), ("v_0_pps", 8.079),
        ("v_0_ppp", -2.678), ("v_2_pps", 7.336), ("v_2_ppp", -2.432),
    ]);
    // --- silva_guillen ---
    add_entry!("silva_guillen", "MoS2", SlaterKosterSimple, [
        ("a", 0.316), ("lamb_m", 0.086), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.716), ("delta_0", -1.094), ("delta_1", -0.05), ("delta_2", -1.511),
        ("delta_p", -3.559), ("delta_z", -6.886), ("v_1_pds", 3.689), ("v_1_pdp", -1.241),
        ("v_2_dds", -0.895), ("v_2_ddp", 0.252), ("v_2_ddd", 0.228), ("v_0_pps", 1.225),
        ("v_0_ppp", -0.467), ("v_2_pps", 1.225), ("v_2_ppp", -0.467),
    ]);
    add_entry!("silva_guillen", "MoSe2", SlaterKosterSimple, [
        ("a", 3.288), ("lamb_m", 0.089), ("lamb_x", 0.256), ("material", "MoSe2"),
        ("theta", 0.72), ("delta_0", -1.144), ("delta_1", -0.25), ("delta_2", -1.488),
        ("delta_p", -4.931), ("delta_z", -7.503), ("v_1_pds", 3.728), ("v_1_pdp", -1.222),
        ("v_2_dds", -0.823), ("v_2_ddp", 0.215), ("v_2_ddd", 0.192), ("v_0_pps", 1.256),
        ("v_0_ppp", -0.205), ("v_2_pps", 1.256), ("v_2_ppp", -0.205),
    ]);
    add_entry!("silva_guillen", "WS2", SlaterKosterSimple, [
        ("a", 3.153), ("lamb_m", 0.271), ("lamb_x", 0.057), ("material", "WS2"),
        ("theta", 0.712), ("delta_0", -1.155), ("delta_1", -0.65), ("delta_2", -2.279),
        ("delta_p", -3.864), ("delta_z", -7.327), ("v_1_pds", 7.911), ("v_1_pdp", -1.22),
        ("v_2_dds", -1.328), ("v_2_ddp", 0.121), ("v_2_ddd", 0.422), ("v_0_pps", 1.178),
        ("v_0_ppp", -0.273), ("v_2_pps", 1.178), ("v_2_ppp", -0.273),
    ]);
    add_entry!("silva_guillen", "WSe2", SlaterKosterSimple, [
        ("a", 3.26), ("lamb_m", 0.251), ("lamb_x", 0.439), ("material", "WSe2"),
        ("theta", 0.722), ("delta_0", -0.935), ("delta_1", -1.25), ("delta_2", -2.321),
        ("delta_p", -5.629), ("delta_z", -6.759), ("v_1_pds", 5.803), ("v_1_pdp", -1.081),
        ("v_2_dds", -1.129), ("v_2_ddp", 0.094), ("v_2_ddd", 0.317), ("v_0_pps", 1.53),
        ("v_0_ppp", -0.123), ("v_2_pps", 1.53), ("v_2_ppp", -0.123),
    ]);
    // --- pearce ---
    add_entry!("pearce", "MoS2", SlaterKosterSimple, [
        ("a", 0.319), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.687), ("delta_0", 2.12), ("delta_1", -0.46), ("delta_2", -1.41),
        ("delta_p", -5.38), ("delta_z", -3.69), ("v_1_pds", -2.83), ("v_1_pdp", 0.67),
        ("v_2_dds", -0.24), ("v_2_ddp", -0.62), ("v_2_ddd", 0.45), ("v_0_pps", -0.42),
        ("v_0_ppp", -1.32), ("v_2_pps", -0.42), ("v_2_ppp", -1.32),
    ]);
    // --- bieniek ---
    add_entry!("bieniek", "MoS2", SlaterKosterSimple, [
        ("a", 0.3193), ("lamb_m", 0.075), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.71), ("delta_0", -0.03), ("delta_1", -0.03), ("delta_2", -0.03),
        ("delta_p", -3.36), ("delta_z", -4.78), ("v_1_pds", -3.39), ("v_1_pdp", 1.1),
        ("v_2_dds", -1.1), ("v_2_ddp", 0.76), ("v_2_ddd", 0.27), ("v_0_pps", 1.19),
        ("v_0_ppp", -0.83), ("v_2_pps", 1.19), ("v_2_ppp", -0.83),
    ]);
    // --- abdi ---
    add_entry!("abdi", "MoS2", SlaterKosterSimple, [
        ("a", 0.3166), ("lamb_m", 0.086), ("lamb_x", 0.052), ("material", "MoS2"),
        ("theta", 0.71), ("delta_0", -1.094), ("delta_1", -0.05), ("delta_2", -1.511),
        ("delta_p", -3.559), ("delta_z", -6.886), ("v_1_pds", 3.689), ("v_1_pdp", -1.241),
        ("v_2_dds", -0.895), ("v_2_ddp", 0.252), ("v_2_ddd", 0.228), ("v_0_pps", 1.225),
        ("v_0_ppp", -0.467), ("v_2_pps", 1.225), ("v_2_ppp", -0.467),
    ]);
    add_entry!("abdi", "MoSe2", SlaterKosterSimple, [
        ("a", 0.3298), ("lamb_m", 0.089), ("lamb_x", 0.256), ("material", "MoSe2"),
        ("theta", 0.721), ("delta_0", -1.144), ("delta_1", -0.25), ("delta_2", -1.488),
        ("delta_p", -4.931), ("delta_z", -7.503), ("v_1_pds", 3.728), ("v_1_pdp", -1.222),
        ("v_2_dds", -0.823), ("v_2_ddp", 0.215), ("v_2_ddd", 0.192), ("v_0_pps", 1.256),
        ("v_0_ppp", -0.205), ("v_2_pps", 1.256), ("v_2_ppp", -0.205),
    ]);
    add_entry!("abdi", "WSe2", SlaterKosterSimple, [
        ("a", 0.326), ("lamb_m", 0.251), ("lamb_x", 0.439), ("material", "WSe2"),
        ("theta", 0.722), ("delta_0", -0.935), ("delta_1", -1.25), ("delta_2", -2.321),
        ("delta_p", -5.629), ("delta_z", -6.759), ("v_1_pds", 5.803), ("v_1_pdp", -1.081),
        ("v_2_dds", -1.129), ("v_2_ddp", 0.094), ("v_2_ddd", 0.317), ("v_0_pps", 1.53),
        ("v_0_ppp", -0.123), ("v_2_pps", 1.53), ("v_2_ppp", -0.205),
    ]);
}
