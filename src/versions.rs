//! # Protocol Versions
//!
//! Release names and the protocol numbers they negotiate.
//!
//! Several releases share one protocol number (1.8 through 1.8.9 are all 47),
//! so lookups by number return every matching name.

/// Every supported release, oldest first, as `(release name, protocol number)`
pub const SUPPORTED_MINECRAFT_VERSIONS: &[(&str, i32)] = &[
    ("1.8", 47),
    ("1.8.1", 47),
    ("1.8.2", 47),
    ("1.8.3", 47),
    ("1.8.4", 47),
    ("1.8.5", 47),
    ("1.8.6", 47),
    ("1.8.7", 47),
    ("1.8.8", 47),
    ("1.8.9", 47),
    ("1.9", 107),
    ("1.9.1", 108),
    ("1.9.2", 109),
    ("1.9.3", 110),
    ("1.9.4", 110),
    ("1.10", 210),
    ("1.10.1", 210),
    ("1.10.2", 210),
    ("1.11", 315),
    ("1.11.1", 316),
    ("1.11.2", 316),
    ("1.12", 335),
    ("1.12.1", 338),
    ("1.12.2", 340),
    ("1.13", 393),
    ("1.13.1", 401),
    ("1.13.2", 404),
    ("1.14", 477),
    ("1.14.1", 480),
    ("1.14.2", 485),
    ("1.14.3", 490),
    ("1.14.4", 498),
    ("1.15", 573),
    ("1.15.1", 575),
    ("1.15.2", 578),
    ("1.16", 735),
    ("1.16.1", 736),
    ("1.16.2", 751),
    ("1.16.3", 753),
    ("1.16.4", 754),
    ("1.16.5", 754),
];

/// Distinct protocol numbers of every supported release, ascending
pub const SUPPORTED_PROTOCOL_VERSIONS: &[i32] = &[
    47, 107, 108, 109, 110, 210, 315, 316, 335, 338, 340, 393, 401, 404, 477, 480, 485, 490, 498,
    573, 575, 578, 735, 736, 751, 753, 754,
];

/// Distinct protocol numbers of every full release, ascending
///
/// The table holds no snapshots or pre-releases, so this is every supported
/// protocol number.
pub const RELEASE_PROTOCOL_VERSIONS: &[i32] = SUPPORTED_PROTOCOL_VERSIONS;

/// Newest protocol number this crate knows about
pub const LATEST_PROTOCOL_VERSION: i32 = 754;

/// Protocol number negotiated by the named release
pub fn protocol_for_release(name: &str) -> Option<i32> {
    SUPPORTED_MINECRAFT_VERSIONS
        .iter()
        .find(|(release, _)| *release == name)
        .map(|&(_, protocol)| protocol)
}

/// Release names that negotiate `protocol`
pub fn release_names_for(protocol: i32) -> impl Iterator<Item = &'static str> {
    SUPPORTED_MINECRAFT_VERSIONS
        .iter()
        .filter(move |&&(_, p)| p == protocol)
        .map(|&(name, _)| name)
}

/// Whether `protocol` is one of [`SUPPORTED_PROTOCOL_VERSIONS`]
pub fn is_supported(protocol: i32) -> bool {
    SUPPORTED_PROTOCOL_VERSIONS.binary_search(&protocol).is_ok()
}
