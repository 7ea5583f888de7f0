//! Curve registry.
//!
//! Every curve the toolkit knows about, pairing-friendly or not, with the
//! metadata the codecs and key-generation front ends need: field sizes,
//! embedding degree, estimated security and a status that drives user
//! advisories.
//!
//! The descriptor table is static. The lookup indices are built exactly once
//! per process behind a [`OnceLock`] and are read without locking afterwards.
//!
//! # Example
//!
//! ```rust
//! use abe_codec::registry::{self, CurveId, SecurityStatus};
//!
//! let bls = registry::lookup_by_name("BLS12-381").expect("registered");
//! assert_eq!(bls.id, CurveId::Bls12_381);
//! assert_eq!(bls.field_bytes(), 48);
//! assert_eq!(bls.status, SecurityStatus::Recommended);
//!
//! assert!(registry::select_curve_for_new_keys("BN_P158").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::Error;

/// Curve identifiers as they appear in the header's curve byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CurveId {
    /// NIST P-256 (secp256r1)
    NistP256 = 0x32,
    /// NIST P-384 (secp384r1)
    NistP384 = 0x5E,
    /// NIST P-521 (secp521r1)
    NistP521 = 0x79,
    /// 158-bit Barreto–Naehrig curve
    BnP158 = 0x61,
    /// 254-bit Barreto–Naehrig curve (alt_bn128)
    BnP254 = 0x6F,
    /// 256-bit Barreto–Naehrig curve
    BnP256 = 0xBE,
    /// 382-bit Barreto–Naehrig curve
    BnP382 = 0xC7,
    /// BLS12-381
    Bls12_381 = 0xA2,
}

impl CurveId {
    /// Every registered curve, in registry order.
    pub const ALL: [CurveId; 8] = [
        CurveId::NistP256,
        CurveId::NistP384,
        CurveId::NistP521,
        CurveId::BnP158,
        CurveId::BnP254,
        CurveId::BnP256,
        CurveId::BnP382,
        CurveId::Bls12_381,
    ];

    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parses a header curve byte.
    pub fn from_byte(byte: u8) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_byte() == byte)
            .ok_or(Error::UnknownCurve(byte))
    }

    /// Static descriptor for this curve.
    pub fn descriptor(self) -> &'static CurveDescriptor {
        let index = match self {
            CurveId::NistP256 => 0,
            CurveId::NistP384 => 1,
            CurveId::NistP521 => 2,
            CurveId::BnP158 => 3,
            CurveId::BnP254 => 4,
            CurveId::BnP256 => 5,
            CurveId::BnP382 => 6,
            CurveId::Bls12_381 => 7,
        };
        &DESCRIPTORS[index]
    }

    pub fn family(self) -> CurveFamily {
        self.descriptor().family
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Structural family of a curve; selects the default wire format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CurveFamily {
    /// NIST prime-order curves (no pairing)
    NistPrime,
    /// Barreto–Naehrig pairing curves
    Bn,
    /// BLS12 pairing curves
    Bls12,
}

/// Security classification shown to users.
///
/// `Weak` and `Legacy` curves still work but produce an advisory when chosen
/// for new key material. `Deprecated` curves are refused for new parameters
/// and kept only so that old data can still be decoded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SecurityStatus {
    Recommended,
    Good,
    Legacy,
    Weak,
    Deprecated,
}

impl SecurityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityStatus::Recommended => "recommended",
            SecurityStatus::Good => "good",
            SecurityStatus::Legacy => "legacy",
            SecurityStatus::Weak => "weak",
            SecurityStatus::Deprecated => "deprecated",
        }
    }
}

/// Immutable curve metadata record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurveDescriptor {
    pub id: CurveId,
    /// Canonical name, e.g. `BLS12_P381`.
    pub name: &'static str,
    /// Human-facing name, e.g. `BLS12-381`.
    pub display_name: &'static str,
    pub family: CurveFamily,
    /// Bit length of the base field prime.
    pub field_bits: u32,
    /// `None` for curves without an efficient pairing.
    pub embedding_degree: Option<u32>,
    /// Estimated classical security in bits.
    pub security_level: u32,
    pub status: SecurityStatus,
    pub notes: &'static str,
    /// Backend crate implementing the curve in this build, if any.
    pub backend_curve_id: Option<&'static str>,
}

impl CurveDescriptor {
    /// Width of a serialized base field element: `ceil(field_bits / 8)`.
    pub fn field_bytes(&self) -> usize {
        (self.field_bits as usize).div_ceil(8)
    }

    pub fn is_pairing_friendly(&self) -> bool {
        self.embedding_degree.is_some()
    }
}

static DESCRIPTORS: [CurveDescriptor; 8] = [
    CurveDescriptor {
        id: CurveId::NistP256,
        name: "NIST_P256",
        display_name: "P-256",
        family: CurveFamily::NistPrime,
        field_bits: 256,
        embedding_degree: None,
        security_level: 128,
        status: SecurityStatus::Recommended,
        notes: "ECDSA signing curve",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::NistP384,
        name: "NIST_P384",
        display_name: "P-384",
        family: CurveFamily::NistPrime,
        field_bits: 384,
        embedding_degree: None,
        security_level: 192,
        status: SecurityStatus::Good,
        notes: "ECDSA signing curve",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::NistP521,
        name: "NIST_P521",
        display_name: "P-521",
        family: CurveFamily::NistPrime,
        field_bits: 521,
        embedding_degree: None,
        security_level: 256,
        status: SecurityStatus::Good,
        notes: "ECDSA signing curve",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::BnP158,
        name: "BN_P158",
        display_name: "BN-158",
        family: CurveFamily::Bn,
        field_bits: 158,
        embedding_degree: Some(12),
        security_level: 78,
        status: SecurityStatus::Deprecated,
        notes: "broken by discrete-log records; decode only",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::BnP254,
        name: "BN_P254",
        display_name: "BN254",
        family: CurveFamily::Bn,
        field_bits: 254,
        embedding_degree: Some(12),
        security_level: 100,
        status: SecurityStatus::Legacy,
        notes: "alt_bn128; kept for Ethereum precompile compatibility",
        backend_curve_id: Some("ark-bn254"),
    },
    CurveDescriptor {
        id: CurveId::BnP256,
        name: "BN_P256",
        display_name: "BN-256",
        family: CurveFamily::Bn,
        field_bits: 256,
        embedding_degree: Some(12),
        security_level: 100,
        status: SecurityStatus::Weak,
        notes: "reduced by exTNFS to roughly 100 bits",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::BnP382,
        name: "BN_P382",
        display_name: "BN-382",
        family: CurveFamily::Bn,
        field_bits: 382,
        embedding_degree: Some(12),
        security_level: 128,
        status: SecurityStatus::Good,
        notes: "conservative BN parameters",
        backend_curve_id: None,
    },
    CurveDescriptor {
        id: CurveId::Bls12_381,
        name: "BLS12_P381",
        display_name: "BLS12-381",
        family: CurveFamily::Bls12,
        field_bits: 381,
        embedding_degree: Some(12),
        security_level: 117,
        status: SecurityStatus::Recommended,
        notes: "ZCash and IETF pairing-friendly curve",
        backend_curve_id: Some("ark-bls12-381"),
    },
];

struct Registry {
    by_id: HashMap<u8, &'static CurveDescriptor>,
    by_name: HashMap<&'static str, &'static CurveDescriptor>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let mut by_id = HashMap::with_capacity(DESCRIPTORS.len());
        let mut by_name = HashMap::with_capacity(DESCRIPTORS.len() * 2);
        for descriptor in &DESCRIPTORS {
            by_id.insert(descriptor.id.as_byte(), descriptor);
            by_name.insert(descriptor.name, descriptor);
            by_name.insert(descriptor.display_name, descriptor);
        }
        debug!(curves = DESCRIPTORS.len(), "curve registry initialised");
        Registry { by_id, by_name }
    })
}

/// Looks a curve up by its header byte.
pub fn lookup_by_id(id: u8) -> Option<&'static CurveDescriptor> {
    registry().by_id.get(&id).copied()
}

/// Looks a curve up by canonical or display name (case-sensitive).
pub fn lookup_by_name(name: &str) -> Option<&'static CurveDescriptor> {
    registry().by_name.get(name).copied()
}

/// Canonical names of every registered curve, in registry order.
pub fn list_all() -> Vec<&'static str> {
    DESCRIPTORS.iter().map(|d| d.name).collect()
}

/// Canonical names of curves with [`SecurityStatus::Recommended`].
pub fn list_recommended() -> Vec<&'static str> {
    DESCRIPTORS
        .iter()
        .filter(|d| d.status == SecurityStatus::Recommended)
        .map(|d| d.name)
        .collect()
}

/// Resolves a curve for generating new key material.
///
/// Weak and legacy curves are accepted with a `warn!` advisory. Deprecated
/// curves are refused with [`Error::DeprecatedCurve`].
pub fn select_curve_for_new_keys(name: &str) -> Result<&'static CurveDescriptor, Error> {
    let descriptor = lookup_by_name(name).ok_or(Error::InvalidConfig("unknown curve name"))?;
    match descriptor.status {
        SecurityStatus::Deprecated => Err(Error::DeprecatedCurve(descriptor.name)),
        SecurityStatus::Weak | SecurityStatus::Legacy => {
            warn!(
                curve = descriptor.name,
                status = descriptor.status.as_str(),
                security_bits = descriptor.security_level,
                "curve selected for new keys is below current recommendations"
            );
            Ok(descriptor)
        }
        SecurityStatus::Recommended | SecurityStatus::Good => Ok(descriptor),
    }
}

/// Resolves a header curve byte for decoding existing data.
///
/// Status is ignored here: old data on deprecated curves stays readable.
pub fn ensure_decodable(id: u8) -> Result<&'static CurveDescriptor, Error> {
    lookup_by_id(id).ok_or(Error::UnknownCurve(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_bytes() {
        for id in CurveId::ALL {
            assert_eq!(CurveId::from_byte(id.as_byte()).expect("known id"), id);
            assert_eq!(id.descriptor().id, id);
        }
        assert!(matches!(CurveId::from_byte(0x00), Err(Error::UnknownCurve(0x00))));
    }

    #[test]
    fn wire_bytes_are_stable() {
        assert_eq!(CurveId::BnP254.as_byte(), 0x6F);
        assert_eq!(CurveId::Bls12_381.as_byte(), 0xA2);
        assert_eq!(CurveId::NistP256.as_byte(), 0x32);
    }

    #[test]
    fn lookup_matches_name_and_display_name() {
        let by_name = lookup_by_name("BN_P254").expect("canonical name");
        let by_display = lookup_by_name("BN254").expect("display name");
        assert_eq!(by_name, by_display);
        assert_eq!(by_name.field_bytes(), 32);
        assert!(lookup_by_name("bn254").is_none());
        assert!(lookup_by_name("secp256k1").is_none());
    }

    #[test]
    fn lookup_by_id_unknown_is_none() {
        assert!(lookup_by_id(0xFF).is_none());
        assert_eq!(
            lookup_by_id(0xA2).map(|d| d.display_name),
            Some("BLS12-381")
        );
    }

    #[test]
    fn field_bytes_round_up() {
        assert_eq!(CurveId::NistP521.descriptor().field_bytes(), 66);
        assert_eq!(CurveId::BnP158.descriptor().field_bytes(), 20);
        assert_eq!(CurveId::Bls12_381.descriptor().field_bytes(), 48);
    }

    #[test]
    fn listings() {
        let all = list_all();
        assert_eq!(all.len(), CurveId::ALL.len());
        let recommended = list_recommended();
        assert!(recommended.contains(&"BLS12_P381"));
        assert!(recommended.contains(&"NIST_P256"));
        assert!(!recommended.contains(&"BN_P254"));
    }

    #[test]
    fn new_keys_respect_status() {
        assert!(matches!(
            select_curve_for_new_keys("BN_P158"),
            Err(Error::DeprecatedCurve("BN_P158"))
        ));
        assert_eq!(
            select_curve_for_new_keys("BN-256").expect("weak is allowed").id,
            CurveId::BnP256
        );
        assert_eq!(
            select_curve_for_new_keys("BLS12-381").expect("recommended").id,
            CurveId::Bls12_381
        );
        assert!(matches!(
            select_curve_for_new_keys("nope"),
            Err(Error::InvalidConfig(_))
        ));
    }

    /// Counts WARN events seen while installed.
    struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }
    }

    fn warnings_while_selecting(name: &str) -> usize {
        use tracing_subscriber::layer::SubscriberExt;

        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            select_curve_for_new_keys(name).expect("selectable curve");
        });
        count.load(std::sync::atomic::Ordering::SeqCst)
    }

    #[test]
    fn weak_and_legacy_selection_warns() {
        assert_eq!(CurveId::BnP256.descriptor().status, SecurityStatus::Weak);
        assert_eq!(CurveId::BnP254.descriptor().status, SecurityStatus::Legacy);
        assert_eq!(warnings_while_selecting("BN-256"), 1);
        assert_eq!(warnings_while_selecting("BN254"), 1);
        assert_eq!(warnings_while_selecting("BLS12-381"), 0);
        assert_eq!(warnings_while_selecting("NIST_P256"), 0);
    }

    #[test]
    fn deprecated_curves_remain_decodable() {
        let descriptor = ensure_decodable(CurveId::BnP158.as_byte()).expect("decodable");
        assert_eq!(descriptor.status, SecurityStatus::Deprecated);
        assert!(matches!(ensure_decodable(0x01), Err(Error::UnknownCurve(0x01))));
    }

    #[test]
    fn concurrent_first_use_sees_one_registry() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| lookup_by_name("BN254").map(|d| d as *const _ as usize)))
            .collect();
        let addrs: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn curve_id_serde_round_trip() {
        let json = serde_json::to_string(&CurveId::Bls12_381).expect("serialize");
        let back: CurveId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, CurveId::Bls12_381);
    }
}
