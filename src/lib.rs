//! # abe-codec: pairing elements and their standard wire formats
//!
//! The element layer of an attribute-based encryption toolkit. It offers one
//! API for scalars, curve points (G1, G2) and pairing target elements (GT)
//! whatever curve engine is compiled in, and converts them to and from the
//! byte-exact encodings other ecosystems expect.
//!
//! ## Architecture
//!
//! - **Arithmetic facade**: the [`FieldElement`], [`CoordinateField`],
//!   [`CurvePoint`], [`TargetGroup`] and [`PairingBackend`] traits, implemented
//!   on arkworks by [`Bn254Engine`] and [`Bls12Engine`].
//!
//! - **[`registry`]**: static curve descriptors with security status, looked
//!   up by header byte or by name.
//!
//! - **[`codec`]**: the 9-byte `OABE` header, the SEC1, ZCash, Ethereum and
//!   IETF codecs, the point and GT compression engine and the legacy shim.
//!
//! - **[`config`]**: [`CodecConfig`], the serde-friendly encoding choice.
//!
//! - **[`errors`]**: [`ArithError`] for the facade and [`Error`] for the codec.
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "ark_bls12381")]
//! # fn main() -> Result<(), abe_codec::Error> {
//! use abe_codec::bls12_381::{Bls12Engine, G2};
//! use abe_codec::codec::{self, Element, ElementType, Format};
//! use abe_codec::CurvePoint;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let q = Element::<Bls12Engine>::G2(G2::random(&mut rng));
//!
//! // Compressed ZCash encoding behind the header: 9 + 96 bytes
//! let bytes = codec::serialize(&q, Format::Auto, true)?;
//! assert_eq!(bytes.len(), 105);
//! assert!(!codec::is_legacy(&bytes));
//!
//! let back = codec::deserialize::<Bls12Engine>(&bytes, true, ElementType::G2)?;
//! assert_eq!(back, q);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ark_bls12381"))]
//! # fn main() {}
//! ```
//!
//! ## Feature Flags
//!
//! - **`ark_bn254`** (default): BN254 engine
//! - **`ark_bls12381`** (default): BLS12-381 engine
//! - **`parallel`**: arkworks' internal parallelism
//!
//! Batch encoding ([`codec::serialize_batch`], [`codec::deserialize_batch`])
//! always fans out over Rayon.
//!
//! ## Security Considerations
//!
//! - Every decoded point is checked against the curve equation and the
//!   prime-order subgroup; GT elements are checked against the order-r
//!   subgroup of Fp12.
//! - Decoding never panics on attacker-controlled bytes. Errors carry only
//!   their kind, never the offending offset.

mod arith;
pub mod codec;
pub mod config;
pub mod errors;
pub mod registry;
mod serde_impl;

pub use arith::*;
pub use codec::{Element, ElementType, Format};
pub use config::CodecConfig;
pub use errors::*;
pub use registry::CurveId;

/// BN254 fields, groups and engine.
#[cfg(feature = "ark_bn254")]
pub mod bn254 {
    pub use crate::Bn254Engine;
    pub use crate::arith::group::ark_bn254::{G1, G2, Gt};
    pub use ark_bn254::{Fq, Fq2, Fr};
}

/// BLS12-381 fields, groups and engine.
#[cfg(feature = "ark_bls12381")]
pub mod bls12_381 {
    pub use crate::Bls12Engine;
    pub use crate::arith::group::ark_bls12_381::{G1, G2, Gt};
    pub use ark_bls12_381::{Fq, Fq2, Fr};
}
