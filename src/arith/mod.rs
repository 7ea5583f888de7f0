//! Backend-agnostic arithmetic facade.
//!
//! This module defines the capability traits every pairing backend provides
//! and the arkworks implementations behind them:
//!
//! - **[`field`]**: prime and quadratic extension fields (Fr, Fp, Fp2)
//! - **[`group`]**: elliptic curve points (G1, G2) and the target group (GT)
//! - **[`pairing`]**: bilinear pairing engines tying the groups together
//!
//! # Backend Support
//!
//! | Feature | Engine | Curve | Registry id |
//! |---------|--------|-------|-------------|
//! | `ark_bn254` (default) | [`Bn254Engine`] | BN254 | `0x6F` |
//! | `ark_bls12381` (default) | [`Bls12Engine`] | BLS12-381 | `0xA2` |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "ark_bls12381")]
//! # {
//! use rand::thread_rng;
//! use abe_codec::{Bls12Engine, CurvePoint, FieldElement, PairingBackend};
//!
//! // Field operations
//! let mut rng = thread_rng();
//! let scalar = <Bls12Engine as PairingBackend>::Scalar::random(&mut rng);
//! let inv = scalar.invert().expect("non-zero scalar");
//! assert!((scalar * inv).is_one());
//!
//! // Curve operations
//! let g1 = <Bls12Engine as PairingBackend>::G1::generator();
//! let point = g1.mul_scalar(&scalar);
//! assert!(point.is_on_curve() && point.is_in_subgroup());
//!
//! // Pairing operation
//! let g2 = <Bls12Engine as PairingBackend>::G2::generator();
//! let gt = Bls12Engine::pairing(&g1, &g2);
//! println!("{:?}", gt);
//! # }
//! ```

mod field;
pub use field::{CoordinateField, FieldElement};

pub(crate) mod group;
pub use group::{CurvePoint, SwPoint, TargetGroup};

mod pairing;
pub use pairing::*;
