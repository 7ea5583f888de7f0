use std::fmt::Debug;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::Bls12Engine;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::Bn254Engine;

use crate::registry::CurveId;
use crate::{ArithError, CoordinateField, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all cryptographic operations.
///
/// Each curve engine ([`Bn254Engine`], [`Bls12Engine`]) names its scalar
/// field, base field, the three pairing groups and the registry identifier the
/// codecs stamp into headers. Generic code over `B: PairingBackend` is
/// resolved at compile time; there is no runtime backend switch.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `Base`: The base field G1 coordinates live in (Fp)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group, over Fp2
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "ark_bn254")]
/// # {
/// use abe_codec::{Bn254Engine, CurvePoint, FieldElement, PairingBackend, TargetGroup};
/// use rand::thread_rng;
///
/// type Scalar = <Bn254Engine as PairingBackend>::Scalar;
/// type G1 = <Bn254Engine as PairingBackend>::G1;
/// type G2 = <Bn254Engine as PairingBackend>::G2;
///
/// let a = Scalar::random(&mut thread_rng());
/// let lhs = Bn254Engine::pairing(&G1::generator().mul_scalar(&a), &G2::generator());
/// let rhs = Bn254Engine::pairing(&G1::generator(), &G2::generator()).exp(&a);
/// assert_eq!(lhs, rhs);
/// # }
/// ```
pub trait PairingBackend: Copy + Send + Sync + Debug + Eq + Sized + 'static {
    /// Registry identifier written into serialization headers.
    const CURVE: CurveId;

    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// Base field type (Fp).
    type Base: FieldElement + CoordinateField<Base = Self::Base>;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar, Coordinate = Self::Base>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// Returns an error if the input slices have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, ArithError>;
}
