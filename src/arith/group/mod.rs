use std::fmt::Debug;

use rand_core::RngCore;

use crate::{ArithError, CoordinateField, FieldElement};

mod ark;
pub use ark::SwPoint;

#[cfg(feature = "ark_bls12381")]
pub(crate) mod ark_bls12_381;
#[cfg(feature = "ark_bn254")]
pub(crate) mod ark_bn254;

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// Points are kept in projective form; [`coordinates`](CurvePoint::coordinates)
/// normalises to affine `(x, y)` for the wire codecs. Construction from raw
/// coordinates is checked: a point that is off the curve or outside the
/// prime-order subgroup is reported as an error, never returned.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "ark_bn254")]
/// # {
/// use abe_codec::bn254::{Fr, G1};
/// use abe_codec::{CurvePoint, FieldElement};
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
/// let scalar = Fr::random(&mut rng);
///
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let (x, y) = point.coordinates().expect("non-identity");
/// assert_eq!(G1::from_coordinates(x, y).unwrap(), point);
/// # }
/// ```
pub trait CurvePoint<F: FieldElement>: Copy + Send + Sync + Debug + Eq + 'static {
    /// Associated affine representation.
    type Affine: Copy + Debug + Send + Sync + 'static;

    /// Field the affine coordinates live in (Fp for G1, Fp2 for G2).
    type Coordinate: CoordinateField;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Samples a uniformly random group element.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::generator().mul_scalar(&F::random(rng))
    }

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Converts from affine to projective coordinates.
    fn from_affine(affine: &Self::Affine) -> Self;

    /// Converts from projective to affine coordinates.
    fn to_affine(&self) -> Self::Affine;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Short Weierstrass coefficients `(a, b)` of `y² = x³ + a·x + b`.
    fn curve_coefficients() -> (Self::Coordinate, Self::Coordinate);

    /// Affine coordinates, or `None` for the point at infinity.
    fn coordinates(&self) -> Option<(Self::Coordinate, Self::Coordinate)>;

    /// Builds a point from affine coordinates without any validation.
    ///
    /// Only for callers that validate afterwards (or tests that need
    /// deliberately invalid points).
    fn from_coordinates_unchecked(x: Self::Coordinate, y: Self::Coordinate) -> Self;

    /// Builds a point from affine coordinates, checking the curve equation
    /// and subgroup membership.
    fn from_coordinates(x: Self::Coordinate, y: Self::Coordinate) -> Result<Self, ArithError> {
        let point = Self::from_coordinates_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(ArithError::PointNotOnCurve);
        }
        if !point.is_in_subgroup() {
            return Err(ArithError::InvalidSubgroup);
        }
        Ok(point)
    }

    /// Checks the curve equation (the identity always passes).
    fn is_on_curve(&self) -> bool;

    /// Prime-order subgroup membership, assuming the point is on the curve.
    fn is_in_subgroup(&self) -> bool;

    /// The backend's own canonical encoding.
    fn to_native_bytes(&self) -> Result<Vec<u8>, ArithError>;

    /// Parses the backend's own canonical encoding, with full validation.
    fn from_native_bytes(bytes: &[u8]) -> Result<Self, ArithError>;
}

/// Pairing target group (GT) abstraction.
///
/// GT is a multiplicative subgroup of the degree-12 tower
/// `Fp12 = Fp6[w]/(w² − v)`, `Fp6 = Fp2[v]/(v³ − ξ)`. The tower view
/// ([`to_tower`](TargetGroup::to_tower)) exposes the six Fp2 coefficients in
/// `(C0.B0, C0.B1, C0.B2, C1.B0, C1.B1, C1.B2)` order.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "ark_bls12381")]
/// # {
/// use abe_codec::bls12_381::{Bls12Engine, G1, G2};
/// use abe_codec::{CurvePoint, PairingBackend, TargetGroup};
///
/// let gt = Bls12Engine::pairing(&G1::generator(), &G2::generator());
/// let squared = gt.mul(&gt);
/// assert_eq!(squared.div(&gt).unwrap(), gt);
/// # }
/// ```
pub trait TargetGroup: Copy + Send + Sync + Debug + Eq + 'static {
    /// Scalar field type for exponentiation.
    type Scalar: FieldElement;
    /// Quadratic subfield of the tower.
    type Fp2: CoordinateField;

    /// Returns the multiplicative identity element.
    fn identity() -> Self;

    /// Returns `e(g1, g2)` for the standard generators.
    fn generator() -> Self;

    /// Samples a uniformly random element of the order-`r` subgroup.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::generator().exp(&Self::Scalar::random(rng))
    }

    /// Multiplies two target group elements.
    fn mul(&self, other: &Self) -> Self;

    /// Multiplicative inverse, failing on zero.
    fn inverse(&self) -> Result<Self, ArithError>;

    /// Computes `self / other`.
    fn div(&self, other: &Self) -> Result<Self, ArithError> {
        let inv = other.inverse().map_err(|_| ArithError::DivisionByZero)?;
        Ok(self.mul(&inv))
    }

    /// Raises this element to a scalar power.
    fn exp(&self, scalar: &Self::Scalar) -> Self;

    /// Returns true for the multiplicative identity.
    fn is_unity(&self) -> bool;

    /// The `ξ` with `v³ = ξ` in the tower.
    fn tower_nonresidue() -> Self::Fp2;

    /// The six Fp2 coefficients in tower order.
    fn to_tower(&self) -> [Self::Fp2; 6];

    /// Rebuilds a tower element without subgroup validation.
    fn from_tower_unchecked(coeffs: [Self::Fp2; 6]) -> Self;

    /// Order-`r` subgroup membership.
    fn is_in_subgroup(&self) -> bool;

    /// The backend's own canonical encoding.
    fn to_native_bytes(&self) -> Result<Vec<u8>, ArithError>;

    /// Parses the backend's own canonical encoding, with subgroup validation.
    fn from_native_bytes(bytes: &[u8]) -> Result<Self, ArithError>;
}
