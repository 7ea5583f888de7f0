use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand_core::RngCore;

use crate::ArithError;

mod ark;

/// Prime field abstraction used for both scalar fields (Fr) and base fields (Fp).
///
/// Ring arithmetic goes through the standard operator traits. Everything that
/// can fail (inversion, division, decoding) returns a typed [`ArithError`]
/// instead of a sentinel value.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "ark_bn254")]
/// # {
/// use abe_codec::FieldElement;
/// use ark_bn254::Fq;
///
/// let a = <Fq as FieldElement>::from_u64(6);
/// let b = <Fq as FieldElement>::from_u64(3);
/// assert_eq!(a.div(&b).unwrap(), <Fq as FieldElement>::from_u64(2));
/// assert!(a.div(&<Fq as FieldElement>::zero()).is_err());
/// # }
/// ```
pub trait FieldElement:
    Copy
    + Send
    + Sync
    + Debug
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Samples a uniformly random element from a caller-supplied RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Converts a small integer into the field.
    fn from_u64(n: u64) -> Self;

    /// The field modulus `p`.
    fn modulus() -> BigUint;

    /// Bit length of the modulus.
    fn modulus_bits() -> u32;

    /// Width of the fixed big-endian encoding, `ceil(bits / 8)`.
    fn byte_len() -> usize {
        (Self::modulus_bits() as usize).div_ceil(8)
    }

    /// Computes `self * self`.
    fn square(&self) -> Self;

    /// Computes `self + self`.
    fn double(&self) -> Self;

    fn negate(&self) -> Self {
        -*self
    }

    /// Computes the multiplicative inverse.
    fn invert(&self) -> Result<Self, ArithError>;

    /// Computes `self / other`.
    fn div(&self, other: &Self) -> Result<Self, ArithError> {
        let inv = other
            .invert()
            .map_err(|_| ArithError::DivisionByZero)?;
        Ok(*self * inv)
    }

    /// Raises this element to a power given as little-endian 64-bit limbs.
    fn pow(&self, exp: &[u64]) -> Self;

    /// Returns true for the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true for the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Parity of the canonical integer representative.
    fn is_odd(&self) -> bool;

    /// Compares canonical integer representatives.
    fn compare(&self, other: &Self) -> Ordering;

    /// Canonical integer representative in `[0, p)`.
    fn to_biguint(&self) -> BigUint;

    /// Builds an element from an integer, rejecting values `>= p`.
    fn from_biguint(value: &BigUint) -> Result<Self, ArithError>;

    /// Fixed-width big-endian encoding of the canonical representative.
    fn to_bytes_be(&self) -> Vec<u8>;

    /// Decodes a fixed-width big-endian value.
    ///
    /// Fails with [`ArithError::InvalidLength`] if `bytes` is not exactly
    /// [`byte_len`](FieldElement::byte_len) long and with
    /// [`ArithError::InvalidFieldElement`] if the value is not reduced.
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ArithError> {
        if bytes.len() != Self::byte_len() {
            return Err(ArithError::InvalidLength {
                expected: Self::byte_len(),
                actual: bytes.len(),
            });
        }
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// Lowercase hex of [`to_bytes_be`](FieldElement::to_bytes_be).
    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes_be())
    }

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    ///
    /// Short strings are left-padded to the fixed width. An empty digit
    /// string is [`ArithError::InvalidHex`].
    fn from_hex(s: &str) -> Result<Self, ArithError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Err(ArithError::InvalidHex);
        }
        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{digits}");
            padded.as_str()
        } else {
            digits
        };
        let raw = hex::decode(digits).map_err(|_| ArithError::InvalidHex)?;
        let width = Self::byte_len();
        if raw.len() > width {
            return Err(ArithError::InvalidLength {
                expected: width,
                actual: raw.len(),
            });
        }
        let mut bytes = vec![0u8; width - raw.len()];
        bytes.extend_from_slice(&raw);
        Self::from_bytes_be(&bytes)
    }
}

/// Field holding curve coordinates: Fp for G1, Fp2 for G2.
///
/// Elements are viewed as vectors of base-field coefficients in ascending
/// order, `c0 + c1·u` with `u² = nonresidue()`. Wire formats decide in which
/// order the coefficients are written.
pub trait CoordinateField:
    Copy
    + Send
    + Sync
    + Debug
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Prime field the coefficients live in.
    type Base: FieldElement;

    /// Extension degree over [`Base`](CoordinateField::Base).
    const DEGREE: usize;

    /// Embeds a base-field element.
    fn from_base(value: Self::Base) -> Self;

    /// Coefficients in ascending order (`c0` first).
    fn coefficients(&self) -> Vec<Self::Base>;

    /// Rebuilds an element from exactly `DEGREE` coefficients.
    fn from_coefficients(coeffs: &[Self::Base]) -> Result<Self, ArithError>;

    /// The quadratic non-residue `β` with `u² = β` (one for prime fields).
    fn nonresidue() -> Self::Base;

    /// Multiplicative inverse, failing on zero.
    fn try_inverse(&self) -> Result<Self, ArithError>;

    /// Returns true when every coefficient is zero.
    fn is_zero_element(&self) -> bool {
        self.coefficients()
            .iter()
            .all(<Self::Base as FieldElement>::is_zero)
    }
}
