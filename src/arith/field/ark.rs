//! Arkworks implementations of the field traits.
//!
//! One generic impl covers every prime field arkworks builds on `Fp<P, N>`
//! (BN254 and BLS12-381 base and scalar fields), and one covers the quadratic
//! extensions `Fp2<P>` used for G2 coordinates.

use core::cmp::Ordering;

use ark_ff::{
    AdditiveGroup, BigInteger, Field, Fp, Fp2, Fp2Config, FpConfig, One, PrimeField, Zero,
};
use ark_std::UniformRand;
use num_bigint::BigUint;
use rand_core::RngCore;

use crate::{ArithError, CoordinateField, FieldElement};

impl<P: FpConfig<N>, const N: usize> FieldElement for Fp<P, N> {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Self as UniformRand>::rand(rng)
    }

    fn from_u64(n: u64) -> Self {
        Self::from(n)
    }

    fn modulus() -> BigUint {
        BigUint::from_bytes_be(&Self::MODULUS.to_bytes_be())
    }

    fn modulus_bits() -> u32 {
        Self::MODULUS_BIT_SIZE
    }

    fn square(&self) -> Self {
        Field::square(self)
    }

    fn double(&self) -> Self {
        AdditiveGroup::double(self)
    }

    fn invert(&self) -> Result<Self, ArithError> {
        Field::inverse(self).ok_or(ArithError::InverseOfZero)
    }

    fn pow(&self, exp: &[u64]) -> Self {
        Field::pow(self, exp)
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn is_odd(&self) -> bool {
        self.into_bigint().is_odd()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.into_bigint().cmp(&other.into_bigint())
    }

    fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.into_bigint().to_bytes_be())
    }

    fn from_biguint(value: &BigUint) -> Result<Self, ArithError> {
        if *value >= <Self as FieldElement>::modulus() {
            return Err(ArithError::InvalidFieldElement);
        }
        Ok(Self::from_be_bytes_mod_order(&value.to_bytes_be()))
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        let width = <Self as FieldElement>::byte_len();
        let raw = self.into_bigint().to_bytes_be();
        // limb storage is at least as wide as the modulus
        debug_assert!(raw.len() >= width);
        debug_assert!(raw[..raw.len() - width].iter().all(|b| *b == 0));
        raw[raw.len() - width..].to_vec()
    }
}

impl<P: FpConfig<N>, const N: usize> CoordinateField for Fp<P, N> {
    type Base = Self;

    const DEGREE: usize = 1;

    fn from_base(value: Self::Base) -> Self {
        value
    }

    fn coefficients(&self) -> Vec<Self::Base> {
        vec![*self]
    }

    fn from_coefficients(coeffs: &[Self::Base]) -> Result<Self, ArithError> {
        match coeffs {
            [c0] => Ok(*c0),
            _ => Err(ArithError::InvalidLength {
                expected: 1,
                actual: coeffs.len(),
            }),
        }
    }

    fn nonresidue() -> Self::Base {
        <Self as One>::one()
    }

    fn try_inverse(&self) -> Result<Self, ArithError> {
        <Self as FieldElement>::invert(self)
    }
}

impl<P: Fp2Config> CoordinateField for Fp2<P>
where
    P::Fp: FieldElement,
{
    type Base = P::Fp;

    const DEGREE: usize = 2;

    fn from_base(value: Self::Base) -> Self {
        Fp2::new(value, <P::Fp as FieldElement>::zero())
    }

    fn coefficients(&self) -> Vec<Self::Base> {
        vec![self.c0, self.c1]
    }

    fn from_coefficients(coeffs: &[Self::Base]) -> Result<Self, ArithError> {
        match coeffs {
            [c0, c1] => Ok(Fp2::new(*c0, *c1)),
            _ => Err(ArithError::InvalidLength {
                expected: 2,
                actual: coeffs.len(),
            }),
        }
    }

    fn nonresidue() -> Self::Base {
        P::NONRESIDUE
    }

    fn try_inverse(&self) -> Result<Self, ArithError> {
        Field::inverse(self).ok_or(ArithError::InverseOfZero)
    }
}
