//! Arkworks short Weierstrass points and the shared GT wrapper.
//!
//! Both pairing curves (and both of their source groups) are short
//! Weierstrass curves in arkworks, so one generic wrapper over
//! [`SWCurveConfig`] covers G1 and G2 on every curve. The target group is
//! concrete per curve; [`impl_target_group!`] stamps the implementation out
//! for each tower.

use std::fmt;

use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{ArithError, CoordinateField, CurvePoint, FieldElement};

/// Projective point on an arkworks short Weierstrass curve.
pub struct SwPoint<P: SWCurveConfig>(pub Projective<P>);

impl<P: SWCurveConfig> Clone for SwPoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SWCurveConfig> Copy for SwPoint<P> {}

impl<P: SWCurveConfig> fmt::Debug for SwPoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SwPoint").field(&self.0).finish()
    }
}

impl<P: SWCurveConfig> PartialEq for SwPoint<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: SWCurveConfig> Eq for SwPoint<P> {}

impl<P: SWCurveConfig> From<Projective<P>> for SwPoint<P> {
    fn from(point: Projective<P>) -> Self {
        SwPoint(point)
    }
}

impl<P: SWCurveConfig> From<SwPoint<P>> for Projective<P> {
    fn from(point: SwPoint<P>) -> Self {
        point.0
    }
}

impl<P> CurvePoint<P::ScalarField> for SwPoint<P>
where
    P: SWCurveConfig,
    P::ScalarField: FieldElement,
    P::BaseField: CoordinateField,
{
    type Affine = Affine<P>;
    type Coordinate = P::BaseField;

    fn identity() -> Self {
        SwPoint(<Projective<P> as Zero>::zero())
    }

    fn generator() -> Self {
        SwPoint(P::GENERATOR.into_group())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        SwPoint(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        SwPoint(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        SwPoint(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        SwPoint(-self.0)
    }

    fn mul_scalar(&self, scalar: &P::ScalarField) -> Self {
        SwPoint(self.0 * *scalar)
    }

    fn curve_coefficients() -> (P::BaseField, P::BaseField) {
        (P::COEFF_A, P::COEFF_B)
    }

    fn coordinates(&self) -> Option<(P::BaseField, P::BaseField)> {
        let affine = self.0.into_affine();
        if affine.infinity {
            None
        } else {
            Some((affine.x, affine.y))
        }
    }

    fn from_coordinates_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        SwPoint(Affine::<P>::new_unchecked(x, y).into_group())
    }

    fn is_on_curve(&self) -> bool {
        self.0.into_affine().is_on_curve()
    }

    fn is_in_subgroup(&self) -> bool {
        self.0
            .into_affine()
            .is_in_correct_subgroup_assuming_on_curve()
    }

    fn to_native_bytes(&self) -> Result<Vec<u8>, ArithError> {
        let mut bytes = Vec::new();
        self.0
            .into_affine()
            .serialize_compressed(&mut bytes)
            .map_err(|_| ArithError::Native("point serialization"))?;
        Ok(bytes)
    }

    fn from_native_bytes(bytes: &[u8]) -> Result<Self, ArithError> {
        let mut reader = bytes;
        let affine = Affine::<P>::deserialize_compressed_unchecked(&mut reader)
            .map_err(|_| ArithError::Native("invalid point bytes"))?;
        if !reader.is_empty() {
            return Err(ArithError::Native("trailing bytes"));
        }
        if !affine.is_on_curve() {
            return Err(ArithError::PointNotOnCurve);
        }
        if !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(ArithError::InvalidSubgroup);
        }
        Ok(SwPoint(affine.into_group()))
    }
}

/// Defines the GT wrapper for one arkworks pairing engine.
///
/// The generator `e(g1, g2)` is computed once and cached in a process-wide
/// `OnceLock`.
macro_rules! impl_target_group {
    (
        $(#[$meta:meta])*
        $gt:ident,
        engine = $engine:ty,
        scalar = $fr:ty,
        fp2 = $fq2:ty,
        fp6 = $fq6:ty,
        fp12 = $fq12:ty,
        fp6_config = $fq6_config:ty,
        g1 = $g1_config:ty,
        g2 = $g2_config:ty $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $gt(pub ::ark_ec::pairing::PairingOutput<$engine>);

        impl $crate::TargetGroup for $gt {
            type Scalar = $fr;
            type Fp2 = $fq2;

            fn identity() -> Self {
                $gt(::ark_ec::pairing::PairingOutput(<$fq12 as ::ark_ff::One>::one()))
            }

            fn generator() -> Self {
                static GENERATOR: ::std::sync::OnceLock<$gt> = ::std::sync::OnceLock::new();
                *GENERATOR.get_or_init(|| {
                    use ::ark_ec::short_weierstrass::SWCurveConfig;
                    $gt(<$engine as ::ark_ec::pairing::Pairing>::pairing(
                        <$g1_config as SWCurveConfig>::GENERATOR,
                        <$g2_config as SWCurveConfig>::GENERATOR,
                    ))
                })
            }

            fn mul(&self, other: &Self) -> Self {
                $gt(::ark_ec::pairing::PairingOutput(self.0.0 * other.0.0))
            }

            fn inverse(&self) -> Result<Self, $crate::ArithError> {
                <$fq12 as ::ark_ff::Field>::inverse(&self.0.0)
                    .map(|inv| $gt(::ark_ec::pairing::PairingOutput(inv)))
                    .ok_or($crate::ArithError::InverseOfZero)
            }

            fn exp(&self, scalar: &$fr) -> Self {
                let exponent = <$fr as ::ark_ff::PrimeField>::into_bigint(*scalar);
                $gt(::ark_ec::pairing::PairingOutput(
                    <$fq12 as ::ark_ff::Field>::pow(&self.0.0, exponent),
                ))
            }

            fn is_unity(&self) -> bool {
                <$fq12 as ::ark_ff::One>::is_one(&self.0.0)
            }

            fn tower_nonresidue() -> $fq2 {
                <$fq6_config as ::ark_ff::Fp6Config>::NONRESIDUE
            }

            fn to_tower(&self) -> [$fq2; 6] {
                let f = &self.0.0;
                [f.c0.c0, f.c0.c1, f.c0.c2, f.c1.c0, f.c1.c1, f.c1.c2]
            }

            fn from_tower_unchecked(c: [$fq2; 6]) -> Self {
                let f = <$fq12>::new(<$fq6>::new(c[0], c[1], c[2]), <$fq6>::new(c[3], c[4], c[5]));
                $gt(::ark_ec::pairing::PairingOutput(f))
            }

            fn is_in_subgroup(&self) -> bool {
                let f = &self.0.0;
                if <$fq12 as ::ark_ff::Zero>::is_zero(f) {
                    return false;
                }
                let order = <$fr as ::ark_ff::PrimeField>::MODULUS;
                <$fq12 as ::ark_ff::One>::is_one(&<$fq12 as ::ark_ff::Field>::pow(f, order))
            }

            fn to_native_bytes(&self) -> Result<Vec<u8>, $crate::ArithError> {
                let mut bytes = Vec::new();
                ::ark_serialize::CanonicalSerialize::serialize_compressed(&self.0, &mut bytes)
                    .map_err(|_| $crate::ArithError::Native("target serialization"))?;
                Ok(bytes)
            }

            fn from_native_bytes(bytes: &[u8]) -> Result<Self, $crate::ArithError> {
                let mut reader = bytes;
                let value = <::ark_ec::pairing::PairingOutput<$engine> as ::ark_serialize::CanonicalDeserialize>::deserialize_compressed_unchecked(&mut reader)
                    .map_err(|_| $crate::ArithError::Native("invalid GT bytes"))?;
                if !reader.is_empty() {
                    return Err($crate::ArithError::Native("trailing bytes"));
                }
                let gt = $gt(value);
                if !$crate::TargetGroup::is_in_subgroup(&gt) {
                    return Err($crate::ArithError::InvalidSubgroup);
                }
                Ok(gt)
            }
        }
    };
}

pub(crate) use impl_target_group;
