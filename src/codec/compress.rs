//! Point compression engine.
//!
//! Shared field math for every wire format: quadratic-residue tests, square
//! roots in Fp (`p ≡ 3 mod 4` shortcut, Tonelli–Shanks otherwise) and Fp2
//! (norm reduction), y-coordinate recovery from `x` plus a selector bit, and
//! Karabina compression of cyclotomic GT elements.

use std::cmp::Ordering;

use num_bigint::BigUint;

use crate::errors::Error;
use crate::{CoordinateField, FieldElement, TargetGroup};

/// How the selector bit chooses between `y` and `-y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootConvention {
    /// Bit set iff `y` is the larger of `{y, p - y}`, comparing the highest
    /// non-zero coefficient first (ZCash, IETF).
    Lexicographic,
    /// Bit set iff `y` is odd (SEC 1 `0x02`/`0x03`). For extension fields the
    /// parity of `c0` decides, falling back to `c1` when `c0 = 0`.
    Parity,
}

/// Legendre symbol `(a | p)` via Euler's criterion: `0`, `1` or `-1`.
pub fn legendre<F: FieldElement>(a: &F) -> i8 {
    if a.is_zero() {
        return 0;
    }
    let exponent: BigUint = (F::modulus() - 1u32) >> 1;
    if a.pow(&exponent.to_u64_digits()).is_one() {
        1
    } else {
        -1
    }
}

pub fn is_square<F: FieldElement>(a: &F) -> bool {
    legendre(a) >= 0
}

/// Square root in a prime field.
///
/// Returns one of the two roots; callers pick the sign. Fails with
/// [`Error::NotASquare`] for non-residues.
pub fn sqrt<F: FieldElement>(a: &F) -> Result<F, Error> {
    if a.is_zero() {
        return Ok(F::zero());
    }
    if legendre(a) != 1 {
        return Err(Error::NotASquare);
    }
    let p = F::modulus();
    let root = if &p % 4u32 == BigUint::from(3u32) {
        let exponent: BigUint = (p + 1u32) >> 2;
        a.pow(&exponent.to_u64_digits())
    } else {
        tonelli_shanks(a, &p)?
    };
    if root.square() != *a {
        debug_assert!(false, "square root of a residue failed to verify");
        return Err(Error::NotASquare);
    }
    Ok(root)
}

fn tonelli_shanks<F: FieldElement>(a: &F, p: &BigUint) -> Result<F, Error> {
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q: BigUint = &p_minus_one >> s;

    let mut z = F::from_u64(2);
    while legendre(&z) != -1 {
        z = z + F::one();
    }

    let mut m = s;
    let mut c = z.pow(&q.to_u64_digits());
    let mut t = a.pow(&q.to_u64_digits());
    let half: BigUint = (&q + 1u32) >> 1;
    let mut r = a.pow(&half.to_u64_digits());

    while !t.is_one() {
        let mut i = 0;
        let mut t_pow = t;
        while !t_pow.is_one() {
            t_pow = t_pow.square();
            i += 1;
            if i == m {
                return Err(Error::NotASquare);
            }
        }
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }
        m = i;
        c = b.square();
        t = t * c;
        r = r * b;
    }
    Ok(r)
}

/// Square root in `Fp2 = Fp[u]/(u² - β)` by norm reduction.
///
/// `a = a0 + a1·u` is a square iff its norm `a0² - β·a1²` is a square in Fp.
fn sqrt_quadratic<F: FieldElement>(a0: F, a1: F, beta: F) -> Result<(F, F), Error> {
    if a1.is_zero() {
        if is_square(&a0) {
            return Ok((sqrt(&a0)?, F::zero()));
        }
        // a0 = β·x1² for some x1, so sqrt(a0) = x1·u
        let x1 = sqrt(&a0.div(&beta)?)?;
        return Ok((F::zero(), x1));
    }

    let norm = a0.square() - beta * a1.square();
    let gamma = sqrt(&norm)?;
    let half = F::from_u64(2).invert()?;
    let mut delta = (a0 + gamma) * half;
    if !is_square(&delta) {
        delta = (a0 - gamma) * half;
    }
    let x0 = sqrt(&delta)?;
    let x1 = a1.div(&x0.double()).map_err(|_| Error::NotASquare)?;

    if x0.square() + beta * x1.square() != a0 || (x0 * x1).double() != a1 {
        return Err(Error::NotASquare);
    }
    Ok((x0, x1))
}

/// Square root of a coordinate-field element (Fp or Fp2).
pub fn sqrt_coordinate<C: CoordinateField>(a: &C) -> Result<C, Error> {
    let coeffs = a.coefficients();
    match coeffs.as_slice() {
        [a0] => Ok(C::from_base(sqrt(a0)?)),
        [a0, a1] => {
            let (x0, x1) = sqrt_quadratic(*a0, *a1, C::nonresidue())?;
            Ok(C::from_coefficients(&[x0, x1])?)
        }
        _ => {
            debug_assert!(false, "coordinate fields are Fp or Fp2");
            Err(Error::InvalidEncoding("unsupported extension degree"))
        }
    }
}

fn is_lexicographically_largest<F: FieldElement>(c: &F) -> bool {
    c.compare(&c.negate()) == Ordering::Greater
}

/// Selector bit for `y` under `convention`.
pub fn sign_of<C: CoordinateField>(y: &C, convention: RootConvention) -> bool {
    let coeffs = y.coefficients();
    match convention {
        RootConvention::Lexicographic => coeffs
            .iter()
            .rev()
            .find(|c| !c.is_zero())
            .is_some_and(is_lexicographically_largest),
        RootConvention::Parity => coeffs
            .iter()
            .find(|c| !c.is_zero())
            .is_some_and(FieldElement::is_odd),
    }
}

/// Right-hand side `x³ + a·x + b` of the curve equation.
pub fn curve_rhs<C: CoordinateField>(x: &C, a: &C, b: &C) -> C {
    *x * *x * *x + *a * *x + *b
}

/// Recovers `y` from `x` and the selector bit.
///
/// Fails with [`Error::NotASquare`] when `x` is not the abscissa of a curve
/// point, and with [`Error::InvalidEncoding`] when no root carries the
/// requested sign (only possible for `y = 0`).
pub fn recover_y<C: CoordinateField>(
    x: &C,
    a: &C,
    b: &C,
    sign: bool,
    convention: RootConvention,
) -> Result<C, Error> {
    let y = sqrt_coordinate(&curve_rhs(x, a, b))?;
    if sign_of(&y, convention) == sign {
        return Ok(y);
    }
    let neg = -y;
    if sign_of(&neg, convention) == sign {
        return Ok(neg);
    }
    Err(Error::InvalidEncoding("non-canonical sign bit"))
}

/// Tower coefficients reordered as Karabina's `(g0, g1, g2, g3, g4, g5)`,
/// the coefficients of `(1, w³, w, w⁴, w², w⁵)`.
pub fn to_karabina<T: TargetGroup>(gt: &T) -> [T::Fp2; 6] {
    let t = gt.to_tower();
    [t[0], t[4], t[3], t[2], t[1], t[5]]
}

/// Inverse of [`to_karabina`]; no subgroup check.
pub fn from_karabina<T: TargetGroup>(g: [T::Fp2; 6]) -> T {
    T::from_tower_unchecked([g[0], g[4], g[3], g[2], g[1], g[5]])
}

/// Karabina compression: keep `(g2, g3, g4, g5)`.
pub fn compress_cyclotomic<T: TargetGroup>(gt: &T) -> [T::Fp2; 4] {
    let g = to_karabina(gt);
    [g[2], g[3], g[4], g[5]]
}

/// Rebuilds `g1` and `g0` from `(g2, g3, g4, g5)` and checks the result is in
/// the order-`r` subgroup.
pub fn decompress_cyclotomic<T: TargetGroup>(kept: [T::Fp2; 4]) -> Result<T, Error> {
    let [g2, g3, g4, g5] = kept;
    let xi = T::tower_nonresidue();
    let small = |n: u64| {
        T::Fp2::from_base(<<T::Fp2 as CoordinateField>::Base as FieldElement>::from_u64(n))
    };
    let (one, two, three, four) = (small(1), small(2), small(3), small(4));

    let g1 = if !g2.is_zero_element() {
        let numerator = xi * g5 * g5 + three * g4 * g4 - two * g3;
        numerator * (four * g2).try_inverse()?
    } else if !g3.is_zero_element() {
        two * g4 * g5 * g3.try_inverse()?
    } else if g4.is_zero_element() && g5.is_zero_element() {
        return Ok(T::identity());
    } else {
        return Err(Error::InvalidEncoding("degenerate cyclotomic encoding"));
    };
    let g0 = xi * (two * g1 * g1 + g2 * g5 - three * g3 * g4) + one;

    let gt: T = from_karabina([g0, g1, g2, g3, g4, g5]);
    if !gt.is_in_subgroup() {
        return Err(Error::InvalidSubgroup);
    }
    Ok(gt)
}
