//! Arkworks BLS12-381 groups.
//!
//! - **G1**: points on E(Fq), `y² = x³ + 4`
//! - **G2**: points on the M-twist E'(Fq2), `y² = x³ + 4(u + 1)`
//! - **Gt**: order-r subgroup of Fq12

use ark_bls12_381::{Bls12_381, Fq2, Fq6, Fq6Config, Fq12, Fr, g1, g2};

use super::SwPoint;
use super::ark::impl_target_group;

/// G1 group element for the Arkworks BLS12-381 backend.
pub type G1 = SwPoint<g1::Config>;

/// G2 group element for the Arkworks BLS12-381 backend.
pub type G2 = SwPoint<g2::Config>;

impl_target_group! {
    /// Target group element for the Arkworks BLS12-381 backend.
    Gt,
    engine = Bls12_381,
    scalar = Fr,
    fp2 = Fq2,
    fp6 = Fq6,
    fp12 = Fq12,
    fp6_config = Fq6Config,
    g1 = g1::Config,
    g2 = g2::Config,
}
