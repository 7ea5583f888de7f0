//! Arkworks BN254 groups.
//!
//! - **G1**: points on E(Fq), `y² = x³ + 3`
//! - **G2**: points on the sextic twist E'(Fq2)
//! - **Gt**: order-r subgroup of Fq12

use ark_bn254::{Bn254, Fq2, Fq6, Fq6Config, Fq12, Fr, g1, g2};

use super::SwPoint;
use super::ark::impl_target_group;

/// G1 group element for the Arkworks BN254 backend.
pub type G1 = SwPoint<g1::Config>;

/// G2 group element for the Arkworks BN254 backend.
pub type G2 = SwPoint<g2::Config>;

impl_target_group! {
    /// Target group element for the Arkworks BN254 backend.
    Gt,
    engine = Bn254,
    scalar = Fr,
    fp2 = Fq2,
    fp6 = Fq6,
    fp12 = Fq12,
    fp6_config = Fq6Config,
    g1 = g1::Config,
    g2 = g2::Config,
}
