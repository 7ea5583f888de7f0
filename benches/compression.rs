use abe_codec::codec::compress::{
    RootConvention, compress_cyclotomic, decompress_cyclotomic, recover_y, sign_of,
};
use abe_codec::{CurvePoint, PairingBackend, TargetGroup};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn bench_engine<B: PairingBackend>(c: &mut Criterion, label: &str) {
    let mut rng = StdRng::seed_from_u64(42);

    let p = B::G1::random(&mut rng);
    let (x, y) = p.coordinates().expect("non-identity");
    let (a, b) = B::G1::curve_coefficients();
    let sign = sign_of(&y, RootConvention::Lexicographic);
    c.bench_function(&format!("{label}/recover_y_g1"), |bench| {
        bench.iter(|| {
            black_box(
                recover_y(black_box(&x), &a, &b, sign, RootConvention::Lexicographic)
                    .expect("root"),
            );
        });
    });

    let q = B::G2::random(&mut rng);
    let (x2, y2) = q.coordinates().expect("non-identity");
    let (a2, b2) = B::G2::curve_coefficients();
    let sign2 = sign_of(&y2, RootConvention::Lexicographic);
    c.bench_function(&format!("{label}/recover_y_g2"), |bench| {
        bench.iter(|| {
            black_box(
                recover_y(black_box(&x2), &a2, &b2, sign2, RootConvention::Lexicographic)
                    .expect("root"),
            );
        });
    });

    let gt = B::Target::random(&mut rng);
    let kept = compress_cyclotomic(&gt);
    c.bench_function(&format!("{label}/compress_gt"), |bench| {
        bench.iter(|| black_box(compress_cyclotomic(black_box(&gt))));
    });
    c.bench_function(&format!("{label}/decompress_gt"), |bench| {
        bench.iter(|| {
            black_box(decompress_cyclotomic::<B::Target>(black_box(kept)).expect("valid"))
        });
    });
}

fn criterion_benches(c: &mut Criterion) {
    #[cfg(feature = "ark_bn254")]
    bench_engine::<abe_codec::Bn254Engine>(c, "bn254");
    #[cfg(feature = "ark_bls12381")]
    bench_engine::<abe_codec::Bls12Engine>(c, "bls12_381");
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
