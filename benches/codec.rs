use abe_codec::codec::{self, CodecConfig, Element, ElementType, Format};
use abe_codec::{CurvePoint, PairingBackend};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

fn bench_engine<B: PairingBackend>(c: &mut Criterion, label: &str) {
    let mut rng = StdRng::seed_from_u64(42);
    let g2 = Element::<B>::G2(B::G2::random(&mut rng));

    for compress in [false, true] {
        let config = CodecConfig::new(Format::Auto, Some(compress), true);
        let Ok(bytes) = codec::serialize_with(&g2, &config) else {
            continue;
        };
        let tag = if compress { "compressed" } else { "uncompressed" };
        c.bench_function(&format!("{label}/serialize_g2_{tag}"), |bench| {
            bench.iter(|| {
                black_box(codec::serialize_with(black_box(&g2), &config).expect("encode"))
            });
        });
        c.bench_function(&format!("{label}/deserialize_g2_{tag}"), |bench| {
            bench.iter(|| {
                black_box(
                    codec::deserialize::<B>(black_box(&bytes), true, ElementType::G2)
                        .expect("decode"),
                )
            });
        });
    }

    let points: Vec<Element<B>> = (0..256).map(|_| Element::G1(B::G1::random(&mut rng))).collect();
    let config = CodecConfig::default();
    let encoded = codec::serialize_batch(&points, &config).expect("batch encode");
    c.bench_function(&format!("{label}/deserialize_batch_g1_256"), |bench| {
        bench.iter(|| {
            black_box(
                codec::deserialize_batch::<B, _>(black_box(&encoded), true, ElementType::G1)
                    .expect("batch decode"),
            )
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
