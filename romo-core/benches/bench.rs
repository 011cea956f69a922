use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::{RngCore, SeedableRng};
use romo_core::{AesRng, Block};

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("aes_rng");
    for len in [64_usize, 1 << 20] {
        g.throughput(Throughput::Bytes(len as u64));
        g.bench_function(format!("fill {len} bytes"), |b| {
            let mut rng = AesRng::from_seed(Block::ONES);
            b.iter_batched_ref(
                || vec![0_u8; len],
                |buf| rng.fill_bytes(buf),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
