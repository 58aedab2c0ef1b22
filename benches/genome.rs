use criterion::{criterion_group, criterion_main, Criterion};
use kitties_core::{encode_current_display, GeneSlices, Genome, MemoryView, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_genome(c: &mut Criterion) {
    c.bench_function("decode_16_digits", |b| {
        b.iter(|| Genome::from_numeral("1234567890123456"))
    });

    c.bench_function("slice_short_numeral", |b| {
        b.iter(|| GeneSlices::of("123456789").parse())
    });

    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("random_genome", |b| b.iter(|| Genome::random(&mut rng)));

    let renderer = Renderer::default();
    let genome = Genome::default();
    let mut view = MemoryView::new();
    c.bench_function("render_and_encode", |b| {
        b.iter(|| {
            renderer.render(&genome, &mut view).ok();
            encode_current_display(&view)
        })
    });
}

criterion_group!(benches, bench_genome);
criterion_main!(benches);
