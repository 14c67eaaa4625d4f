use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pinyin_core::dict::DEFAULT_DICT_TOML;
use pinyin_core::settings::DataPolicy;
use pinyin_core::CandidateDictionary;

fn bench_lookup(c: &mut Criterion) {
    let dict = CandidateDictionary::from_toml(DEFAULT_DICT_TOML, DataPolicy::Sanitize)
        .expect("embedded dictionary must parse");

    let mut group = c.benchmark_group("lookup");
    for key in ["a", "zhuang", "nihao", "zhongguo", "qqq"] {
        group.bench_with_input(BenchmarkId::from_parameter(key), key, |b, key| {
            b.iter(|| dict.lookup(std::hint::black_box(key)).len())
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("from_toml/sanitize", |b| {
        b.iter(|| CandidateDictionary::from_toml(DEFAULT_DICT_TOML, DataPolicy::Sanitize))
    });
}

criterion_group!(benches, bench_lookup, bench_build);
criterion_main!(benches);
