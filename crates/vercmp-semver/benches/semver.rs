use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vercmp_semver::{Comparator, Semver, Version, VersionParser};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-alpha.beta.1+sha.5114f85",
        "10.20.30-rc.1",
        "1.0.0---RC-SNAPSHOT.12.9.1--.12+788",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(VersionParser::parse(black_box(version)).ok());
            }
        })
    });

    c.bench_function("is_valid", |b| {
        b.iter(|| {
            for version in versions {
                black_box(VersionParser::is_valid(black_box(version)));
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.0.0-rc.1.2.3.4.5", "1.0.0-rc.1.2.3.4.6"),
    ]
    .iter()
    .map(|(a, b)| (Version::parse(a).unwrap(), Version::parse(b).unwrap()))
    .collect();

    c.bench_function("compare", |b| {
        b.iter(|| {
            for (v1, v2) in &pairs {
                black_box(Comparator::compare(black_box(v1), black_box(v2)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = [
        "1.0.0",
        "0.1.0",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "1.0.0-beta.2",
        "1.10.0",
        "1.9.0",
    ];

    c.bench_function("sort_versions", |b| {
        b.iter(|| black_box(Semver::sort(black_box(&versions))))
    });
}

criterion_group!(benches, bench_parse, bench_compare, bench_sort);
criterion_main!(benches);
