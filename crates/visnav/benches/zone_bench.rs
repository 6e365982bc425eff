//! Criterion benchmarks for the zone hot paths.
//! - Circle linearization + normalization at segment counts {18, 64, 256}.
//! - Containment of random points against those polygons.
//! - Chain walk over long missions that cross a zone repeatedly.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use visnav::geo::{FlatEarth, GeoPoint, GeomCfg, PlanarPoint, Projector, Shape, ZonePolygon};
use visnav::mission::{Waypoint, WaypointChain};

fn circle() -> Shape {
    Shape::Circle {
        center: GeoPoint::new(45.0, -120.0),
        radius: 2000.0,
    }
}

fn random_points(n: usize, seed: u64) -> Vec<PlanarPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-3000.0..3000.0), rng.gen_range(-3000.0..3000.0)))
        .collect()
}

fn bench_zone(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone");
    for &segments in &[18usize, 64, 256] {
        let cfg = GeomCfg {
            circle_segments: segments,
            ..GeomCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("from_shape", segments), &cfg, |b, cfg| {
            b.iter_batched(
                FlatEarth::new,
                |proj| {
                    let _ = ZonePolygon::from_shape(&circle(), &proj, cfg);
                },
                BatchSize::SmallInput,
            )
        });

        let proj = FlatEarth::new();
        let zone = ZonePolygon::from_shape(&circle(), &proj, &cfg).unwrap();
        let pts = random_points(1024, 7);
        group.bench_with_input(BenchmarkId::new("contains_1024", segments), &zone, |b, zone| {
            b.iter(|| pts.iter().filter(|&&p| zone.contains(p)).count())
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    let proj = FlatEarth::with_origin(GeoPoint::new(45.0, -120.0));
    let zone = ZonePolygon::from_shape(&circle(), &proj, &GeomCfg::default()).unwrap();
    for &n in &[100i64, 1_000, 10_000] {
        // zig-zag north/south through the zone so every few waypoints start a run
        let wps: Vec<Waypoint> = (1..=n)
            .map(|k| {
                let lat = 45.0 + 0.03 * ((k % 5) as f64 - 2.0);
                Waypoint::new(k, (k + 1).min(n), lat, -120.0)
            })
            .collect();
        let chain = WaypointChain::new(wps, 1);
        group.bench_with_input(BenchmarkId::new("zone_sequence", n), &chain, |b, chain| {
            b.iter(|| {
                chain.zone_sequence(|wp| zone.contains(proj.project(wp.position())))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_zone, bench_walk);
criterion_main!(benches);
