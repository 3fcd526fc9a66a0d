use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orbis_cubesphere::*;
use orbis_math::{Angle, Vector};
use orbis_sphere::{Cap, LatLng, Rect};

fn bench_face(c: &mut Criterion) {
    let r = black_box(Vector::new(0.3, -0.9, 0.2));
    c.bench_function("face", |bencher| bencher.iter(|| black_box(face(r))));
}

fn bench_xyz_to_face_uv(c: &mut Criterion) {
    let r = black_box(Vector::new(-0.5, 0.4, 0.1));
    c.bench_function("xyz_to_face_uv", |bencher| {
        bencher.iter(|| black_box(xyz_to_face_uv(r)))
    });
}

fn bench_face_uv_to_xyz(c: &mut Criterion) {
    let (u, v) = black_box((0.25, -0.6));
    c.bench_function("face_uv_to_xyz", |bencher| {
        bencher.iter(|| black_box(face_uv_to_xyz(CubeFace::NegZ, u, v)))
    });
}

fn bench_st_uv_transforms(c: &mut Criterion) {
    let s = black_box(0.7);
    for method in [
        ProjectionMethod::Linear,
        ProjectionMethod::Tangent,
        ProjectionMethod::Quadratic,
    ] {
        c.bench_function(&format!("st_uv_roundtrip_{method:?}"), |bencher| {
            bencher.iter(|| black_box(method.uv_to_st(method.st_to_uv(s))))
        });
    }
}

fn bench_latlng_to_face_uv(c: &mut Criterion) {
    let ll = black_box(LatLng::from_degrees(37.8, -122.4));
    c.bench_function("latlng_to_face_uv", |bencher| {
        bencher.iter(|| black_box(xyz_to_face_uv(ll.to_point().vector())))
    });
}

fn bench_rect_cap_bound(c: &mut Criterion) {
    let rect = black_box(Rect::from_point_pair(
        LatLng::from_degrees(-10.0, 170.0),
        LatLng::from_degrees(30.0, -150.0),
    ));
    c.bench_function("rect_cap_bound", |bencher| {
        bencher.iter(|| black_box(rect.cap_bound()))
    });
}

fn bench_cap_contains_point(c: &mut Criterion) {
    let cap = Cap::from_center_angle(
        LatLng::from_degrees(12.0, -40.0).to_point(),
        Angle::from_degrees(7.5),
    );
    let p = black_box(LatLng::from_degrees(15.0, -38.0).to_point());
    c.bench_function("cap_contains_point", |bencher| {
        bencher.iter(|| black_box(cap.contains_point(p)))
    });
}

criterion_group!(
    benches,
    bench_face,
    bench_xyz_to_face_uv,
    bench_face_uv_to_xyz,
    bench_st_uv_transforms,
    bench_latlng_to_face_uv,
    bench_rect_cap_bound,
    bench_cap_contains_point,
);
criterion_main!(benches);
