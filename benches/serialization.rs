//! Benchmarks for document serialization and packaging.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use kmlkit::{
    Coordinate, DOC_KML, Element, KmlElement, Payload, Sphere, coordinates, coordinates_flat,
    document, elements, folder, kml, line_string, name, placemark, point, write_kmz,
};

/// A document with `n` placemarks, each carrying a small circle.
fn sample_document(n: usize) -> KmlElement {
    let mut folder = folder(elements![name("Circles")]);
    for i in 0..n {
        let center = Coordinate::new(8.0 + i as f64 * 0.01, 47.0);
        folder.push(placemark(elements![
            name(&format!("circle {i}")),
            point(elements![coordinates(vec![center])]),
            line_string(elements![coordinates(Sphere::WGS84.circle(center, 500.0, 1.0))]),
        ]));
    }
    kml(document(elements![folder]))
}

// ============================================================================
// XML Benchmarks
// ============================================================================

fn bench_write_compact(c: &mut Criterion) {
    let doc = sample_document(200);
    c.bench_function("write_compact", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            doc.write(&mut out).unwrap();
            out
        });
    });
}

fn bench_write_indent(c: &mut Criterion) {
    let doc = sample_document(200);
    c.bench_function("write_indent", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            doc.write_indent(&mut out, "", "  ").unwrap();
            out
        });
    });
}

fn bench_coordinates_flat(c: &mut Criterion) {
    let flat: Vec<f64> = (0..30_000).map(|i| i as f64 * 0.001).collect();
    c.bench_function("coordinates_flat", |b| {
        b.iter(|| {
            coordinates_flat(flat.clone(), 0, flat.len(), 3, 3)
                .to_xml_string()
                .unwrap()
        });
    });
}

// ============================================================================
// KMZ Benchmarks
// ============================================================================

fn bench_write_kmz(c: &mut Criterion) {
    c.bench_function("write_kmz", |b| {
        b.iter(|| {
            let mut out = Cursor::new(Vec::new());
            write_kmz(&mut out, [(DOC_KML, Payload::from(sample_document(50)))]).unwrap();
            out.into_inner()
        });
    });
}

criterion_group!(
    benches,
    // XML
    bench_write_compact,
    bench_write_indent,
    bench_coordinates_flat,
    // KMZ
    bench_write_kmz,
);
criterion_main!(benches);
