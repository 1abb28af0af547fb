//! KMZ packaging tests against real files.

use std::fs::File;
use std::io::Read;

use kmlkit::{
    Compression, Coordinate, DOC_KML, KmzConfig, KmzWriter, Payload, coordinates, elements, kml,
    name, placemark, point, write_kmz,
};
use tempfile::TempDir;
use zip::{CompressionMethod, ZipArchive};

fn read_archive(file: File) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(file).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            (entry.name().to_string(), content)
        })
        .collect()
}

#[test]
fn test_write_kmz_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zurich.kmz");

    let doc = kml(placemark(elements![
        name("Zürich"),
        point(elements![coordinates(vec![Coordinate::new(8.541111, 47.374444)])]),
    ]));
    write_kmz(File::create(&path).unwrap(), [(DOC_KML, Payload::from(doc))]).unwrap();

    let entries = read_archive(File::open(&path).unwrap());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "doc.kml");
    assert_eq!(
        String::from_utf8(entries[0].1.clone()).unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <kml xmlns=\"http://www.opengis.net/kml/2.2\"><Placemark><name>Zürich</name>\
         <Point><coordinates>8.541111,47.374444</coordinates></Point></Placemark></kml>"
    );
}

#[test]
fn test_mixed_payloads_in_name_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.kmz");
    let image: Vec<u8> = (0..=255).collect();

    KmzWriter::new()
        .with_config(KmzConfig {
            compression_level: Some(9),
            ..Default::default()
        })
        .write(
            File::create(&path).unwrap(),
            vec![
                ("images/icon.png".to_string(), Payload::from(image.clone())),
                ("doc.kml".to_string(), Payload::element(placemark(elements![name("p")]))),
                ("README".to_string(), Payload::reader(&b"read me"[..])),
            ],
        )
        .unwrap();

    let entries = read_archive(File::open(&path).unwrap());
    let names: Vec<_> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["README", "doc.kml", "images/icon.png"]);
    assert_eq!(entries[0].1, b"read me");
    assert!(
        String::from_utf8_lossy(&entries[1].1)
            .ends_with("<kml xmlns=\"http://www.opengis.net/kml/2.2\"><Placemark><name>p</name></Placemark></kml>")
    );
    assert_eq!(entries[2].1, image);
}

#[test]
fn test_stored_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stored.kmz");
    KmzWriter::new()
        .with_config(KmzConfig {
            compression: Compression::Stored,
            ..Default::default()
        })
        .write(File::create(&path).unwrap(), [("a.txt", Payload::from("aaaa"))])
        .unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let entry = archive.by_name("a.txt").unwrap();
    assert_eq!(entry.compression(), CompressionMethod::Stored);
    assert_eq!(entry.compressed_size(), 4);
}

#[test]
fn test_unsupported_payload() {
    let err = Payload::from_any(1.5f64).unwrap_err();
    assert_eq!(err.to_string(), "f64: unsupported type");
}
