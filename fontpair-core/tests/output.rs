use std::fs;

use tempfile::tempdir;

use fontpair_core::database::FontDatabase;
use fontpair_core::output::{write_database, write_json_pretty};

#[test]
fn writes_database_and_reads_it_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("google_fonts_db.json");
    let db = FontDatabase::builtin().expect("build");

    write_database(&db, &path).expect("write");

    let loaded = FontDatabase::load(&path).expect("load");
    assert_eq!(loaded, db);
}

#[test]
fn overwrites_existing_artifact() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("db.json");
    fs::write(&path, "stale contents that are much longer than nothing").expect("seed");

    let db = FontDatabase::builtin().expect("build");
    write_database(&db, &path).expect("write");

    let text = fs::read_to_string(&path).expect("read");
    let mut expected = Vec::new();
    write_json_pretty(&db, &mut expected).expect("render");
    assert_eq!(text.as_bytes(), expected.as_slice());
}

#[test]
fn missing_directory_surfaces_error_and_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent").join("db.json");
    let db = FontDatabase::builtin().expect("build");

    let err = write_database(&db, &path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to create font database"));
    assert!(!path.exists());
}

#[test]
fn non_ascii_names_are_written_verbatim() {
    let mut db = FontDatabase::builtin().expect("build");
    db.genre_pairings[0].1[0].rationale = "Élégance littéraire".to_string();

    let mut buf = Vec::new();
    write_json_pretty(&db, &mut buf).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.contains("Élégance littéraire"));
}
