use calisel::selector::manifest::{read_manifest, write_manifest};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_read_manifest_keeps_line_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    fs::write(&path, "z.jpg 3\na.jpg 1\nm.jpg 2").unwrap();

    let entries = read_manifest(&path).unwrap();
    assert_eq!(entries, vec!["z.jpg", "a.jpg", "m.jpg"]);
}

#[test]
fn test_read_manifest_crlf_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    fs::write(&path, "a.jpg 1\r\nb.jpg 2\r\n").unwrap();

    let entries = read_manifest(&path).unwrap();
    assert_eq!(entries, vec!["a.jpg", "b.jpg"]);
}

#[test]
fn test_write_manifest_newline_terminated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    write_manifest(&path, &["a.npy", "b.npz"]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a.npy\nb.npz\n");
}

#[test]
fn test_write_manifest_unwritable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.txt");
    let err = write_manifest(&path, &["a.npy"]).unwrap_err();
    assert!(!err.is_configuration());
    assert_eq!(err.path(), Some(path.as_path()));
}
