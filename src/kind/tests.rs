#![cfg(test)]

use std::fs;
use std::os::unix::fs::symlink;

use tempfile::tempdir;

use super::*;
use crate::path::Path;
use crate::util::panic::assert_panics;

#[test]
fn test_classify_missing_is_absent() {
    let tmp = tempdir().unwrap();
    let missing = Path::from(tmp.path()).into_directory_form().join(&Path::from("nope.txt"));

    assert_eq!(
        classify(&missing, true).unwrap(),
        EntryKind::Absent,
        "A path that doesn't exist should classify as absent, not fail."
    );
    assert_eq!(classify(&missing, false).unwrap(), EntryKind::Absent);

    let under_file = Path::from(tmp.path()).into_directory_form().join(&Path::from("file/inner"));
    fs::write(tmp.path().join("file"), b"").unwrap();
    assert_eq!(
        classify(&under_file, true).unwrap(),
        EntryKind::Absent,
        "A path through a regular file names nothing, which is also absent."
    );
}

#[test]
fn test_classify_kinds() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"hello").unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    symlink(tmp.path().join("sub"), tmp.path().join("link")).unwrap();
    symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

    let root = Path::from(tmp.path()).into_directory_form();

    assert_eq!(classify(&root, true).unwrap(), EntryKind::Directory);
    assert_eq!(classify(&root.join(&Path::from("a.txt")), true).unwrap(), EntryKind::Regular);
    assert_eq!(classify(&root.join(&Path::from("sub/")), true).unwrap(), EntryKind::Directory);
    assert_eq!(
        classify(&root.join(&Path::from("link")), true).unwrap(),
        EntryKind::Directory,
        "Following a link should classify its target."
    );
    assert_eq!(
        classify(&root.join(&Path::from("link/")), false).unwrap(),
        EntryKind::Symlink,
        "Directory form shouldn't cause the link to be followed."
    );
    assert_eq!(
        classify(&root.join(&Path::from("dangling")), true).unwrap(),
        EntryKind::Absent,
        "A dangling link resolves to nothing."
    );
    assert_eq!(classify(&root.join(&Path::from("dangling")), false).unwrap(), EntryKind::Symlink);
    assert_eq!(classify(&Path::from("/dev/null"), true).unwrap(), EntryKind::CharDevice);
}

#[test]
fn test_classify_rejects_wild() {
    assert!(matches!(
        classify(&Path::from("/tmp/*.txt"), true),
        Err(ClassifyError::Wild(_))
    ));
}

#[test]
fn test_unknown_type_bits_panic() {
    assert_eq!(EntryKind::from_stat_mode(libc::S_IFDIR | 0o755), EntryKind::Directory);
    assert_panics!({
        EntryKind::from_stat_mode(libc::S_IFMT);
    }, "type bits outside the known set should be treated as a defect");
}

#[test]
fn test_exists_resolves() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"").unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    symlink("sub", tmp.path().join("link")).unwrap();

    let canonical = Path::from(tmp.path().canonicalize().unwrap()).into_directory_form();
    let root = Path::from(tmp.path()).into_directory_form();

    assert_eq!(
        exists(&root.join(&Path::from("a.txt"))).unwrap(),
        Some(canonical.join(&Path::from("a.txt")))
    );
    assert_eq!(
        exists(&root.join(&Path::from("link"))).unwrap(),
        Some(canonical.join(&Path::from("sub/"))),
        "A link should resolve to its target, in directory form."
    );
    assert_eq!(exists(&root.join(&Path::from("missing"))).unwrap(), None);

    assert_eq!(directory_exists(&root.join(&Path::from("a.txt"))).unwrap(), None);
    assert_eq!(
        directory_exists(&root.join(&Path::from("sub"))).unwrap(),
        Some(canonical.join(&Path::from("sub/")))
    );
}

#[test]
fn test_predicates() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"").unwrap();
    symlink("a.txt", tmp.path().join("link")).unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    assert!(is_directory(&root).unwrap());
    assert!(is_regular_file(&root.join(&Path::from("a.txt"))).unwrap());
    assert!(is_regular_file(&root.join(&Path::from("link"))).unwrap());
    assert!(is_symlink(&root.join(&Path::from("link"))).unwrap());
    assert!(!is_symlink(&root.join(&Path::from("a.txt"))).unwrap());
}
