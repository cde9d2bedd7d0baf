#![cfg(test)]

use std::fs;
use std::os::unix::fs::MetadataExt;

use tempfile::tempdir;

use super::*;
use crate::kind::{self, EntryKind};

#[test]
fn test_symbolic_link_round_trip() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    let root = Path::from(tmp.path()).into_directory_form();
    let link = root.join(&Path::from("to_sub"));

    make_link(&link, &Path::from("sub/"), LinkKind::Symbolic).unwrap();

    assert_eq!(
        read_link(&link).unwrap(),
        Path::from("sub/"),
        "The target should be stored exactly as given, relative and in directory form."
    );
    assert_eq!(kind::classify(&link, false).unwrap(), EntryKind::Symlink);
    assert_eq!(kind::classify(&link, true).unwrap(), EntryKind::Directory);
    assert_eq!(
        read_link(&root.join(&Path::from("to_sub/"))).unwrap(),
        Path::from("sub/"),
        "A directory-form link path should still name the link itself."
    );
}

#[test]
fn test_hard_link_resolves_against_link_directory() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("dir")).unwrap();
    fs::write(tmp.path().join("dir/original.txt"), b"data").unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    make_link(
        &root.join(&Path::from("dir/copy.txt")),
        &Path::from("original.txt"),
        LinkKind::Hard,
    )
    .unwrap();

    let original = fs::metadata(tmp.path().join("dir/original.txt")).unwrap();
    let copy = fs::metadata(tmp.path().join("dir/copy.txt")).unwrap();
    assert_eq!(original.ino(), copy.ino());
    assert_eq!(original.nlink(), 2);
}

#[test]
fn test_link_errors() {
    let tmp = tempdir().unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    assert!(matches!(
        make_link(&root.join(&Path::from("l")), &Path::from("*.txt"), LinkKind::Symbolic),
        Err(LinkError::Wild(_))
    ));
    assert!(matches!(
        make_link(&Path::root(), &Path::from("x"), LinkKind::Symbolic),
        Err(LinkError::NoFileComponent(_))
    ));
    assert!(matches!(
        read_link(&root.join(&Path::from("missing"))),
        Err(LinkError::Syscall(e)) if e.errno == libc::ENOENT
    ));
    assert!(matches!(
        make_link(&root.join(&Path::from("h")), &Path::from("missing"), LinkKind::Hard),
        Err(LinkError::Syscall(e)) if e.call == "link"
    ));
}
