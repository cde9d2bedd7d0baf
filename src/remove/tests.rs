#![cfg(test)]

use std::fs;
use std::os::unix::fs::symlink;

use tempfile::tempdir;

use super::*;

#[test]
fn test_remove_file() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"").unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    remove_file(&root.join(&Path::from("a.txt"))).unwrap();
    assert!(!tmp.path().join("a.txt").exists());

    assert!(matches!(
        remove_file(&root.join(&Path::from("a.txt"))),
        Err(RemoveError::Syscall(e)) if e.errno == libc::ENOENT
    ));
    assert!(matches!(remove_file(&Path::root()), Err(RemoveError::NoFileComponent(_))));
}

#[test]
fn test_remove_directory_link_as_file() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    symlink(tmp.path().join("sub"), tmp.path().join("link")).unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    remove_file(&root.join(&Path::from("link/"))).unwrap();
    assert!(!tmp.path().join("link").exists());
    assert!(tmp.path().join("sub").is_dir(), "Only the link should be removed.");
}

#[test]
fn test_remove_empty_directory() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("full/inner")).unwrap();
    let root = Path::from(tmp.path()).into_directory_form();

    assert!(matches!(
        remove_empty_directory(&root.join(&Path::from("full/"))),
        Err(RemoveError::Syscall(e)) if e.errno == libc::ENOTEMPTY || e.errno == libc::EEXIST
    ));
    remove_empty_directory(&root.join(&Path::from("full/inner/"))).unwrap();
    remove_empty_directory(&root.join(&Path::from("full"))).unwrap();
    assert!(!tmp.path().join("full").exists());

    assert!(matches!(
        remove_empty_directory(&Path::from("/tmp/*/")),
        Err(RemoveError::Wild(_))
    ));
}
