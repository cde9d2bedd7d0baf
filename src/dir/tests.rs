#![cfg(test)]

use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::symlink;

use tempfile::{TempDir, tempdir};

use super::*;
use crate::cwd;
use crate::error::SyscallError;
use crate::path::Path;

fn fixture() -> TempDir {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"a").unwrap();
    fs::write(tmp.path().join(".hidden"), b"").unwrap();
    fs::write(tmp.path().join("archive.tar.gz"), b"").unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    fs::write(tmp.path().join("sub/b.txt"), b"b").unwrap();
    symlink(tmp.path().join("sub"), tmp.path().join("linked")).unwrap();
    tmp
}

fn names(entries: &[Path]) -> BTreeSet<String> {
    entries.iter().map(Path::to_string).collect()
}

#[test]
fn test_iter_entries() {
    let tmp = fixture();
    let entries: Vec<Path> = DirIter::open(&Path::from(tmp.path()))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        names(&entries),
        BTreeSet::from(
            ["a.txt", ".hidden", "archive.tar.gz", "sub/", "linked/"].map(String::from)
        ),
        "Should yield every entry except . and .., with directories in directory form."
    );
    assert!(entries.iter().all(Path::is_relative));

    let hidden = entries.iter().find(|e| e.to_string() == ".hidden").unwrap();
    assert_eq!(hidden.extension(), None, "A leading dot isn't an extension separator.");
    let archive = entries.iter().find(|e| e.to_string() == "archive.tar.gz").unwrap();
    assert_eq!(archive.name().unwrap(), "archive.tar");
    assert_eq!(archive.extension().unwrap(), "gz");
}

#[test]
fn test_iter_matches_std() {
    let tmp = fixture();
    let ours = names(&list_directory(&Path::from(tmp.path()), EntryPaths::Relative).unwrap());
    let theirs: BTreeSet<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let ours: BTreeSet<String> = ours.into_iter().map(|n| n.trim_end_matches('/').to_owned()).collect();
    assert_eq!(ours, theirs);
}

#[test]
fn test_iter_is_fused() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("only"), b"").unwrap();

    let mut iter = DirIter::open(&Path::from(tmp.path())).unwrap();
    assert!(iter.next().unwrap().is_ok());
    for _ in 0..3 {
        assert!(iter.next().is_none(), "Exhausted iteration should keep reporting the end.");
    }
}

#[test]
fn test_iter_sets_and_restores_cwd() {
    let tmp = fixture();
    let outer = tempdir().unwrap();
    let outer_path = Path::from(outer.path().canonicalize().unwrap()).into_directory_form();
    let inner_path = Path::from(tmp.path().canonicalize().unwrap()).into_directory_form();

    cwd::with_current_directory(&outer_path, || -> Result<(), DirError> {
        {
            let _iter = DirIter::open(&inner_path)?;
            assert_eq!(cwd::current_directory()?, inner_path);
            assert_eq!(
                Path::from("a.txt").to_absolute_cwd()?,
                inner_path.join(&Path::from("a.txt")),
                "Relative paths should resolve against the directory being iterated."
            );
        }
        assert_eq!(
            cwd::current_directory()?,
            outer_path,
            "The enclosing directory should be restored, not some default."
        );
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_iter_restores_cwd_on_error() {
    let tmp = fixture();
    let dir = Path::from(tmp.path().canonicalize().unwrap()).into_directory_form();
    let before = cwd::current_directory().unwrap();

    let result = map_directory(&dir, |_| -> Result<(), DirError> {
        Err(SyscallError::new("test", libc::EIO).into())
    });
    assert!(matches!(result, Err(DirError::Syscall(_))));
    assert_eq!(cwd::current_directory().unwrap(), before);
}

#[test]
fn test_open_errors() {
    let tmp = fixture();
    let root = Path::from(tmp.path()).into_directory_form();

    assert!(matches!(
        DirIter::open(&root.join(&Path::from("a.txt"))),
        Err(DirError::NotADirectory(_))
    ));
    assert!(matches!(
        DirIter::open(&root.join(&Path::from("missing/"))),
        Err(DirError::NotADirectory(_))
    ));
    assert!(matches!(
        DirIter::open(&root.join(&Path::from("s*/"))),
        Err(DirError::Wild(_))
    ));
}

#[test]
fn test_file_form_directory_opens() {
    let tmp = fixture();
    // No trailing separator: the entry is still a directory and is iterated as one.
    let sub = Path::from(tmp.path()).into_directory_form().join(&Path::from("sub"));
    assert!(sub.is_file_form());

    let entries = list_directory(&sub, EntryPaths::Absolute).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_absolute());
    assert_eq!(entries[0].file_name().unwrap(), "b.txt");
}

#[test]
fn test_map_directory_runs_in_directory() {
    let tmp = fixture();
    let dir = Path::from(tmp.path()).into_directory_form();

    let mut sizes = map_directory(&dir, |entry| -> Result<_, DirError> {
        if entry.is_directory_form() {
            return Ok(0);
        }
        // Relative to the working directory, which is the directory being mapped.
        Ok(fs::metadata(entry.to_path_buf()).map(|m| m.len()).unwrap_or(u64::MAX))
    })
    .unwrap();
    sizes.sort();

    assert_eq!(sizes, vec![0, 0, 0, 0, 1]);
}

#[test]
fn test_looping_link_is_listed() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), b"").unwrap();
    symlink("loop", tmp.path().join("loop")).unwrap();
    let dir = Path::from(tmp.path()).into_directory_form();

    let entries = list_directory(&dir, EntryPaths::Relative).unwrap();
    assert_eq!(
        names(&entries),
        BTreeSet::from(["a.txt".to_owned(), "loop".to_owned()]),
        "A link that can't be resolved is still an entry, in file form."
    );
}
