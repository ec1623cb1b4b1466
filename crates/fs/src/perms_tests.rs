use super::*;

use std::{
    fs::{self, write},
    os::unix::fs::PermissionsExt,
    path::Path,
};

fn set_mode(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("chmod");
}

fn mode_of(path: &Path) -> u32 {
    fs::metadata(path).expect("stat").permissions().mode() & 0o7777
}

#[test]
fn is_writable_follows_owner_bit_for_own_files() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("f.txt");
    write(&file, b"x").expect("write file");

    let cases: &[(u32, bool)] = &[
        (0o644, true),
        (0o444, false),
        (0o400, false),
        (0o600, true),
        (0o200, true),
        (0o464, false),
        (0o446, false),
        (0o466, false),
        (0o000, false),
    ];

    for (mode, expected) in cases {
        set_mode(&file, *mode);
        assert_eq!(
            is_writable(&file),
            *expected,
            "mode {:o} should probe as writable={}",
            mode,
            expected
        );
    }

    set_mode(&file, 0o644);
}

#[test]
fn write_bit_set_picks_the_class_of_the_caller() {
    let me = Identity {
        uid: 1000,
        gid: 100,
        groups: vec![100, 27],
    };

    // (mode, file uid, file gid, expected)
    let cases: &[(u32, u32, u32, bool)] = &[
        (0o644, 1000, 100, true),
        (0o464, 1000, 100, false),
        (0o446, 1000, 100, false),
        (0o644, 0, 0, false),
        (0o664, 0, 27, true),
        (0o664, 0, 100, true),
        (0o646, 0, 0, true),
        (0o646, 0, 27, false),
        (0o202, 2000, 2000, true),
        (0o220, 2000, 2000, false),
    ];

    for (mode, uid, gid, expected) in cases {
        assert_eq!(
            me.write_bit_set(*mode, *uid, *gid),
            *expected,
            "mode {:o} owned by {}:{}",
            mode,
            uid,
            gid
        );
    }
}

#[test]
fn current_identity_owns_freshly_created_files() {
    use std::os::unix::fs::MetadataExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("mine.txt");
    write(&file, b"x").expect("write file");

    let meta = fs::metadata(&file).expect("stat");
    assert_eq!(meta.uid(), Identity::current().uid);
}

#[test]
fn is_writable_is_false_for_missing_path() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    assert!(!is_writable(&tmp.path().join("nope")));
}

#[test]
fn make_readonly_clears_only_write_bits() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("script.sh");
    write(&file, b"#!/bin/sh\n").expect("write file");

    let cases: &[(u32, u32)] = &[
        (0o777, 0o555),
        (0o644, 0o444),
        (0o620, 0o400),
        (0o4755, 0o4555),
        (0o444, 0o444),
    ];

    for (before, after) in cases {
        set_mode(&file, *before);
        assert!(make_readonly(&file), "chmod from {:o} should succeed", before);
        assert_eq!(
            mode_of(&file),
            *after,
            "mode {:o} should become {:o}",
            before,
            after
        );
    }
}

#[test]
fn make_readonly_is_idempotent() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("data.bin");
    write(&file, b"data").expect("write file");
    set_mode(&file, 0o664);

    assert!(make_readonly(&file));
    let once = mode_of(&file);

    assert!(make_readonly(&file));
    let twice = mode_of(&file);

    assert_eq!(once, twice);
    assert_eq!(once & 0o222, 0);
    assert!(!is_writable(&file));
}

#[test]
fn make_readonly_reports_failure_for_missing_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    assert!(!make_readonly(&tmp.path().join("gone.txt")));
}

#[test]
fn make_readonly_all_tallies_successes_and_failures() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("a.txt"), b"a").expect("write a");
    write(root.join("b.txt"), b"b").expect("write b");

    let records = vec![
        FileRecord::new(root.join("a.txt")),
        FileRecord::new(root.join("missing.txt")),
        FileRecord::new(root.join("b.txt")),
    ];

    let tally = make_readonly_all(&records);
    assert_eq!(
        tally,
        ReadonlyTally {
            successful: 2,
            failed: 1
        }
    );

    assert!(!records[0].is_writable());
    assert!(!records[2].is_writable());
}
