//! Concurrent-access tests for the file resource loader
//!
//! The loader is shared across request threads; provenance get/put are the
//! only shared mutable state and must stay individually atomic. Races between
//! a resolve and a simultaneous staleness check are acceptable as long as
//! they self-correct: once the filesystem settles and a reload happens, the
//! verdict settles too.

use std::fs;
use std::io::Read;
use std::sync::Arc;
use std::thread;

use stencil_resource::{FileResourceLoader, ResourceLoader, RootSet};

#[test]
fn interleaved_resolve_and_staleness_from_many_threads() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(second.path().join("shared.vm"), "shared content").unwrap();

    let loader = Arc::new(FileResourceLoader::new(RootSet::new([
        first.path().to_str().unwrap(),
        second.path().to_str().unwrap(),
    ])));

    let known = loader.resolve("shared.vm").unwrap().last_modified();
    let expected_root = second.path().to_str().unwrap().to_string();

    let mut handles = vec![];
    for worker in 0..8 {
        let loader = Arc::clone(&loader);
        let expected_root = expected_root.clone();
        let handle = thread::spawn(move || {
            for _ in 0..50 {
                if worker % 2 == 0 {
                    let mut resource = loader
                        .resolve("shared.vm")
                        .expect("shared template should resolve from every thread");
                    assert_eq!(resource.root(), expected_root);

                    let mut content = String::new();
                    resource.read_to_string(&mut content).unwrap();
                    assert_eq!(content, "shared content");
                } else {
                    // nothing mutates the filesystem, so the verdict never
                    // flaps even while other threads re-record provenance
                    assert!(!loader.is_stale("shared.vm", known));
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("worker thread should not panic");
    }

    assert_eq!(loader.last_modified("shared.vm"), Some(known));
}

#[test]
fn concurrent_resolves_of_distinct_names_keep_provenance_consistent() {
    let dir = tempfile::tempdir().unwrap();
    for worker in 0..8 {
        fs::write(dir.path().join(format!("t{worker}.vm")), "content").unwrap();
    }

    let loader = Arc::new(FileResourceLoader::new(RootSet::new([dir
        .path()
        .to_str()
        .unwrap()])));

    let mut handles = vec![];
    for worker in 0..8 {
        let loader = Arc::clone(&loader);
        let handle = thread::spawn(move || {
            let name = format!("t{worker}.vm");
            for _ in 0..50 {
                let resource = loader.resolve(&name).unwrap();
                assert_eq!(resource.name(), name);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("worker thread should not panic");
    }

    // every name ended up tracked against the root that supplied it
    for worker in 0..8 {
        let name = format!("t{worker}.vm");
        assert!(loader.last_modified(&name).is_some());
        assert!(!loader.is_stale(&name, loader.last_modified(&name).unwrap()));
    }
}

#[test]
fn racing_a_shadow_file_self_corrects_after_reload() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(second.path().join("x.vm"), "original").unwrap();

    let loader = Arc::new(FileResourceLoader::new(RootSet::new([
        first.path().to_str().unwrap(),
        second.path().to_str().unwrap(),
    ])));

    let known = loader.resolve("x.vm").unwrap().last_modified();

    let shadow_dir = first.path().to_path_buf();
    let mut handles = vec![];
    for worker in 0..4 {
        let loader = Arc::clone(&loader);
        let shadow_dir = shadow_dir.clone();
        let handle = thread::spawn(move || {
            for iteration in 0..50 {
                if worker == 0 && iteration == 25 {
                    fs::write(shadow_dir.join("x.vm"), "shadow").unwrap();
                }
                // mid-race verdicts may go either way; the calls must simply
                // never fail or panic
                let _ = loader.is_stale("x.vm", known);
                let _ = loader.resolve("x.vm").unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("worker thread should not panic");
    }

    // settled state: the shadow root wins and a reloaded timestamp is current
    let reloaded = loader.resolve("x.vm").unwrap();
    assert_eq!(reloaded.root(), first.path().to_str().unwrap());
    assert!(loader.is_stale("x.vm", known) || known == reloaded.last_modified());
    assert!(!loader.is_stale("x.vm", reloaded.last_modified()));
}
