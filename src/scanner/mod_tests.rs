use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn map_with_set_id(set_id: &str) -> String {
    format!(
        "osu file format v14\n\n[General]\nAudioFilename: audio.mp3\n\n[Metadata]\nTitle:Song\nBeatmapID:1\nBeatmapSetID:{set_id}\n\n[HitObjects]\n256,192,1000,1,0,0:0:0:0:\n"
    )
}

/// Treats every file as a map; the set ID is the file name parsed as an integer.
struct FileNameInspector {
    inspected: RefCell<Vec<PathBuf>>,
}

impl FileNameInspector {
    fn new() -> Self {
        Self {
            inspected: RefCell::new(Vec::new()),
        }
    }
}

impl MapInspector for FileNameInspector {
    fn is_map_file(&self, _path: &Path) -> bool {
        true
    }

    fn extract_set_id(&self, path: &Path) -> Option<i64> {
        self.inspected.borrow_mut().push(path.to_path_buf());
        path.file_name()?.to_str()?.parse().ok()
    }
}

struct RejectAllInspector;

impl MapInspector for RejectAllInspector {
    fn is_map_file(&self, _path: &Path) -> bool {
        false
    }

    fn extract_set_id(&self, _path: &Path) -> Option<i64> {
        panic!("extract_set_id must not be called for non-map files");
    }
}

#[test]
fn empty_root_yields_empty_result() {
    let temp_dir = TempDir::new().unwrap();

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert!(result.root_found());
    assert!(result.is_empty());
    assert_eq!(result.files_visited(), 0);
    assert_eq!(result.maps_found(), 0);
}

#[test]
fn missing_root_is_reported_distinctly() {
    let temp_dir = TempDir::new().unwrap();

    let result = DirectoryScanner::new().scan(&temp_dir.path().join("not-installed"));

    assert!(!result.root_found());
    assert!(result.is_empty());
    assert_eq!(result.files_visited(), 0);
}

#[test]
fn finds_set_id_in_nested_hash_directories() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/ab/abcdef", &map_with_set_id("12345"));

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.sorted_ids(), vec![12345]);
    assert_eq!(result.files_visited(), 1);
    assert_eq!(result.maps_found(), 1);
}

#[test]
fn local_sentinel_is_excluded() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "1/11/local1", &map_with_set_id("-1"));
    write(temp_dir.path(), "2/22/local2", &map_with_set_id("-1"));

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert!(result.is_empty());
    assert_eq!(result.maps_found(), 2);
}

#[test]
fn hit_objects_before_set_id_counts_map_without_id() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "x",
        "osu file format v14\n[HitObjects]\nBeatmapSetID:12345\n",
    );

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert!(result.is_empty());
    assert_eq!(result.maps_found(), 1);
}

#[test]
fn difficulties_of_one_set_collapse() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/easy", &map_with_set_id("500"));
    write(temp_dir.path(), "b/hard", &map_with_set_id("500"));
    write(temp_dir.path(), "c/other", &map_with_set_id("7"));

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.sorted_ids(), vec![7, 500]);
    assert_eq!(result.maps_found(), 3);
}

#[test]
fn non_map_files_are_visited_but_not_counted() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "audio", "ID3 not a map");
    write(temp_dir.path(), "bg/image", "\u{89}PNG");
    write(temp_dir.path(), "map", &map_with_set_id("99"));
    fs::write(temp_dir.path().join("binary"), [0xffu8, 0xfe, 0x00, 0x10]).unwrap();

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.files_visited(), 4);
    assert_eq!(result.maps_found(), 1);
    assert_eq!(result.sorted_ids(), vec![99]);
}

#[test]
fn non_numeric_set_id_does_not_stop_scan() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "bad", &map_with_set_id("abc"));
    write(temp_dir.path(), "good", &map_with_set_id("3"));

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.sorted_ids(), vec![3]);
    assert_eq!(result.maps_found(), 2);
}

#[test]
fn rescanning_unchanged_tree_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/1", &map_with_set_id("10"));
    write(temp_dir.path(), "b/2", &map_with_set_id("20"));
    write(temp_dir.path(), "c/3", "not a map");

    let scanner = DirectoryScanner::new();
    let first = scanner.scan(temp_dir.path());
    let second = scanner.scan(temp_dir.path());

    assert_eq!(first, second);
}

#[test]
fn callback_sees_every_visited_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/1", "x");
    write(temp_dir.path(), "b/c/2", "y");

    let mut seen = Vec::new();
    let result =
        DirectoryScanner::new().scan_with(temp_dir.path(), &mut |p| seen.push(p.to_path_buf()));

    assert_eq!(seen.len(), 2);
    assert_eq!(result.files_visited(), 2);
}

#[test]
fn custom_inspector_drives_collection() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "10", "");
    write(temp_dir.path(), "sub/20", "");
    write(temp_dir.path(), "sub/-1", "");
    write(temp_dir.path(), "sub/name", "");

    let inspector = FileNameInspector::new();
    let scanner = DirectoryScanner::with_inspector(inspector);
    let result = scanner.scan(temp_dir.path());

    let expected: HashSet<i64> = [10, 20].into_iter().collect();
    assert_eq!(result.set_ids(), &expected);
    assert_eq!(result.maps_found(), 4);
    assert_eq!(scanner.inspector().inspected.borrow().len(), 4);
}

#[test]
fn extractor_not_called_for_non_maps() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a", "whatever");

    let result = DirectoryScanner::with_inspector(RejectAllInspector).scan(temp_dir.path());

    assert_eq!(result.files_visited(), 1);
    assert_eq!(result.maps_found(), 0);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_visited_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "map", &map_with_set_id("8"));
    std::os::unix::fs::symlink(
        temp_dir.path().join("does-not-exist"),
        temp_dir.path().join("dangling"),
    )
    .unwrap();

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.files_visited(), 2);
    assert_eq!(result.sorted_ids(), vec![8]);
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_followed() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real");
    write(&real, "map", &map_with_set_id("8"));
    std::os::unix::fs::symlink(&real, temp_dir.path().join("link")).unwrap();

    let result = DirectoryScanner::new().scan(temp_dir.path());

    assert_eq!(result.files_visited(), 1);
}

#[test]
fn scan_result_insert_rejects_sentinel() {
    let mut result = ScanResult::default();
    assert!(!result.insert(-1));
    assert!(result.insert(5));
    assert!(!result.insert(5));
    assert_eq!(result.len(), 1);
}
