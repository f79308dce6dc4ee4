use std::io::Read;

use super::*;

fn video(dir: &Path, rel: &str, caption: Option<&str>) -> FetchedVideo {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().expect("parent")).unwrap();
    std::fs::write(&path, b"video").unwrap();
    FetchedVideo { video_path: path, caption: caption.map(str::to_owned) }
}

fn read_entry(zip_path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let mut entry = archive.by_name(name).expect("entry present");
    assert_eq!(entry.compression(), CompressionMethod::Deflated);
    let mut out = String::new();
    entry.read_to_string(&mut out).unwrap();
    out
}

fn archive_names(zip_path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    names
}

#[test]
fn packages_videos_with_captions_and_without_metadata() {
    let work = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let zip_path = out.path().join("natgeo_1.zip");

    let videos = vec![
        video(work.path(), "A1/A1.mp4", Some("first caption")),
        video(work.path(), "B2/B2.mp4", None),
    ];
    for sidecar in ["A1/A1.json.xz", "A1/A1.jpg", "B2/B2.txt", "B2/B2.json"] {
        std::fs::write(work.path().join(sidecar), b"meta").unwrap();
    }

    let count = package_profile(work.path(), videos, 50, &zip_path).expect("package");

    assert_eq!(count, 2);
    assert_eq!(archive_names(&zip_path), vec!["A1/A1.mp4", "B2/B2.mp4", "captions.txt"]);
    assert!(!work.path().join("A1/A1.jpg").exists());
    assert!(work.path().join(CAPTIONS_FILE).exists());

    let separator = "-".repeat(80);
    let expected = format!(
        "File: A1.mp4\nCaption: first caption\n{separator}\n\nFile: B2.mp4\nCaption: \n{separator}\n\n"
    );
    assert_eq!(read_entry(&zip_path, CAPTIONS_FILE), expected);
    assert_eq!(read_entry(&zip_path, "A1/A1.mp4"), "video");
}

#[test]
fn missing_videos_are_skipped_and_count_is_capped() {
    let work = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let zip_path = out.path().join("u.zip");

    let mut videos = vec![FetchedVideo { video_path: work.path().join("gone.mp4"), caption: None }];
    videos.extend((0..5).map(|i| video(work.path(), &format!("v{i}.mp4"), None)));

    let count = package_profile(work.path(), videos, 3, &zip_path).expect("package");

    assert_eq!(count, 3);
    let captions = read_entry(&zip_path, CAPTIONS_FILE);
    assert_eq!(captions.matches("File: ").count(), 3);
    assert!(!captions.contains("gone.mp4"));
}

#[test]
fn nothing_to_package_is_no_videos() {
    let work = tempfile::tempdir().unwrap();
    let zip_path = work.path().join("never.zip");
    let videos = vec![FetchedVideo { video_path: work.path().join("gone.mp4"), caption: None }];

    let err = package_profile(work.path(), videos, 50, &zip_path).expect_err("should fail");

    assert!(matches!(err, FetchError::NoVideos));
    assert!(!zip_path.exists());
}

#[test]
fn metadata_detection() {
    assert!(is_metadata(Path::new("a/post.json")));
    assert!(is_metadata(Path::new("a/post.json.xz")));
    assert!(is_metadata(Path::new("a/thumb.JPG")));
    assert!(is_metadata(Path::new("a/notes.txt")));
    assert!(!is_metadata(Path::new(CAPTIONS_FILE)));
    assert!(!is_metadata(Path::new("a/clip.mp4")));
}
