use super::*;

async fn setup() -> (tempfile::TempDir, DownloadDirs) {
    let dir = tempfile::tempdir().expect("tempdir");
    let dirs = DownloadDirs::new(dir.path());
    dirs.ensure().await.expect("ensure dirs");
    (dir, dirs)
}

async fn populate(dirs: &DownloadDirs) {
    tokio::fs::write(dirs.single().join("a.mp4"), b"v").await.unwrap();
    let staging = dirs.single().join("0badc0de");
    tokio::fs::create_dir_all(&staging).await.unwrap();
    tokio::fs::write(staging.join("half.mp4"), b"v").await.unwrap();
    tokio::fs::write(dirs.zips().join("u_1.zip"), b"PK").await.unwrap();
    tokio::fs::write(dirs.zips().join("notes.txt"), b"keep").await.unwrap();
    let work = dirs.profiles().join("u_1");
    tokio::fs::create_dir_all(work.join("nested")).await.unwrap();
    tokio::fs::write(work.join("nested").join("b.mp4"), b"v").await.unwrap();
}

#[tokio::test]
async fn fresh_downloads_are_kept() {
    let (_dir, dirs) = setup().await;
    populate(&dirs).await;

    let removed = cleanup_old_files(&dirs, Duration::from_secs(3600)).await;
    assert_eq!(removed, 0);
    assert!(dirs.single().join("a.mp4").exists());
    assert!(dirs.single().join("0badc0de").exists());
    assert!(dirs.zips().join("u_1.zip").exists());
    assert!(dirs.profiles().join("u_1").exists());
}

#[tokio::test]
async fn expired_downloads_are_removed() {
    let (_dir, dirs) = setup().await;
    populate(&dirs).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    let removed = cleanup_old_files(&dirs, Duration::ZERO).await;
    assert_eq!(removed, 4);
    assert!(!dirs.single().join("a.mp4").exists());
    // Staging left behind by an interrupted download.
    assert!(!dirs.single().join("0badc0de").exists());
    assert!(!dirs.zips().join("u_1.zip").exists());
    assert!(!dirs.profiles().join("u_1").exists());
    // Only archives are swept from `zips/`.
    assert!(dirs.zips().join("notes.txt").exists());
}

#[tokio::test]
async fn missing_directories_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dirs = DownloadDirs::new(dir.path().join("absent"));
    assert_eq!(cleanup_old_files(&dirs, Duration::ZERO).await, 0);
}

#[test]
fn is_expired_compares_against_max_age() {
    let file = tempfile::NamedTempFile::new().expect("tempfile");
    let meta = file.as_file().metadata().expect("metadata");
    let modified = meta.modified().expect("mtime");

    assert!(!is_expired(&meta, Duration::from_secs(60), modified + Duration::from_secs(30)));
    assert!(is_expired(&meta, Duration::from_secs(60), modified + Duration::from_secs(61)));
}
