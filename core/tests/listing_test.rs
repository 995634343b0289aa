use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use lister_core::listing::{breadcrumbs, generate_parent};
use lister_core::{
    EntryType, ListingConfig, Lister, LocalStorage, MimeClass, SortDirection, SortField,
};

const URL_BASE: &str = "http://localhost/storage";

fn write_png(path: &Path, width: u32, height: u32) {
    let pixels = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .expect("encode png");
    fs::write(path, cursor.into_inner()).expect("write png");
}

/// root/
///   a.jpg  b.txt  photo.png  .env
///   subdir/        (plain directory)
///   secret/.hide   (suppressed directory)
fn build_fixture(root: &Path) {
    write_png(&root.join("a.jpg"), 2, 2);
    fs::write(root.join("b.txt"), b"hello world").expect("write txt");
    write_png(&root.join("photo.png"), 3, 5);
    fs::write(root.join(".env"), b"SECRET=1").expect("write dotfile");
    fs::create_dir(root.join("subdir")).expect("create subdir");
    fs::create_dir(root.join("secret")).expect("create secret");
    fs::write(root.join("secret/.hide"), b"").expect("write hide marker");
}

fn names(records: &[lister_core::EntryRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn lists_enriched_records_with_directories_first() {
    let dir = tempfile::tempdir().expect("temp dir");
    build_fixture(dir.path());
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();

    let records = Lister::new(&storage, &config)
        .list_folder("", SortField::Name, None)
        .expect("list root");

    assert_eq!(names(&records), vec!["subdir", "a.jpg", "b.txt", "photo.png"]);

    let subdir = &records[0];
    assert_eq!(subdir.entry_type, EntryType::Dir);
    assert_eq!(subdir.mime_class, MimeClass::Dir);
    assert_eq!(subdir.dimensions, None);
    assert_eq!(subdir.size_human, "0 B");

    let text = records.iter().find(|r| r.name == "b.txt").expect("b.txt listed");
    assert_eq!(text.mime_class, MimeClass::Text);
    assert_eq!(text.extension.as_deref(), Some("txt"));
    assert_eq!(text.size, 11);
    assert_eq!(text.size_human, "11 B");
    assert_eq!(text.path, "/b.txt");
    assert_eq!(text.asset_url, format!("{URL_BASE}/b.txt"));
    assert!(text.can_act);
    assert!(!text.is_loading);
    assert!(text.last_modified.is_some());
    assert!(text.date.is_some());
    assert_eq!(text.thumbnail, None);
}

#[test]
fn dotfiles_and_hide_marked_directories_never_appear() {
    let dir = tempfile::tempdir().expect("temp dir");
    build_fixture(dir.path());
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();

    let records = Lister::new(&storage, &config)
        .list_folder("/", SortField::Name, None)
        .expect("list root");

    assert!(records.iter().all(|r| r.name != ".env"));
    assert!(records.iter().all(|r| r.name != "secret"));
}

#[test]
fn images_get_dimensions_and_thumbnails() {
    let dir = tempfile::tempdir().expect("temp dir");
    build_fixture(dir.path());
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();

    let records = Lister::new(&storage, &config)
        .list_folder("", SortField::Name, None)
        .expect("list root");

    let photo = records.iter().find(|r| r.name == "photo.png").expect("photo listed");
    assert_eq!(photo.mime_class, MimeClass::Image);
    assert_eq!(photo.dimensions.as_deref(), Some("3x5"));
    assert_eq!(photo.thumbnail.as_deref(), Some(format!("{URL_BASE}/photo.png").as_str()));

    // Content is PNG regardless of the .jpg name; the probe reads the header.
    let jpg = records.iter().find(|r| r.name == "a.jpg").expect("a.jpg listed");
    assert_eq!(jpg.dimensions.as_deref(), Some("2x2"));
}

#[test]
fn named_filters_apply_to_files_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    build_fixture(dir.path());
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig {
        filters: HashMap::from([(
            "images".to_string(),
            HashSet::from(["jpg".to_string(), "png".to_string()]),
        )]),
        ..Default::default()
    };
    let lister = Lister::new(&storage, &config);

    let filtered = lister.list_folder("", SortField::Name, Some("images")).expect("filtered");
    assert_eq!(names(&filtered), vec!["subdir", "a.jpg", "photo.png"]);

    // An unconfigured key matches nothing: directories only.
    let none = lister.list_folder("", SortField::Name, Some("docs")).expect("unknown key");
    assert_eq!(names(&none), vec!["subdir"]);
}

#[test]
fn size_ordering_descends_within_each_group() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("small.txt"), vec![0u8; 10]).expect("write");
    fs::write(dir.path().join("large.txt"), vec![0u8; 4000]).expect("write");
    fs::write(dir.path().join("medium.txt"), vec![0u8; 500]).expect("write");
    fs::create_dir(dir.path().join("stuff")).expect("create dir");
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig { direction: SortDirection::Asc, ..Default::default() };

    let records = Lister::new(&storage, &config)
        .list_folder("", SortField::Size, None)
        .expect("list by size");

    assert_eq!(names(&records), vec!["stuff", "large.txt", "medium.txt", "small.txt"]);
}

#[test]
fn descending_name_order_keeps_directories_first() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("alpha.txt"), b"x").expect("write");
    fs::write(dir.path().join("Beta.txt"), b"x").expect("write");
    fs::create_dir(dir.path().join("zoo")).expect("create dir");
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig { direction: SortDirection::Desc, ..Default::default() };

    let records = Lister::new(&storage, &config)
        .list_folder("", SortField::Name, None)
        .expect("list desc");

    assert_eq!(names(&records), vec!["zoo", "Beta.txt", "alpha.txt"]);
}

#[test]
fn nested_folders_list_with_normalized_paths() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("a/b")).expect("create tree");
    fs::write(dir.path().join("a/b/deep.txt"), b"x").expect("write");
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();

    let records = Lister::new(&storage, &config)
        .list_folder("a/b", SortField::Name, None)
        .expect("list nested");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "/a/b/deep.txt");
}

#[test]
fn custom_predicate_can_reject_entries() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("keep.txt"), b"x").expect("write");
    fs::write(dir.path().join("drop.log"), b"x").expect("write");
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();
    let no_logs =
        |entry: &lister_core::RawEntry| entry.extension.as_deref() != Some("log");

    let records = Lister::new(&storage, &config)
        .with_predicate(&no_logs)
        .list_folder("", SortField::Name, None)
        .expect("list with predicate");

    assert_eq!(names(&records), vec!["keep.txt"]);
}

#[test]
fn unlistable_folders_fail_the_whole_call() {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = LocalStorage::new(dir.path(), URL_BASE);
    let config = ListingConfig::default();

    let err = Lister::new(&storage, &config)
        .list_folder("missing", SortField::Name, None)
        .expect_err("missing folder");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn parent_and_breadcrumbs_track_the_current_folder() {
    let parent = generate_parent("local", "/a/b/c").expect("parent");
    assert_eq!(parent.path, "/a/b");
    assert_eq!(parent.name, "Go up");
    assert!(generate_parent("local", "/").is_none());

    let crumbs = breadcrumbs("/a/b/c");
    let paths: Vec<&str> = crumbs.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, vec!["/a/b/c", "/a/b", "/a"]);
}
