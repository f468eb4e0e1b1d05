use std::fs;
use std::path::Path;

use spritegen_core::{SpriteConfig, collect_groups, namespace_for};
use tempfile::tempdir;

// Discovery only looks at names, so placeholder bytes are enough.
fn touch(path: &Path) {
    fs::write(path, b"x").unwrap();
}

#[test]
fn empty_directory_yields_no_groups() {
    let dir = tempdir().unwrap();
    let groups = collect_groups(dir.path(), &SpriteConfig::default()).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn prior_outputs_never_qualify_as_inputs() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("sprite.png"));
    touch(&dir.path().join("sprite.css"));

    let groups = collect_groups(dir.path(), &SpriteConfig::default()).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn rerun_discovers_identical_groups() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.png"));
    touch(&dir.path().join("b.gif"));

    let cfg = SpriteConfig::default();
    let before = collect_groups(dir.path(), &cfg).unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].images.len(), 2);

    // Pretend a run happened, then walk again.
    touch(&dir.path().join("sprite.png"));
    touch(&dir.path().join("sprite.css"));
    let after = collect_groups(dir.path(), &cfg).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].images, before[0].images);
}

#[test]
fn directories_group_independently_with_namespaces() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("icons/toolbar icons")).unwrap();
    touch(&dir.path().join("a.png"));
    touch(&dir.path().join("icons/b.png"));
    touch(&dir.path().join("icons/toolbar icons/c.png"));

    let groups = collect_groups(dir.path(), &SpriteConfig::default()).unwrap();
    assert_eq!(groups.len(), 3);

    // BTreeMap ordering: parents sort before their children
    assert_eq!(groups[0].namespace, "");
    assert_eq!(groups[1].namespace, "icons-");
    assert_eq!(groups[2].namespace, "icons-toolbar-icons-");
    for group in &groups {
        assert_eq!(group.images.len(), 1);
    }
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("A.PNG"));
    touch(&dir.path().join("b.Jpg"));
    touch(&dir.path().join("notes.txt"));
    touch(&dir.path().join("README"));

    let groups = collect_groups(dir.path(), &SpriteConfig::default()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].images.len(), 2);
}

#[test]
fn images_are_listed_in_name_order() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("c.png"));
    touch(&dir.path().join("a.png"));
    touch(&dir.path().join("b.png"));

    let groups = collect_groups(dir.path(), &SpriteConfig::default()).unwrap();
    let names: Vec<String> = groups[0]
        .images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn namespace_replaces_separators_and_spaces() {
    let root = Path::new("/assets");
    assert_eq!(namespace_for(root, Path::new("/assets")), "");
    assert_eq!(namespace_for(root, Path::new("/assets/icons")), "icons-");
    assert_eq!(
        namespace_for(root, Path::new("/assets/icons/toolbar icons")),
        "icons-toolbar-icons-"
    );
}

#[test]
fn reserved_names_follow_the_config() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("atlas.png"));
    touch(&dir.path().join("a.png"));

    let cfg = SpriteConfig::builder()
        .sprite_file("atlas.png")
        .stylesheet_file("atlas.css")
        .build();
    let groups = collect_groups(dir.path(), &cfg).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].images.len(), 1);
    assert!(groups[0].images[0].ends_with("a.png"));
}
