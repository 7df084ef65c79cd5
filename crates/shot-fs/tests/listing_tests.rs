use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use shot_fs::{image_map, list_images, list_locales};

fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| name(i).to_string()).collect()
}

#[test]
fn test_list_locales_sorted_and_filtered() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("zh-TW").create_dir_all().unwrap();
    temp.child("de").create_dir_all().unwrap();
    temp.child("en-US").create_dir_all().unwrap();
    temp.child(".git").create_dir_all().unwrap();
    temp.child("README.md").touch().unwrap();

    let locales = list_locales(temp.path()).unwrap();

    assert_eq!(names(&locales, |l| &l.name), vec!["de", "en-US", "zh-TW"]);
    assert_eq!(locales[0].path, temp.path().join("de"));
}

#[test]
fn test_list_locales_is_case_sensitive() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("pt-br").create_dir_all().unwrap();
    temp.child("pt-BR").create_dir_all().unwrap();

    let locales = list_locales(temp.path()).unwrap();

    assert_eq!(names(&locales, |l| &l.name), vec!["pt-BR", "pt-br"]);
}

#[test]
fn test_list_locales_missing_root_is_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    let locales = list_locales(&temp.path().join("absent")).unwrap();
    assert!(locales.is_empty());
}

#[test]
fn test_list_images_filters_hidden_and_non_png() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("b.png").touch().unwrap();
    temp.child("A.PNG").touch().unwrap();
    temp.child("c.Png").touch().unwrap();
    temp.child(".hidden.png").touch().unwrap();
    temp.child("notes.txt").touch().unwrap();
    temp.child("shot.jpg").touch().unwrap();
    temp.child("dir.png").create_dir_all().unwrap();

    let images = list_images(temp.path()).unwrap();

    assert_eq!(names(&images, |i| &i.name), vec!["A.PNG", "b.png", "c.Png"]);
}

#[test]
fn test_list_images_missing_folder_is_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    assert!(list_images(&temp.path().join("nope")).unwrap().is_empty());
}

#[test]
fn test_image_map_keys_by_file_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("home.png").touch().unwrap();
    temp.child("menu.png").touch().unwrap();

    let map = image_map(temp.path()).unwrap();

    assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["home.png", "menu.png"]);
    assert_eq!(map["home.png"], temp.path().join("home.png"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_locale_is_listed() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.child("real");
    target.create_dir_all().unwrap();
    let root = temp.child("root");
    root.create_dir_all().unwrap();
    std::os::unix::fs::symlink(target.path(), root.path().join("fr")).unwrap();

    let locales = list_locales(root.path()).unwrap();

    assert_eq!(names(&locales, |l| &l.name), vec!["fr"]);
}
