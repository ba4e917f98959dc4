use assert_fs::prelude::*;
use groovyls_classpath::{ADDITIONAL_LIBRARIES_KEY, Classpath, CompilerConfig, LibraryFolder};
use groovyls_settings::Settings;
use groovyls_test_utils::TestWorkspace;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::path::PathBuf;

#[test]
fn open_rejects_missing_and_file_paths() {
    let ws = TestWorkspace::new();
    let file = ws.write_file("lib.jar", "");

    assert!(LibraryFolder::open(ws.path("missing")).is_none());
    assert!(LibraryFolder::open(file).is_none());
    assert!(LibraryFolder::open(ws.root()).is_some());
}

#[test]
fn jars_lists_only_jar_files_sorted() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("libs/nested").create_dir_all().unwrap();
    temp.child("libs/b-lib.jar").touch().unwrap();
    temp.child("libs/A-LIB.JAR").touch().unwrap();
    temp.child("libs/readme.md").touch().unwrap();
    temp.child("libs/nested/deep.jar").touch().unwrap();
    temp.child("libs/folder.jar").create_dir_all().unwrap();

    let folder = LibraryFolder::open(temp.child("libs").path()).unwrap();
    let jars = folder.jars().unwrap();

    let names: Vec<_> = jars
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A-LIB.JAR", "b-lib.jar"]);
    for jar in &jars {
        assert!(predicate::path::is_file().eval(jar));
    }
}

#[test]
fn jars_of_empty_folder_is_empty() {
    let ws = TestWorkspace::new();
    let folder = LibraryFolder::open(ws.create_dir("libs")).unwrap();
    assert!(folder.jars().unwrap().is_empty());
}

#[test]
fn jars_fails_once_folder_is_removed() {
    let ws = TestWorkspace::new();
    let dir = ws.create_dir("libs");
    let folder = LibraryFolder::open(&dir).unwrap();
    std::fs::remove_dir(&dir).unwrap();

    assert!(folder.jars().is_err());
}

#[test]
fn from_settings_follows_the_resolver() {
    let ws = TestWorkspace::new();
    let libs = ws.library_folder("libs", &["camel-core.jar"]);

    let configured = TestWorkspace::settings_with_libraries(libs.to_string_lossy().into_owned());
    let folder = LibraryFolder::from_settings(&configured).unwrap();
    assert_eq!(folder.path(), libs.as_path());

    let unset = Settings::empty();
    assert!(LibraryFolder::from_settings(&unset).is_none());

    let not_dir = Settings::empty().with(
        ADDITIONAL_LIBRARIES_KEY,
        libs.join("camel-core.jar").to_string_lossy().into_owned(),
    );
    assert!(LibraryFolder::from_settings(&not_dir).is_none());
}

#[test]
fn classpath_from_folder_collects_jars() {
    let ws = TestWorkspace::new();
    let libs = ws.library_folder("libs", &["camel-core.jar", "slf4j-api.jar", "notes.txt"]);
    let folder = LibraryFolder::open(&libs).unwrap();

    let classpath = Classpath::from_folder(Some(&folder)).unwrap();
    assert_eq!(
        classpath.entries(),
        &[libs.join("camel-core.jar"), libs.join("slf4j-api.jar")]
    );

    let joined = classpath.to_os_string().unwrap();
    let split: Vec<PathBuf> = std::env::split_paths(&joined).collect();
    assert_eq!(split, classpath.entries());
}

#[test]
fn classpath_without_folder_is_empty() {
    let classpath = Classpath::from_folder(None).unwrap();
    assert!(classpath.is_empty());
    assert_eq!(classpath.len(), 0);
}

#[test]
fn customizable_config_uses_folder_jars() {
    let ws = TestWorkspace::new();
    let libs = ws.library_folder("libs", &["camel-groovy.jar"]);
    let folder = LibraryFolder::open(&libs).unwrap();

    let config = CompilerConfig::customizable(Some(&folder)).unwrap();
    assert_eq!(config.classpath.entries(), &[libs.join("camel-groovy.jar")]);
    assert!(config.debug && config.verbose);
    assert_eq!(config.import_customizers.len(), 1);
}
