//! End-to-end tests for the `clean` command.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_clean_removes_catalog_directories() {
    let fixture = TestFixture::new()
        .with_config(configs::GROUPS_EAST)
        .with_file("deploy/Linux/East/East.json", "{}")
        .with_file("deploy/Linux/East/east.bundle", "east")
        .with_file("build/catalog.json", "{}");

    fixture
        .command()
        .args(["--color", "never", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[CLEAN] Removed"))
        .stdout(predicate::str::contains("(2 files)"));

    fixture
        .child("deploy/Linux/East")
        .assert(predicate::path::missing());
    // the build root belongs to the asset build
    fixture
        .child("build/catalog.json")
        .assert(predicate::path::exists());
}

#[test]
fn test_clean_nothing_to_do() {
    let fixture = TestFixture::new().with_config(configs::PREFIX_UI);

    fixture
        .command()
        .args(["--color", "never", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Nothing to clean"));
}

#[test]
fn test_build_then_clean() {
    let fixture = TestFixture::new()
        .with_config(configs::PREFIX_UI)
        .with_locations(locations::PREFIX_SCENARIO);

    fixture.command().args(["build", "--quiet"]).assert().success();
    fixture
        .child("catalogs/UI/UI.json")
        .assert(predicate::path::exists());

    fixture.command().args(["clean", "--quiet"]).assert().success();
    fixture
        .child("catalogs/UI")
        .assert(predicate::path::missing());
}
