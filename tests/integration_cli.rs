//! End-to-end CLI tests: every command against a real catalog and session
//! file in a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

use shoplist_cli::test_utils::write_sample_catalog;

/// Run `shoplist` against the given catalog and session paths.
fn shoplist(catalog: &Path, session: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.arg("--catalog")
        .arg(catalog)
        .arg("--session")
        .arg(session)
        .args(args);
    cmd
}

struct Project {
    _dir: TempDir,
    catalog: std::path::PathBuf,
    session: std::path::PathBuf,
}

fn project() -> Project {
    let dir = TempDir::new().unwrap();
    let catalog = write_sample_catalog(dir.path()).unwrap();
    let session = dir.path().join("session.toml");
    Project {
        _dir: dir,
        catalog,
        session,
    }
}

#[test]
fn test_init_creates_loadable_catalog() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("shoplist")
        .unwrap()
        .args(["init", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized shoplist.toml"));

    assert!(dir.path().join("shoplist.toml").exists());

    // Init refuses to overwrite without --force
    Command::cargo_bin("shoplist")
        .unwrap()
        .args(["init", "--path"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_add_list_export_flow() {
    let p = project();

    shoplist(&p.catalog, &p.session, &["add", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'A'"));

    // By id, and duplicates are a polite no-op
    shoplist(&p.catalog, &p.session, &["add", "2"])
        .assert()
        .success();
    shoplist(&p.catalog, &p.session, &["add", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already on the shopping list"));

    shoplist(&p.catalog, &p.session, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A").and(predicate::str::contains("B")));

    // Aggregation: Sugar merges across A and B, rows in first-seen order
    let output = shoplist(&p.catalog, &p.session, &["export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rendered = String::from_utf8(output).unwrap();
    let lines: Vec<_> = rendered.lines().collect();
    assert!(lines[0].starts_with("Flour"));
    assert!(lines[1].contains("Sugar") && lines[1].contains("80 g") && lines[1].contains("A, B"));
    assert!(lines[2].contains("Eggs") && lines[2].contains("2 pc"));
}

#[test]
fn test_export_json_round_trips() {
    let p = project();
    shoplist(&p.catalog, &p.session, &["add", "1"])
        .assert()
        .success();

    let output = shoplist(&p.catalog, &p.session, &["export", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows[0]["title"], "Flour");
    assert_eq!(rows[0]["quantity"], 200);
    assert_eq!(rows[0]["recipes"][0], "A");
}

#[test]
fn test_export_to_file() {
    let p = project();
    shoplist(&p.catalog, &p.session, &["add", "1"])
        .assert()
        .success();

    let out_path = p.catalog.parent().unwrap().join("list.md");
    shoplist(
        &p.catalog,
        &p.session,
        &["export", "--format", "markdown", "--output", out_path.to_str().unwrap()],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Wrote shopping list"));

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.starts_with("| Ingredient | Quantity | Unit | Recipes |"));
    assert!(content.contains("| Flour | 200 | g | A |"));
}

#[test]
fn test_remove_and_clear() {
    let p = project();
    shoplist(&p.catalog, &p.session, &["add", "1"])
        .assert()
        .success();
    shoplist(&p.catalog, &p.session, &["add", "2"])
        .assert()
        .success();

    shoplist(&p.catalog, &p.session, &["remove", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'B'"));

    // Removing something absent is a notice, not an error
    shoplist(&p.catalog, &p.session, &["remove", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not on the shopping list"));

    shoplist(&p.catalog, &p.session, &["clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    shoplist(&p.catalog, &p.session, &["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The shopping list is empty"));
}

#[test]
fn test_add_unknown_recipe_fails() {
    let p = project();

    shoplist(&p.catalog, &p.session, &["add", "Borscht"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found"));
}

#[test]
fn test_ingredients_upsert_is_idempotent() {
    let p = project();

    shoplist(
        &p.catalog,
        &p.session,
        &[
            "ingredients",
            "A",
            "nameIngredient_1=Sugar",
            "valueIngredient_1=50",
        ],
    )
    .assert()
    .success();

    shoplist(
        &p.catalog,
        &p.session,
        &[
            "ingredients",
            "A",
            "nameIngredient_1=Sugar",
            "valueIngredient_1=75",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Set 1 ingredient(s) on 'A'"));

    // One record, updated in place: A now contributes 75, B still 30
    shoplist(&p.catalog, &p.session, &["add", "A"])
        .assert()
        .success();
    shoplist(&p.catalog, &p.session, &["add", "B"])
        .assert()
        .success();

    shoplist(&p.catalog, &p.session, &["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("105 g"));
}

#[test]
fn test_ingredients_skips_incomplete_groups() {
    let p = project();

    shoplist(
        &p.catalog,
        &p.session,
        &[
            "ingredients",
            "A",
            "nameIngredient_1=Butter",
            "nameIngredient_2=Milk",
            "valueIngredient_2=100",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Set 1 ingredient(s)"));

    let content = std::fs::read_to_string(&p.catalog).unwrap();
    assert!(content.contains("Milk"));
    // Newly created ingredient gets the default unit
    assert!(content.contains("p."));
    assert!(!content.contains("ingredient = \"Butter\""));
}

#[test]
fn test_search_ingredients() {
    let p = project();

    shoplist(&p.catalog, &p.session, &["search", "egg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eggs (pc)"));

    shoplist(&p.catalog, &p.session, &["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ingredients match"));
}

#[test]
fn test_missing_catalog_suggests_init() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("missing.toml");
    let session = dir.path().join("session.toml");

    shoplist(&catalog, &session, &["list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Catalog file not found")
                .and(predicate::str::contains("shoplist init")),
        );
}
