use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

// Every test gets an empty config file so the user's own config is never read
fn brochure(dir: &TempDir) -> Result<Command> {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "")?;
    }
    let mut cmd = Command::cargo_bin("brochure")?;
    cmd.arg("--config").arg(config);
    cmd.env_remove("BROCHURE_SITE_URL");
    Ok(cmd)
}

fn sample_profile() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("profiles")
        .join("three-rivers-detail.toml")
}

#[test]
fn test_version_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("brochure")?;
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("brochure 0.1.0"));
    Ok(())
}

#[test]
fn test_version_subcommand() -> Result<()> {
    let mut cmd = Command::cargo_bin("brochure")?;
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("brochure 0.1.0"));
    Ok(())
}

#[test]
fn test_help_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("brochure")?;
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "A static brochure site generator for local service businesses",
    ));
    Ok(())
}

#[test]
fn test_build_help() -> Result<()> {
    let mut cmd = Command::cargo_bin("brochure")?;
    cmd.arg("build").arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate the site and write it to a directory",
        ))
        .stdout(predicate::str::contains("--archive"))
        .stdout(predicate::str::contains("--profile"));
    Ok(())
}

#[test]
fn test_render_sample() -> Result<()> {
    let dir = tempdir()?;
    brochure(&dir)?
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("724-972-3957"))
        .stdout(predicate::str::contains("href=\"tel:+17249723957\""))
        .stdout(predicate::str::contains(
            "href=\"mailto:ckushnerautodetailing@gmail.com\"",
        ));
    Ok(())
}

#[test]
fn test_render_with_site_url_env() -> Result<()> {
    let dir = tempdir()?;
    brochure(&dir)?
        .env("BROCHURE_SITE_URL", "https://detail.example.org/pa")
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<link rel=\"canonical\" href=\"https://detail.example.org/pa/\">",
        ));
    Ok(())
}

#[test]
fn test_check_sample() -> Result<()> {
    let dir = tempdir()?;
    brochure(&dir)?
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::diff("ok\n"));
    Ok(())
}

#[test]
fn test_schema_business_only() -> Result<()> {
    let dir = tempdir()?;
    let output = brochure(&dir)?
        .args(["schema", "--kind", "business"])
        .output()?;
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing["@type"], "AutoDetailing");
    assert_eq!(listing["telephone"], "+17249723957");
    assert_eq!(listing["areaServed"].as_array().map(Vec::len), Some(16));
    Ok(())
}

#[test]
fn test_schema_faq_only() -> Result<()> {
    let dir = tempdir()?;
    brochure(&dir)?
        .args(["schema", "--kind", "faq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"@type\": \"FAQPage\""))
        .stdout(predicate::str::contains("AutoDetailing").not());
    Ok(())
}

#[test]
fn test_build_writes_site() -> Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("site");

    brochure(&dir)?
        .arg("build")
        .arg("--out")
        .arg(&out)
        .arg("--archive")
        .assert()
        .success()
        .stdout(predicate::str::contains(out.display().to_string()));

    for name in [
        "index.html",
        "robots.txt",
        "sitemap.xml",
        "manifest.json",
        "site.tar.gz",
    ] {
        assert!(out.join(name).exists(), "{} was not written", name);
    }

    let robots = fs::read_to_string(out.join("robots.txt"))?;
    assert!(robots.contains("Sitemap: https://www.example.com/sitemap.xml"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("manifest.json"))?)?;
    assert_eq!(manifest["generator"]["name"], "brochure");
    assert_eq!(manifest["artifacts"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn test_build_with_profile_file() -> Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("site");

    brochure(&dir)?
        .arg("build")
        .arg("--profile")
        .arg(sample_profile())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("index.html"))?;
    assert!(html.contains("Three Rivers Mobile Detail"));
    assert!(html.contains("412-555-0147"));
    assert!(html.contains("href=\"mailto:bookings@threeriversdetail.example\""));
    assert!(html.contains("Butler &amp; Allegheny County"));
    assert!(!html.contains("724-972-3957"));
    Ok(())
}

#[test]
fn test_invalid_profile_fails() -> Result<()> {
    let dir = tempdir()?;
    let profile = dir.path().join("broken.toml");
    let content = fs::read_to_string(sample_profile())?.replace("(412) 555-0147", "555-0147");
    fs::write(&profile, content)?;

    brochure(&dir)?
        .arg("render")
        .arg("--profile")
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone number"));
    Ok(())
}

#[test]
fn test_invalid_site_url_fails() -> Result<()> {
    let dir = tempdir()?;
    brochure(&dir)?
        .args(["render", "--site-url", "ftp://example.com/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http or https"));
    Ok(())
}
