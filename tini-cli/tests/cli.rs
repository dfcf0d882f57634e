use std::fs;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SAMPLE: &str = "[a]\nx=1\ny=2\n\n[b]\nz=3\n";

#[test]
fn get_prints_value() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.ini");
    fs::write(&path, SAMPLE)?;

    Command::cargo_bin("tini")?
        .arg("get")
        .arg("-p")
        .arg(&path)
        .args(["-s", "a", "-k", "y"])
        .assert()
        .success()
        .stdout("2");

    dir.close()?;
    Ok(())
}

#[test]
fn get_missing_key_falls_back_to_default_or_fails() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.ini");
    fs::write(&path, SAMPLE)?;

    Command::cargo_bin("tini")?
        .arg("get")
        .arg("-p")
        .arg(&path)
        .args(["-s", "a", "-k", "z", "-d", "?"])
        .assert()
        .success()
        .stdout("?");

    Command::cargo_bin("tini")?
        .arg("get")
        .arg("-p")
        .arg(&path)
        .args(["-s", "a", "-k", "z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not contain"));

    dir.close()?;
    Ok(())
}

#[test]
fn set_creates_file_and_refuses_overwrite_without_replace() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("new.ini");

    Command::cargo_bin("tini")?
        .arg("set")
        .arg("-p")
        .arg(&path)
        .args(["-s", "server", "-k", "port", "-v", "8080"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path)?, "[server]\nport=8080\n\n");

    Command::cargo_bin("tini")?
        .arg("set")
        .arg("-p")
        .arg(&path)
        .args(["-s", "server", "-k", "port", "-v", "9090", "--no-replace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path)?, "[server]\nport=8080\n\n");

    dir.close()?;
    Ok(())
}

#[test]
fn remove_key_and_section() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.ini");
    fs::write(&path, SAMPLE)?;

    Command::cargo_bin("tini")?
        .arg("remove")
        .arg("-p")
        .arg(&path)
        .args(["-s", "a", "-k", "x"])
        .assert()
        .success();

    Command::cargo_bin("tini")?
        .arg("remove")
        .arg("-p")
        .arg(&path)
        .args(["-s", "b"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path)?, "[a]\ny=2\n\n");

    Command::cargo_bin("tini")?
        .arg("remove")
        .arg("-p")
        .arg(&path)
        .args(["-s", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));

    dir.close()?;
    Ok(())
}

#[test]
fn sections_and_dump() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.ini");
    fs::write(&path, "; comment\n[a]\nx = 1\ny = 2\n[b]\nz = 3\n")?;

    Command::cargo_bin("tini")?
        .arg("sections")
        .arg("-p")
        .arg(&path)
        .assert()
        .success()
        .stdout("a\t2\nb\t1\n");

    Command::cargo_bin("tini")?
        .arg("dump")
        .arg("-p")
        .arg(&path)
        .assert()
        .success()
        .stdout("[a]\nx=1\ny=2\n\n[b]\nz=3\n\n");

    dir.close()?;
    Ok(())
}

#[test]
fn non_ini_extension_warns_but_still_reads() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.conf");
    fs::write(&path, SAMPLE)?;

    Command::cargo_bin("tini")?
        .arg("get")
        .arg("-p")
        .arg(&path)
        .args(["-s", "b", "-k", "z"])
        .assert()
        .success()
        .stdout("3")
        .stderr(predicate::str::contains("does not have an .ini extension"));

    dir.close()?;
    Ok(())
}

#[test]
fn empty_key_written_by_set_can_be_read_back() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty_key.ini");

    Command::cargo_bin("tini")?
        .arg("set")
        .arg("-p")
        .arg(&path)
        .args(["-s", "s", "-k", "", "-v", "v"])
        .assert()
        .success();

    Command::cargo_bin("tini")?
        .arg("get")
        .arg("-p")
        .arg(&path)
        .args(["-s", "s", "-k", ""])
        .assert()
        .success()
        .stdout("v");

    Command::cargo_bin("tini")?
        .arg("dump")
        .arg("-p")
        .arg(&path)
        .assert()
        .success()
        .stdout("[s]\n=v\n\n");

    dir.close()?;
    Ok(())
}
