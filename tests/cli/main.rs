use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod plural;
mod print;

const BIN_NAME: &str = "glossa";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with `locales/en.json`, `locales/fr.json` and
    /// `locales/admin/es.json`.
    pub fn with_catalog() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "locales/en.json",
            r#"{
  "hello": "Hi",
  "greet": "Hi %s",
  "items.zero": "no items",
  "items.one": "1 item",
  "items.many": "%d items"
}"#,
        )?;
        test.write_file(
            "locales/fr.json",
            r#"{ "hello": "Bonjour", "greet": "Salut %s", "items.many": "%d articles" }"#,
        )?;
        test.write_file("locales/admin/es.json", r#"{ "hello": "Hola" }"#)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn print_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("print");
        cmd
    }

    pub fn plural_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("plural");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["print", "plural", "list", "check", "init"] {
        assert!(out.contains(command), "help should mention '{}'", command);
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}
