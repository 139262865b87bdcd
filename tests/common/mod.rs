#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            catalog,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kitshelf");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn catalog_arg(&self) -> &str {
        self.catalog.to_str().expect("catalog path utf8")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/kitshelf");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_catalog(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog_arg())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Fixture catalog text. Kept as a string so tree keys stay in authored order.
pub const FIXTURE_CATALOG: &str = r#"{
  "name": "fixture-catalog",
  "kits": [
    {
      "id": 1,
      "name": "FastAPI AI Backend",
      "description": "Production-ready backend with LLM integrations",
      "category": "Backend",
      "tags": ["fastapi", "ai"],
      "language": "Python",
      "featured": true,
      "githublink": "https://github.com/acme/fastapi-kit.git",
      "recommendedFor": {
        "product": ["Backend"],
        "experience": ["Beginner"],
        "team": [],
        "timeline": [],
        "priorities": [],
        "tech": ["Python"]
      },
      "skillLevel": "Beginner",
      "useCases": ["AI APIs", "Chat backends", "Internal tools"],
      "structure": {
        "src/": {
          "type": "folder",
          "description": "Application code",
          "children": {
            "app.js": {"type": "file", "content": "x", "important": true}
          }
        },
        "README.md": {"type": "file", "description": "Read me first"}
      }
    },
    {
      "id": 2,
      "name": "React Frontend",
      "description": "Vite and React starter",
      "category": "Frontend",
      "tags": ["react"],
      "language": "JavaScript",
      "githublink": "https://github.com/solo",
      "recommendedFor": {
        "product": ["Web App"],
        "experience": ["Beginner"],
        "priorities": ["Fast Setup"]
      },
      "structure": {}
    },
    {
      "id": 3,
      "name": "Bare Pipeline",
      "description": "Pipelines without a profile",
      "category": "CI/CD",
      "featured": true
    }
  ],
  "scripts": [
    {
      "id": "tts",
      "title": "Text to Speech",
      "description": "Speech synthesis",
      "category": "Audio",
      "tags": ["tts", "voice"],
      "featured": true,
      "tier": "pro",
      "language": "Python",
      "readme": "What this does\nSpeaks.",
      "code": {"main": "print('hi')", "requirements": "pip install openai"},
      "usage": "python tts.py"
    },
    {
      "id": "fetch",
      "title": "Fetch With Timeout",
      "description": "Abortable fetch",
      "category": "Utilities",
      "featured": false,
      "language": "JavaScript"
    },
    {
      "id": "translate",
      "title": "Offline Translation",
      "description": "MarianMT translation",
      "category": "Language",
      "featured": true,
      "tier": "free",
      "language": "Python"
    }
  ]
}"#;

pub fn fixture_catalog() -> Value {
    serde_json::from_str(FIXTURE_CATALOG).expect("fixture catalog json")
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let dir = base.join("catalog");
    fs::create_dir_all(&dir).expect("create catalog dir");
    let file = dir.join("catalog.json");
    fs::write(&file, FIXTURE_CATALOG).expect("write catalog");
    file
}
