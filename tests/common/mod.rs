#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary layout mimicking an osu!lazer install plus the companion folders.
///
/// Every command built from a fixture runs with a config file pointing at the
/// temp directory and with `HOME`/XDG variables redirected there, so nothing
/// touches the real user directories.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir_all(fixture.files_dir()).expect("Failed to create files directory");
        fixture.write_config(&format!(
            "lazer_files_path = {:?}\nstate_path = {:?}\ndownload_path = {:?}\n",
            fixture.files_dir(),
            fixture.state_path(),
            fixture.download_dir(),
        ));
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn files_dir(&self) -> PathBuf {
        self.path().join("osu").join("files")
    }

    pub fn state_path(&self) -> PathBuf {
        self.path().join("domd").join("db.json")
    }

    pub fn download_dir(&self) -> PathBuf {
        self.path().join("downloads")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("lazer-sets.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Creates a file under the lazer `files` directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.files_dir().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an `.osu` beatmap with the given `BeatmapSetID` value.
    pub fn create_map(&self, relative_path: &str, set_id: &str) {
        self.create_file(relative_path, &osu_map(set_id));
    }

    pub fn write_state(&self, content: &str) {
        let path = self.state_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create state directory");
        fs::write(path, content).expect("Failed to write state");
    }

    pub fn read_state(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.state_path()).expect("Failed to read state");
        serde_json::from_str(&content).expect("State is not valid JSON")
    }

    pub fn state_ids(&self) -> Vec<i64> {
        self.read_state()["downloaded_maps"]
            .as_array()
            .expect("downloaded_maps is not a list")
            .iter()
            .map(|v| v.as_i64().expect("id is not an integer"))
            .collect()
    }

    /// `lazer-sets` command sandboxed to this fixture.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lazer-sets"));
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_DATA_HOME", self.path().join("xdg-data"))
            .env("XDG_CONFIG_HOME", self.path().join("xdg-config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

pub fn osu_map(set_id: &str) -> String {
    format!(
        "osu file format v14\n\n[General]\nAudioFilename: audio.mp3\n\n[Metadata]\nTitle:Test\nBeatmapID:1\nBeatmapSetID:{set_id}\n\n[HitObjects]\n256,192,1000,1,0,0:0:0:0:\n"
    )
}
