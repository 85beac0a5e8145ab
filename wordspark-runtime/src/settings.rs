use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wordspark_core::config::{DEFAULT_TURNS, clamp_max_turns};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// How many generation turns to run per topic. Clamped to 3..=10 on both
    /// load and save, so a hand-edited file can't smuggle in a bad value.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,

    /// OpenAI-compatible endpoint. `None` means run against the built-in
    /// scripted model instead of the network.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,
}

fn default_max_turns() -> u32 {
    DEFAULT_TURNS
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            base_url: None,
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields defaults; that's the first-run case, not an error.
    pub fn load(&self) -> anyhow::Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("read settings: {}", self.path.display()))?;
        let mut settings: Settings =
            serde_json::from_slice(&bytes).context("decode settings JSON")?;
        settings.max_turns = clamp_max_turns(settings.max_turns);
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        let mut settings = settings.clone();
        settings.max_turns = clamp_max_turns(settings.max_turns);

        let json = serde_json::to_vec_pretty(&settings).context("encode settings JSON")?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create settings directory: {}", parent.display()))?;
        }

        // Atomic-ish write: write temp then replace.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write temp: {}", tmp.display()))?;
        replace_file(&tmp, &self.path)
            .with_context(|| format!("replace file: {}", self.path.display()))?;
        Ok(())
    }
}

fn replace_file(tmp: &Path, dst: &Path) -> anyhow::Result<()> {
    let backup = dst.with_extension("bak");

    if dst.exists() {
        let _ = fs::remove_file(&backup);
        fs::rename(dst, &backup)
            .with_context(|| format!("failed rename {} -> {}", dst.display(), backup.display()))?;
    }

    if let Err(e) = fs::rename(tmp, dst) {
        // Try to restore the previous file if we had one.
        if backup.exists() {
            let _ = fs::rename(&backup, dst);
        }
        let _ = fs::remove_file(tmp);
        return Err(anyhow::Error::new(e).context(format!(
            "failed rename {} -> {}",
            tmp.display(),
            dst.display()
        )));
    }

    let _ = fs::remove_file(&backup);
    Ok(())
}
