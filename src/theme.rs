use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Light or dark presentation. The only state that survives a restart.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Stored {
    theme: Theme,
}

/// Theme preference persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct Preference {
    path: PathBuf,
}

impl Preference {
    pub fn at<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme, or the default when nothing was saved yet.
    pub fn load(&self) -> anyhow::Result<Theme> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str::<Stored>(&text)
                .map(|stored| stored.theme)
                .with_context(|| format!("parse theme preference {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Theme::default()),
            Err(e) => Err(e)
                .with_context(|| format!("read theme preference {}", self.path.display())),
        }
    }

    pub fn save(&self, theme: Theme) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let text = serde_json::to_string(&Stored { theme })?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write theme preference {}", self.path.display()))?;
        log::debug!("[theme] saved {} to {}", theme, self.path.display());
        Ok(())
    }

    /// Flip the saved theme and persist the result.
    pub fn toggle(&self) -> anyhow::Result<Theme> {
        let theme = self.load()?.toggle();
        self.save(theme)?;
        Ok(theme)
    }
}
