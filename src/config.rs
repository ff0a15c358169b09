use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub presentation: PresentationConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Upper bound on a single upload, in MiB.
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            host: "0.0.0.0".to_string(),
            max_upload_mb: 200,
        }
    }
}

impl ServerConfig {
    pub fn body_limit(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "imageclassifier.onnx".to_string(),
            intra_threads: 4,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PresentationConfig {
    pub profile: ProfileName,
    pub title: Option<String>,
    pub show_confidence: Option<bool>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    #[default]
    Detailed,
    Compact,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    Wide,
    Centered,
}

/// Cosmetic settings for the upload page. Classification is identical
/// across profiles.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationProfile {
    pub page_title: String,
    pub title: String,
    pub layout: Layout,
    pub show_confidence: bool,
    pub capitalize_label: bool,
}

impl PresentationProfile {
    pub fn detailed() -> Self {
        Self {
            page_title: "Emotion Classifier".to_string(),
            title: "Happy 😄 or Sad 🥺 Classifier".to_string(),
            layout: Layout::Wide,
            show_confidence: true,
            capitalize_label: true,
        }
    }

    pub fn compact() -> Self {
        Self {
            page_title: "Happy or Sad".to_string(),
            title: "Happy or Sad Classifier".to_string(),
            layout: Layout::Centered,
            show_confidence: false,
            capitalize_label: false,
        }
    }
}

impl PresentationConfig {
    /// Resolves the preset named by `profile` and applies any overrides.
    pub fn resolve(&self) -> PresentationProfile {
        let mut profile = match self.profile {
            ProfileName::Detailed => PresentationProfile::detailed(),
            ProfileName::Compact => PresentationProfile::compact(),
        };
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(show) = self.show_confidence {
            profile.show_confidence = show;
        }
        profile
    }
}

impl AppConfig {
    /// Reads the YAML config at `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
