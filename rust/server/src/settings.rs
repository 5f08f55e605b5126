use std::path::PathBuf;

use serde::Deserialize;

/// Server settings, loaded from `mdx-export.toml` (optional) with
/// `MDX_EXPORT_*` environment overrides.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Candidate content roots, probed in order; the first that exists wins.
    #[serde(default = "default_content_roots")]
    pub content_roots: Vec<PathBuf>,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_owned()
}

fn default_content_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("pages"), PathBuf::from("src/pages")]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            content_roots: default_content_roots(),
        }
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("mdx-export").required(false))
            .add_source(config::Environment::with_prefix("MDX_EXPORT"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
