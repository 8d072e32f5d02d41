use anyhow::{bail, Context};
use serde::Serialize;
use std::path::Path;

/// Logo shipped in `fixtures/solar-logo.png`.
static EMBEDDED_LOGO: &[u8] = include_bytes!("../../../fixtures/solar-logo.png");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// The fixed logo printed at the top of page one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAsset {
    pub name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl LogoAsset {
    pub fn embedded() -> Self {
        Self {
            name: "solar-logo.png".to_string(),
            format: ImageFormat::Png,
            bytes: EMBEDDED_LOGO.to_vec(),
        }
    }

    /// Read a JPEG or PNG logo from disk; the format comes from the extension.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let format = match extension.as_str() {
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "png" => ImageFormat::Png,
            other => bail!("unsupported logo format {:?} for {}", other, path.display()),
        };
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read logo {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("logo")
            .to_string();
        Ok(Self {
            name,
            format,
            bytes,
        })
    }
}
