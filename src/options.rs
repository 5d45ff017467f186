//! Construction-time configuration with TOML preset support.
//!
//! The entry width is a policy resolved once when the palette texture is
//! built, not a per-call branch: hosts targeting backends that lack 16-bit
//! texel uploads select [`EntryWidth::Wide`] at configuration time. All
//! fields use `#[serde(default)]` so partial TOML files work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PaltexError;

/// Per-entry pixel-transfer width of the palette texture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryWidth {
    /// 16 bits per palette entry.
    #[default]
    Narrow,
    /// 32 bits per palette entry; decoded values are zero-extended.
    Wide,
}

impl EntryWidth {
    /// Bytes per texel under this width.
    #[must_use]
    pub fn bytes_per_texel(self) -> u32 {
        match self {
            Self::Narrow => 2,
            Self::Wide => 4,
        }
    }
}

/// Top-level options container for the palette texture bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteOptions {
    /// Pixel-transfer width per palette entry.
    pub entry_width: EntryWidth,
    /// Base label applied to the GPU resources (texture, staging buffer,
    /// bind group) for debugger/tooling output.
    pub label: String,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            entry_width: EntryWidth::default(),
            label: "Palette".to_owned(),
        }
    }
}

impl PaletteOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PaltexError::Io`] if the file cannot be read and
    /// [`PaltexError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, PaltexError> {
        let content = std::fs::read_to_string(path).map_err(PaltexError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PaltexError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PaltexError::OptionsParse`] if serialization fails and
    /// [`PaltexError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PaltexError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PaltexError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(PaltexError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = PaletteOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: PaletteOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts: PaletteOptions =
            toml::from_str("entry_width = \"wide\"").unwrap();
        assert_eq!(opts.entry_width, EntryWidth::Wide);
        // Everything else should be default
        assert_eq!(opts.label, "Palette");
    }

    #[test]
    fn entry_width_texel_sizes() {
        assert_eq!(EntryWidth::Narrow.bytes_per_texel(), 2);
        assert_eq!(EntryWidth::Wide.bytes_per_texel(), 4);
    }
}
