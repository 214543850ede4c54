//! Built-in preset pattern table
//!
//! The stock entries a formatting menu offers: each preset pairs a stable
//! identifier and a display label with a pattern string. The table is
//! embedded in the binary as TOML and loaded once on first access.

use std::fmt;
use std::sync::OnceLock;

/// Error type for preset-table operations
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    /// An error occurred while parsing the preset data
    ParseError(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::ParseError(msg) => write!(f, "Error parsing preset data: {}", msg),
        }
    }
}

impl std::error::Error for PresetError {}

type Result<T> = std::result::Result<T, PresetError>;

/// One entry of the preset table
#[derive(Debug, Clone, PartialEq)]
pub struct FormatPreset {
    /// Stable identifier, e.g. `"currency"`
    pub id: String,
    /// Display label, e.g. `"Currency"`
    pub label: String,
    /// The pattern string applied when the preset is chosen
    pub pattern: String,
}

/// Provides access to the built-in preset patterns
pub struct PresetManager {
    presets: Vec<FormatPreset>,
}

// Global singleton for the preset table
static PRESET_MANAGER: OnceLock<PresetManager> = OnceLock::new();

impl PresetManager {
    /// Create a new preset manager with the default preset data
    fn new() -> Self {
        let mut manager = Self {
            presets: Vec::new(),
        };

        // Parse and load the built-in preset data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with an empty table
            eprintln!("Failed to load embedded preset data: {}", e);
        }

        manager
    }

    /// Load the embedded preset data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let presets_toml = include_str!("presets/format_presets.toml");
        self.parse_presets(presets_toml)
    }

    /// Parse the preset TOML data
    fn parse_presets(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| PresetError::ParseError(e.to_string()))?;

        let entries = parsed_toml
            .get("preset")
            .and_then(|v| v.as_array())
            .ok_or_else(|| PresetError::ParseError("Missing [[preset]] array".to_string()))?;

        for entry in entries {
            let table = entry.as_table().ok_or_else(|| {
                PresetError::ParseError("Preset entry is not a table".to_string())
            })?;
            let field = |name: &str| -> Result<String> {
                table
                    .get(name)
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        PresetError::ParseError(format!("Preset entry missing '{name}'"))
                    })
            };

            self.presets.push(FormatPreset {
                id: field("id")?,
                label: field("label")?,
                pattern: field("pattern")?,
            });
        }

        Ok(())
    }

    /// Get the global preset manager instance
    pub fn global() -> &'static PresetManager {
        PRESET_MANAGER.get_or_init(PresetManager::new)
    }

    /// Look up a preset by its identifier
    pub fn get(&self, id: &str) -> Option<&FormatPreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// All presets in table order
    pub fn all(&self) -> &[FormatPreset] {
        &self.presets
    }
}
