use serde::{Deserialize, Serialize};

/// Settings for one generation run.
///
/// The output file names double as reserved names during discovery: a file
/// matching either is never treated as an input image, so re-running over an
/// already-processed tree sees the same groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// Pixels between adjacent images and between rows.
    pub padding: u32,
    /// File name of the composite sheet written into each group directory.
    pub sprite_file: String,
    /// File name of the stylesheet written next to the sheet.
    pub stylesheet_file: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            sprite_file: "sprite.png".into(),
            stylesheet_file: "sprite.css".into(),
        }
    }
}

impl SpriteConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SpriteGenError;

        if self.sprite_file.is_empty() || self.stylesheet_file.is_empty() {
            return Err(SpriteGenError::InvalidConfig(
                "output file names must not be empty".into(),
            ));
        }
        if self.sprite_file.contains(['/', '\\']) || self.stylesheet_file.contains(['/', '\\']) {
            return Err(SpriteGenError::InvalidConfig(format!(
                "output file names must not contain path separators: `{}` / `{}`",
                self.sprite_file, self.stylesheet_file
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `SpriteConfig`.
    pub fn builder() -> SpriteConfigBuilder {
        SpriteConfigBuilder::new()
    }
}

/// Builder for `SpriteConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SpriteConfigBuilder {
    cfg: SpriteConfig,
}

impl SpriteConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: SpriteConfig::default(),
        }
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.cfg.padding = v;
        self
    }
    pub fn sprite_file(mut self, v: impl Into<String>) -> Self {
        self.cfg.sprite_file = v.into();
        self
    }
    pub fn stylesheet_file(mut self, v: impl Into<String>) -> Self {
        self.cfg.stylesheet_file = v.into();
        self
    }
    pub fn build(self) -> SpriteConfig {
        self.cfg
    }
}
