use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::palette::Palette;
use crate::error::{ViewerError, ViewerResult};

pub const MIN_GENERATION_DEPTH: u32 = 1;
pub const MAX_GENERATION_DEPTH: u32 = 20;

/// Dimension used to color sunburst segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBy {
    Generation,
    Patronym,
    Department,
    Region,
}

impl ColorBy {
    pub const ALL: [ColorBy; 4] = [
        ColorBy::Generation,
        ColorBy::Patronym,
        ColorBy::Department,
        ColorBy::Region,
    ];

    /// Wire name carried in the generate request.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorBy::Generation => "generation",
            ColorBy::Patronym => "patronym",
            ColorBy::Department => "department",
            ColorBy::Region => "region",
        }
    }
}

impl fmt::Display for ColorBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorBy {
    type Err = ViewerError;

    fn from_str(value: &str) -> ViewerResult<Self> {
        match value {
            "generation" => Ok(ColorBy::Generation),
            "patronym" => Ok(ColorBy::Patronym),
            "department" => Ok(ColorBy::Department),
            "region" => Ok(ColorBy::Region),
            other => Err(ViewerError::InvalidConfig(format!(
                "unknown color-by dimension `{other}`"
            ))),
        }
    }
}

/// In-memory reference to the file selected for upload.
///
/// Content is not inspected client-side; validating the actual GEDCOM
/// payload is the backend's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// User-editable render parameters plus the selected input file.
///
/// Owned by one UI session and mutated only through the setters below;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    generation_depth: u32,
    color_by: ColorBy,
    palette: Palette,
    selected_file: Option<SelectedFile>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generation_depth: 3,
            color_by: ColorBy::Generation,
            palette: Palette::Pastel,
            selected_file: None,
        }
    }
}

impl RenderConfig {
    /// Sets the number of generations to display.
    ///
    /// Rejects values outside `[MIN_GENERATION_DEPTH, MAX_GENERATION_DEPTH]`
    /// and keeps the prior value.
    pub fn set_generation_depth(&mut self, depth: u32) -> ViewerResult<()> {
        if !(MIN_GENERATION_DEPTH..=MAX_GENERATION_DEPTH).contains(&depth) {
            return Err(ViewerError::InvalidConfig(format!(
                "generation depth must be between {MIN_GENERATION_DEPTH} and \
                 {MAX_GENERATION_DEPTH}, got {depth}"
            )));
        }
        self.generation_depth = depth;
        Ok(())
    }

    pub fn set_color_by(&mut self, color_by: ColorBy) {
        self.color_by = color_by;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn set_selected_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    pub fn clear_selected_file(&mut self) {
        self.selected_file = None;
    }

    #[must_use]
    pub fn generation_depth(&self) -> u32 {
        self.generation_depth
    }

    #[must_use]
    pub fn color_by(&self) -> ColorBy {
        self.color_by
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }
}
