use tracing::debug;

use crate::core::{ColorBy, Palette, SelectedFile};
use crate::error::ViewerResult;
use crate::net::GenerateBackend;

use super::ViewerSession;

impl<B: GenerateBackend> ViewerSession<B> {
    /// Sets the number of generations to display. Values outside the
    /// accepted range are rejected and leave the prior value in place.
    pub fn set_generation_depth(&mut self, depth: u32) -> ViewerResult<()> {
        self.config.set_generation_depth(depth)
    }

    /// Parses and applies a color-by dimension, as handed over by a UI
    /// select control. Unknown values are rejected before anything is
    /// stored.
    pub fn set_color_by(&mut self, value: &str) -> ViewerResult<()> {
        let color_by: ColorBy = value.parse()?;
        self.config.set_color_by(color_by);
        Ok(())
    }

    /// Parses and applies a palette identifier.
    pub fn set_palette(&mut self, value: &str) -> ViewerResult<()> {
        let palette: Palette = value.parse()?;
        self.config.set_palette(palette);
        Ok(())
    }

    /// Stores the file uploaded with the next generate call. Content is not
    /// validated here.
    pub fn select_file(&mut self, file: SelectedFile) {
        debug!(
            name = file.name(),
            bytes = file.bytes().len(),
            "file selected"
        );
        self.config.set_selected_file(file);
    }

    pub fn clear_selected_file(&mut self) {
        self.config.clear_selected_file();
    }
}
