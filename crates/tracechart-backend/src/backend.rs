//! Backend trait for materializing chart layouts.

use std::path::{Path, PathBuf};
use tracechart_core::chart::CompositeLayout;
use tracechart_core::Result;

/// Trait defining the interface for rendering backends.
///
/// Backends are responsible for:
/// - Drawing the primitives a layout describes
/// - Presenting them on an interactive display surface
/// - Writing them to a destination
///
/// A backend never modifies the layout it is given.
pub trait RenderBackend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &'static str;

    /// Present the layout interactively.
    fn show(&self, layout: &CompositeLayout) -> Result<()>;

    /// Persist the layout.
    ///
    /// # Arguments
    /// * `layout` - The layout to write
    /// * `destination` - Where to write it; the format is backend specific
    fn save(&self, layout: &CompositeLayout, destination: &Path) -> Result<()>;

    /// Destination used when saving is requested without an explicit path.
    fn default_destination(&self) -> PathBuf {
        PathBuf::from("profile.html")
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn show(&self, layout: &CompositeLayout) -> Result<()> {
        (**self).show(layout)
    }

    fn save(&self, layout: &CompositeLayout, destination: &Path) -> Result<()> {
        (**self).save(layout, destination)
    }

    fn default_destination(&self) -> PathBuf {
        (**self).default_destination()
    }
}
