use crate::context::{DrawContext, ImageFit};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tiny_skia::Pixmap;
use tracing::debug;
use tv_core::{Result, TvError};
use tv_theme::Color;

/// An immutable decoded bitmap, named after the asset it came from.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    name: String,
    pixmap: Pixmap,
}

impl ImageSurface {
    pub fn from_pixmap(name: impl Into<String>, pixmap: Pixmap) -> Self {
        Self { name: name.into(), pixmap }
    }

    /// Decode a PNG file.
    pub fn load_png(name: impl Into<String>, path: &Path) -> Result<Self> {
        let pixmap = Pixmap::load_png(path)
            .map_err(|e| TvError::Asset(format!("cannot decode '{}': {e}", path.display())))?;
        Ok(Self::from_pixmap(name, pixmap))
    }

    /// A single-colour image; used for placeholders.
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            TvError::Geometry(format!("cannot allocate a {width}x{height} image"))
        })?;
        pixmap.fill(color.to_skia());
        Ok(Self::from_pixmap(name, pixmap))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Draw at natural scale into `(x, y, width, height)`, tiling when the
    /// box is larger than the image and cropping when it is smaller.
    pub fn draw(&self, ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64, opacity: f64) {
        ctx.draw_image(self, x, y, width, height, opacity, ImageFit::Tile);
    }

    /// Draw scaled to exactly cover `(x, y, width, height)`.
    pub fn draw_scaled(
        &self,
        ctx: &mut dyn DrawContext,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        opacity: f64,
    ) {
        ctx.draw_image(self, x, y, width, height, opacity, ImageFit::Stretch);
    }
}

/// Load-once cache of image assets keyed by logical name.
///
/// `get("timelinebar_left")` resolves `<root>/images/timelinebar_left.png`.
/// Entries are never evicted.
#[derive(Debug)]
pub struct ImagePool {
    root: PathBuf,
    cache: Mutex<HashMap<String, Arc<ImageSurface>>>,
}

impl ImagePool {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join("images").join(format!("{name}.png"))
    }

    pub fn get(&self, name: &str) -> Result<Arc<ImageSurface>> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(hit) = cache.get(name) {
            return Ok(hit.clone());
        }

        let path = self.path_for(name);
        if !path.exists() {
            return Err(TvError::Asset(format!(
                "image '{name}' not found at '{}'",
                path.display()
            )));
        }
        let surface = Arc::new(ImageSurface::load_png(name, &path)?);
        debug!(name, width = surface.width(), height = surface.height(), "loaded image");
        cache.insert(name.to_string(), surface.clone());
        Ok(surface)
    }

    /// First of `names` that resolves; the error for the last one otherwise.
    pub fn get_any(&self, names: &[&str]) -> Result<Arc<ImageSurface>> {
        let mut last = TvError::Asset("no image names given".into());
        for name in names {
            match self.get(name) {
                Ok(surface) => return Ok(surface),
                Err(e) => last = e,
            }
        }
        Err(last)
    }

    /// Register an already-decoded surface under its own name.
    pub fn insert(&self, surface: ImageSurface) -> Arc<ImageSurface> {
        let surface = Arc::new(surface);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(surface.name().to_string(), surface.clone());
        surface
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
