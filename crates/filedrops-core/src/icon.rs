//! Entry icons.
//!
//! Files and directories expose icons in a fixed set of sizes. The images
//! come from an [`IconProvider`] injected into the
//! [`FileSystem`](crate::FileSystem); when there is no provider, or it
//! fails, the entry falls back to a blank image so icon lookups never
//! surface an error.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::{CoreError, CoreResult};

/// Supported square icon sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconSize {
    Px16,
    Px24,
    Px32,
    Px48,
    Px64,
    Px128,
    Px256,
}

impl IconSize {
    pub const ALL: [IconSize; 7] = [
        IconSize::Px16,
        IconSize::Px24,
        IconSize::Px32,
        IconSize::Px48,
        IconSize::Px64,
        IconSize::Px128,
        IconSize::Px256,
    ];

    /// Edge length in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Px16 => 16,
            IconSize::Px24 => 24,
            IconSize::Px32 => 32,
            IconSize::Px48 => 48,
            IconSize::Px64 => 64,
            IconSize::Px128 => 128,
            IconSize::Px256 => 256,
        }
    }

    pub fn from_pixels(pixels: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.pixels() == pixels)
    }
}

/// Directory icons come in a closed and an open flavour. Files only use `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconVariant {
    #[default]
    Closed,
    Open,
}

/// A square icon image of a known [`IconSize`].
#[derive(Debug, Clone)]
pub struct IconImage {
    size: IconSize,
    image: DynamicImage,
}

impl IconImage {
    /// A fully transparent image, used whenever no icon is available.
    pub fn blank(size: IconSize) -> Self {
        let px = size.pixels();
        Self {
            size,
            image: DynamicImage::new_rgba8(px, px),
        }
    }

    /// Wraps `image`, scaling it to `size` if its dimensions differ.
    pub fn from_image(size: IconSize, image: DynamicImage) -> Self {
        let px = size.pixels();
        let image = if image.dimensions() == (px, px) {
            image
        } else {
            image.resize_exact(px, px, FilterType::Triangle)
        };
        Self { size, image }
    }

    pub fn size(&self) -> IconSize {
        self.size
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Returns `true` if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.image.to_rgba8().pixels().all(|p| p[3] == 0)
    }
}

/// What an [`IconProvider`] is asked to draw.
#[derive(Debug, Clone, Copy)]
pub struct IconRequest<'a> {
    pub path: &'a Path,
    pub is_dir: bool,
    pub size: IconSize,
    pub variant: IconVariant,
}

/// Source of entry icons.
///
/// Returning `Ok(None)` means "no icon for this entry"; the caller then uses
/// [`IconImage::blank`].
pub trait IconProvider: std::fmt::Debug + Send + Sync {
    fn icon(&self, request: &IconRequest<'_>) -> CoreResult<Option<IconImage>>;
}

/// Asks `provider` for an icon, degrading to a blank image on absence or failure.
pub(crate) fn resolve_icon(
    provider: Option<&dyn IconProvider>,
    request: &IconRequest<'_>,
) -> IconImage {
    let found = match provider {
        Some(provider) => match provider.icon(request) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!("icon lookup failed for {}: {e}", request.path.display());
                None
            }
        },
        None => None,
    };
    found.unwrap_or_else(|| IconImage::blank(request.size))
}

/// Loads PNG icons from a theme directory laid out as `<root>/<px>/<name>.png`.
///
/// Directories use `folder` or `folder-open`; files use their lower-cased
/// extension and fall back to `file`.
#[derive(Debug, Clone)]
pub struct ThemeIconProvider {
    root: PathBuf,
}

impl ThemeIconProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn candidates(request: &IconRequest<'_>) -> Vec<String> {
        if request.is_dir {
            return match request.variant {
                IconVariant::Open => vec!["folder-open".to_string(), "folder".to_string()],
                IconVariant::Closed => vec!["folder".to_string()],
            };
        }
        let mut names = Vec::with_capacity(2);
        if let Some(ext) = request.path.extension().and_then(|e| e.to_str()) {
            names.push(ext.to_lowercase());
        }
        names.push("file".to_string());
        names
    }
}

impl IconProvider for ThemeIconProvider {
    fn icon(&self, request: &IconRequest<'_>) -> CoreResult<Option<IconImage>> {
        let size_dir = self.root.join(request.size.pixels().to_string());
        for name in Self::candidates(request) {
            let path = size_dir.join(format!("{name}.png"));
            if !path.is_file() {
                continue;
            }
            let image = image::open(&path)
                .map_err(|e| CoreError::Icon(format!("{}: {e}", path.display())))?;
            return Ok(Some(IconImage::from_image(request.size, image)));
        }
        Ok(None)
    }
}
