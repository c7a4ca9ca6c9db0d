use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::ReelResult;
use crate::text::engine::{ParleyMetrics, TextLayoutEngine};
use crate::text::metrics::{BlockMetrics, FontMetrics};

/// Families tried, in order, after the requested one.
const SANS_FALLBACKS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

/// Raw bytes of an outline font face.
#[derive(Clone)]
pub struct OutlineFont {
    bytes: Arc<Vec<u8>>,
    index: u32,
    family: String,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .finish()
    }
}

impl OutlineFont {
    /// Font file contents.
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    /// Face index inside the font file.
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// A resolved font face used for both measuring and drawing.
#[derive(Clone, Debug)]
pub enum Typeface {
    /// Shaped outline font.
    Outline(OutlineFont),
    /// Built-in fixed-advance block glyphs.
    Block,
}

impl Typeface {
    /// Resolve the font to render with. Never fails: an unavailable font file or family falls
    /// back to a system sans-serif, then to the built-in block face.
    #[tracing::instrument]
    pub fn resolve(family: &str, font_path: Option<&Path>) -> Self {
        if let Some(path) = font_path {
            match std::fs::read(path) {
                Ok(bytes) => {
                    if let Some(face) = Self::from_bytes(bytes, 0) {
                        return face;
                    }
                    tracing::warn!(path = %path.display(), "font file has no usable face");
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "font file unreadable"),
            }
        }

        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let mut names: Vec<&str> = vec![family];
        names.extend(SANS_FALLBACKS.iter().copied().filter(|n| *n != family));
        let found = names
            .iter()
            .find_map(|name| {
                let families = [usvg::fontdb::Family::Name(*name)];
                db.query(&usvg::fontdb::Query {
                    families: &families,
                    weight: usvg::fontdb::Weight::NORMAL,
                    stretch: usvg::fontdb::Stretch::Normal,
                    style: usvg::fontdb::Style::Normal,
                })
            })
            .or_else(|| db.faces().next().map(|f| f.id));

        if let Some(id) = found
            && let Some((bytes, index)) = db.with_face_data(id, |data, index| (data.to_vec(), index))
            && let Some(face) = Self::from_bytes(bytes, index)
        {
            if let Self::Outline(f) = &face
                && !f.family.eq_ignore_ascii_case(family)
            {
                tracing::warn!(requested = family, using = %f.family, "font family unavailable, substituting");
            }
            return face;
        }

        tracing::warn!(requested = family, "no system fonts found, using built-in block face");
        Self::Block
    }

    /// Wrap font bytes, returning `None` when they contain no usable family.
    pub fn from_bytes(bytes: Vec<u8>, index: u32) -> Option<Self> {
        let engine = TextLayoutEngine::new(&bytes).ok()?;
        let family = engine.family_name().to_owned();
        Some(Self::Outline(OutlineFont {
            bytes: Arc::new(bytes),
            index,
            family,
        }))
    }

    /// Human-readable face name.
    pub fn name(&self) -> &str {
        match self {
            Self::Outline(f) => &f.family,
            Self::Block => "built-in block",
        }
    }

    /// Fresh measurement state for this face.
    pub fn metrics(&self) -> ReelResult<Box<dyn FontMetrics>> {
        match self {
            Self::Outline(f) => Ok(Box::new(ParleyMetrics::new(&f.bytes)?)),
            Self::Block => Ok(Box::new(BlockMetrics)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/typeface.rs"]
mod tests;
