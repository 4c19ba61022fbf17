use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaError {
    #[error("media URI cannot be empty")]
    EmptyMediaUri,

    #[error("media URL is not parseable")]
    InvalidUrl,

    #[error("hotspot coordinates must lie within 0..=100 percent")]
    CoordinateOutOfRange,
}

//
// ─── MEDIA CORE TYPES ──────────────────────────────────────────────────────────
//

/// Kind of asset a question can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Image,
}

/// Location of a media asset, either on disk or remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    /// Parses a raw reference: `http(s)` strings become URLs, anything else
    /// is treated as a local path.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::EmptyMediaUri` for blank input and
    /// `MediaError::InvalidUrl` when an `http(s)` reference fails to parse.
    pub fn parse(raw: &str) -> Result<Self, MediaError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(MediaError::EmptyMediaUri);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let u = Url::parse(s).map_err(|_| MediaError::InvalidUrl)?;
            return Ok(MediaUri::Url(u));
        }
        Ok(MediaUri::FilePath(PathBuf::from(s)))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            _ => None,
        }
    }
}

/// A media asset attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub uri: MediaUri,
}

impl MediaRef {
    pub fn new(kind: MediaKind, uri: MediaUri) -> Self {
        Self { kind, uri }
    }
}

//
// ─── HOTSPOT TARGET ────────────────────────────────────────────────────────────
//

/// Default hit radius for hotspot questions, in percent units.
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.0;

/// Target point for a hotspot question, in percent coordinates relative to
/// the image (`0.0..=100.0` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotspotTarget {
    x: f64,
    y: f64,
}

impl HotspotTarget {
    /// Create a validated hotspot target.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::CoordinateOutOfRange` if either coordinate falls
    /// outside `0.0..=100.0`.
    pub fn new(x: f64, y: f64) -> Result<Self, MediaError> {
        if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
            return Err(MediaError::CoordinateOutOfRange);
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether a click at `(x, y)` lands on the target using the default
    /// tolerance radius.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_within(x, y, DEFAULT_HIT_TOLERANCE)
    }

    /// Whether a click at `(x, y)` falls within `tolerance` percent units of
    /// the target (Euclidean distance).
    #[must_use]
    pub fn contains_within(&self, x: f64, y: f64, tolerance: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt() <= tolerance
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
