//! Canvas orientation presets.

use crate::surface::CanvasSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named canvas shapes offered to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// 400×250 landscape
    Wide,
    /// 400×400 square
    Equal,
    /// 250×400 portrait
    High,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [Orientation::Wide, Orientation::Equal, Orientation::High];

    pub fn canvas_size(&self) -> CanvasSize {
        match self {
            Orientation::Wide => CanvasSize::new(400, 250),
            Orientation::Equal => CanvasSize::new(400, 400),
            Orientation::High => CanvasSize::new(250, 400),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Orientation::Wide => "wide",
            Orientation::Equal => "equal",
            Orientation::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Wide => "Wide",
            Orientation::Equal => "Square",
            Orientation::High => "High",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for names outside the preset set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown orientation preset '{0}'")]
pub struct UnknownOrientation(pub String);

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    /// Case-insensitive: `"WIDE"` and `"wide"` are the same preset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Orientation::Wide),
            "equal" => Ok(Orientation::Equal),
            "high" => Ok(Orientation::High),
            _ => Err(UnknownOrientation(s.to_string())),
        }
    }
}
