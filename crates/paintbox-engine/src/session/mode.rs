use std::fmt;
use std::str::FromStr;

/// Which shape the next pointer sample creates.
///
/// No transition restrictions: any mode may follow any other.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawMode {
    #[default]
    Point,
    Triangle,
    Circle,
}

impl DrawMode {
    pub const ALL: [DrawMode; 3] = [DrawMode::Point, DrawMode::Triangle, DrawMode::Circle];

    pub const fn as_str(self) -> &'static str {
        match self {
            DrawMode::Point => "point",
            DrawMode::Triangle => "triangle",
            DrawMode::Circle => "circle",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drawing mode `{0}` (expected point, triangle or circle)")]
pub struct ParseModeError(pub String);

impl FromStr for DrawMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
