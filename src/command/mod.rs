use std::fmt;

use crate::error::{CommandError, Result};
use crate::math::Point2;

/// SVG path-command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgChar {
    Move,
    Line,
    Quadratic,
    Cubic,
    ClosePath,
    Arc,
}

impl SvgChar {
    /// Number of absolute points a command of this kind stores, including
    /// the leading current point. `None` for kinds the builder does not
    /// support.
    #[must_use]
    pub fn stored_point_count(self) -> Option<usize> {
        match self {
            SvgChar::Move => Some(1),
            SvgChar::Line | SvgChar::ClosePath => Some(2),
            SvgChar::Quadratic => Some(3),
            SvgChar::Cubic => Some(4),
            SvgChar::Arc => None,
        }
    }

    /// Whether this kind carries curve control points.
    #[must_use]
    pub fn is_curve(self) -> bool {
        matches!(self, SvgChar::Quadratic | SvgChar::Cubic)
    }
}

impl fmt::Display for SvgChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SvgChar::Move => 'M',
            SvgChar::Line => 'L',
            SvgChar::Quadratic => 'Q',
            SvgChar::Cubic => 'C',
            SvgChar::ClosePath => 'Z',
            SvgChar::Arc => 'A',
        };
        write!(f, "{letter}")
    }
}

/// A persisted path command: its kind plus the absolute points it stores.
///
/// The first stored point of `L`/`Q`/`C`/`Z` commands is the current point
/// inherited from the previous command; it is omitted when serializing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    id: String,
    svg_char: SvgChar,
    points: Vec<Point2>,
}

impl PathCommand {
    /// Returns the identifier of the command.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the kind of the command.
    #[must_use]
    pub fn svg_char(&self) -> SvgChar {
        self.svg_char
    }

    /// Returns the stored points of the command.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Serializes the command into SVG `d` attribute syntax.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        fn coord(p: &Point2) -> String {
            format!("{},{}", p.x, p.y)
        }
        match self.svg_char {
            SvgChar::ClosePath => "Z".to_string(),
            SvgChar::Move => format!("M {}", coord(&self.points[0])),
            _ => {
                let coords: Vec<String> = self.points[1..].iter().map(coord).collect();
                format!("{} {}", self.svg_char, coords.join(" "))
            }
        }
    }
}

/// Builder that validates a point sequence against its command kind before
/// producing a [`PathCommand`].
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    svg_char: SvgChar,
    points: Vec<Point2>,
    id: Option<String>,
}

impl CommandBuilder {
    /// Creates a builder for a command of the given kind.
    #[must_use]
    pub fn new(svg_char: SvgChar, points: Vec<Point2>) -> Self {
        Self {
            svg_char,
            points,
            id: None,
        }
    }

    /// Sets the identifier carried over to the built command.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builds the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the point count does not match the command kind,
    /// or if the kind is `Arc`.
    pub fn build(self) -> Result<PathCommand> {
        let Some(expected) = self.svg_char.stored_point_count() else {
            return Err(CommandError::UnsupportedArc.into());
        };
        if self.points.len() != expected {
            return Err(CommandError::PointCountMismatch {
                svg_char: self.svg_char,
                expected,
                actual: self.points.len(),
            }
            .into());
        }
        Ok(PathCommand {
            id: self.id.unwrap_or_default(),
            svg_char: self.svg_char,
            points: self.points,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builds_line_command() {
        let cmd = CommandBuilder::new(
            SvgChar::Line,
            vec![Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)],
        )
        .id("seg-1")
        .build()
        .unwrap();
        assert_eq!(cmd.id(), "seg-1");
        assert_eq!(cmd.svg_char(), SvgChar::Line);
        assert_eq!(cmd.to_path_data(), "L 3,4");
    }

    #[test]
    fn point_count_mismatch_is_rejected() {
        let result = CommandBuilder::new(SvgChar::Cubic, vec![Point2::new(0.0, 0.0)]).build();
        assert!(result.is_err());
    }

    #[test]
    fn arc_is_rejected() {
        let result = CommandBuilder::new(SvgChar::Arc, vec![]).build();
        assert!(result.is_err());
    }

    #[test]
    fn move_serializes_its_single_point() {
        let cmd = CommandBuilder::new(SvgChar::Move, vec![Point2::new(5.0, 10.0)])
            .build()
            .unwrap();
        assert_eq!(cmd.to_path_data(), "M 5,10");
    }

    #[test]
    fn quadratic_omits_the_current_point() {
        let cmd = CommandBuilder::new(
            SvgChar::Quadratic,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 0.0),
            ],
        )
        .build()
        .unwrap();
        assert_eq!(cmd.to_path_data(), "Q 1,2 2,0");
    }

    #[test]
    fn close_path_serializes_bare() {
        let cmd = CommandBuilder::new(
            SvgChar::ClosePath,
            vec![Point2::new(1.0, 1.0), Point2::new(0.0, 0.0)],
        )
        .build()
        .unwrap();
        assert_eq!(cmd.to_path_data(), "Z");
    }
}
