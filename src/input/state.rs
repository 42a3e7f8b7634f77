//! Stroke state machine - tracks pen-down/pen-up and the previous sample.
//!
//! The recorder exists so that consecutive samples become line segments
//! rather than isolated dots. Modeling it as an enum makes the invariant
//! "a last point exists exactly while a stroke is active" unrepresentable
//! to violate.
//!
//! ## State Transitions
//!
//! ```text
//! Idle    -> Drawing   (pen down at P; records P, draws nothing)
//! Drawing -> Drawing   (sample at Q; yields segment last->Q, last becomes Q)
//! Drawing -> Idle      (pen up or pointer leaves the surface)
//! ```
//!
//! Samples that arrive while `Idle` are ignored; stray move events after
//! pen-up therefore cannot corrupt state. A second pen-down without an
//! intervening pen-up simply overwrites the recorded point.

use crate::types::Point;

/// A line segment between two consecutive stroke samples, in
/// surface-internal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Stroke capture state for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// Pen is up; move samples are no-ops
    #[default]
    Idle,

    /// Pen is down; `last_point` is the previous sample
    Drawing { last_point: Point },
}

impl StrokeState {
    /// Returns true while a stroke is active
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The previous sample, if a stroke is active
    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::Drawing { last_point } => Some(*last_point),
            Self::Idle => None,
        }
    }

    /// Pen-down at `point`. Starts (or restarts) a stroke; no segment is
    /// produced - a tap alone leaves no mark.
    pub fn pen_down(&mut self, point: Point) {
        *self = Self::Drawing { last_point: point };
    }

    /// A move sample at `point`. While drawing, yields the segment from the
    /// previous sample and advances the recorded point; while idle, returns
    /// `None` and changes nothing.
    pub fn sample(&mut self, point: Point) -> Option<Segment> {
        match self {
            Self::Drawing { last_point } => {
                let segment = Segment {
                    from: *last_point,
                    to: point,
                };
                *last_point = point;
                Some(segment)
            }
            Self::Idle => None,
        }
    }

    /// Pen-up (or pointer left the surface). No segment is produced.
    pub fn pen_up(&mut self) {
        *self = Self::Idle;
    }
}
