//! Pipe segments and centerline length computation.

use crate::point::Point2;
use fh_core::ids::SegmentId;
use fh_core::units::{Length, m};

/// Shape of a pipe segment between its two endpoints.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentShape {
    /// Straight run from start to end.
    Straight,
    /// Circular arc with the given bend radius. A chord longer than the
    /// bend diameter is geometrically impossible; length computation clamps
    /// instead of failing.
    Arc { bend_radius: Length },
    /// Free-form curve approximated by the polyline through the ordered
    /// control points.
    Spline { control: Vec<Point2> },
}

/// One run of pipe with a fixed inner diameter.
#[derive(Clone, Debug, PartialEq)]
pub struct PipeSegment {
    pub id: SegmentId,
    pub start: Point2,
    pub end: Point2,
    /// Pipe inner diameter
    pub diameter: Length,
    pub shape: SegmentShape,
}

impl PipeSegment {
    pub fn straight(id: SegmentId, start: Point2, end: Point2, diameter: Length) -> Self {
        Self {
            id,
            start,
            end,
            diameter,
            shape: SegmentShape::Straight,
        }
    }

    pub fn arc(
        id: SegmentId,
        start: Point2,
        end: Point2,
        diameter: Length,
        bend_radius: Length,
    ) -> Self {
        Self {
            id,
            start,
            end,
            diameter,
            shape: SegmentShape::Arc { bend_radius },
        }
    }

    pub fn spline(
        id: SegmentId,
        start: Point2,
        end: Point2,
        diameter: Length,
        control: Vec<Point2>,
    ) -> Self {
        Self {
            id,
            start,
            end,
            diameter,
            shape: SegmentShape::Spline { control },
        }
    }

    /// Centerline length of the segment.
    ///
    /// Always finite and non-negative; a zero-length segment yields 0.
    pub fn length(&self) -> Length {
        match &self.shape {
            SegmentShape::Straight => m(self.start.distance(self.end)),
            SegmentShape::Arc { bend_radius } => {
                let r = bend_radius.value;
                let chord = self.start.distance(self.end);
                // chord > 2r is clamped: the arc degrades to a half circle
                let ratio = (chord / (2.0 * r)).clamp(-1.0, 1.0);
                let angle = 2.0 * ratio.asin();
                m(r * angle)
            }
            SegmentShape::Spline { control } => {
                let mut len = 0.0;
                let mut prev = self.start;
                for &p in control {
                    len += prev.distance(p);
                    prev = p;
                }
                len += prev.distance(self.end);
                m(len)
            }
        }
    }
}
