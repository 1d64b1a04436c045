//! Serpentine (meander) layout generation.

use fh_core::ids::SegmentId;
use fh_core::units::{Length, m};
use fh_geometry::{PipeSegment, Point2};

/// Generate a serpentine layout for a rectangular room.
///
/// Straight runs span the full room width at alternating direction, laid
/// with a half-spacing inset from the near wall, connected by 180° arc
/// turns with bend radius = spacing/2. The final row may fall short of the
/// far wall when the room length is not a multiple of the spacing; the
/// generator does not recenter or shorten rows to compensate.
pub fn generate_serpentine(
    room_width: Length,
    room_length: Length,
    pipe_spacing: Length,
    pipe_diameter: Length,
) -> Vec<PipeSegment> {
    let width = room_width.value;
    let length = room_length.value;
    let spacing = pipe_spacing.value;

    let mut segments = Vec::new();
    let mut next_id = 0_u32;
    let mut current_y = spacing / 2.0;
    let mut left_to_right = true;

    while current_y < length {
        let (start_x, end_x) = if left_to_right {
            (0.0, width)
        } else {
            (width, 0.0)
        };

        segments.push(PipeSegment::straight(
            SegmentId::from_index(next_id),
            Point2::new(start_x, current_y),
            Point2::new(end_x, current_y),
            pipe_diameter,
        ));
        next_id += 1;

        // Turn only if another full row fits
        if current_y + spacing < length {
            segments.push(PipeSegment::arc(
                SegmentId::from_index(next_id),
                Point2::new(end_x, current_y),
                Point2::new(end_x, current_y + spacing),
                pipe_diameter,
                m(spacing / 2.0),
            ));
            next_id += 1;
        }

        current_y += spacing;
        left_to_right = !left_to_right;
    }

    segments
}
