//! Sweep-line "does any pair intersect" test over a batch of segments.
//!
//! Shamos–Hoey style: walk segment start/end events in x order while
//! keeping the segments currently under the sweep line sorted by their y
//! value. Only segments that become neighbors in that order are tested
//! against each other, so a run with no adjacent-pair crossing after all
//! events proves no two segments intersect. O(n log n) expected.

use super::LineSegment;
use crate::float_types::Real;
use crate::line::Line;
use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // starts sort before ends at equal x, so touching spans overlap
    Start,
    End,
}

struct Event {
    x: Real,
    kind: EventKind,
    seg: usize,
}

/// Do any two of the given segments intersect (endpoint touches included)?
pub fn any_intersection(segments: &[LineSegment]) -> bool {
    if segments.len() < 2 {
        return false;
    }

    let mut events: Vec<Event> = Vec::with_capacity(segments.len() * 2);
    for (i, s) in segments.iter().enumerate() {
        events.push(Event {
            x: s.min_x(),
            kind: EventKind::Start,
            seg: i,
        });
        events.push(Event {
            x: s.max_x(),
            kind: EventKind::End,
            seg: i,
        });
    }
    events.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.seg.cmp(&b.seg))
    });

    // Active set: segment indices ordered by y at the current sweep x.
    let mut active: Vec<usize> = Vec::new();
    for event in &events {
        match event.kind {
            EventKind::Start => {
                let pos = active
                    .partition_point(|&other| order(segments, other, event.seg) == Ordering::Less);
                active.insert(pos, event.seg);
                if pos > 0 && segments[active[pos - 1]].intersects(&segments[event.seg]) {
                    return true;
                }
                if pos + 1 < active.len()
                    && segments[active[pos + 1]].intersects(&segments[event.seg])
                {
                    return true;
                }
            },
            EventKind::End => {
                if let Some(pos) = active.iter().position(|&other| other == event.seg) {
                    active.remove(pos);
                    // the removal makes pos-1 and pos adjacent
                    if pos > 0
                        && pos < active.len()
                        && segments[active[pos - 1]].intersects(&segments[active[pos]])
                    {
                        return true;
                    }
                }
            },
        }
    }
    false
}

/// Order two active segments by y at the first x both spans cover.
fn order(segments: &[LineSegment], i: usize, j: usize) -> Ordering {
    let x = segments[i].min_x().max(segments[j].min_x());
    y_on(&segments[i], x)
        .partial_cmp(&y_on(&segments[j], x))
        .unwrap_or(Ordering::Equal)
        .then_with(|| i.cmp(&j))
}

/// The sweep key: y of the segment at the given x. Vertical and degenerate
/// segments key on their lower endpoint.
fn y_on(segment: &LineSegment, x: Real) -> Real {
    match segment.line() {
        Some(Line::Normal { k, b }) => k * x + b,
        Some(Line::ConstY { y }) => *y,
        Some(Line::ConstX { .. }) | None => segment.min_y(),
    }
}
