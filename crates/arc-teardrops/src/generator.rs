use log::debug;

use crate::board::{Board, LayerId, PadClass, TeardropArc, Track};
use crate::geometry::{round_units, Segment, Vec2};
use crate::intersect::intersections;
use crate::pad::GenericPad;
use crate::Request;

/// Name of the board group collecting every generated arc.
pub const GROUP_NAME: &str = "ARC-TEARDROPS";

/// Generate teardrop arcs for every selected pad and via against every
/// track on the board, append them to the shared arc group, and return the
/// number of arcs created.
///
/// Degenerate geometry never fails the run: each candidate that does not
/// form a well-defined tangent arc is skipped on its own.
pub fn add_arc_teardrops(board: &mut Board, request: &Request) -> usize {
    let tracks: Vec<Track> = board.straight_tracks().cloned().collect();
    let mut arcs = Vec::new();
    let mut count = 0;

    if request.pth() > 0.0 {
        let mut pads: Vec<GenericPad> = board
            .selected_pads(PadClass::Pth)
            .map(GenericPad::from_pad)
            .collect();
        count += generate(&mut pads, &tracks, request.pth(), &mut arcs);
    }
    if request.smd() > 0.0 {
        let mut pads: Vec<GenericPad> = board
            .selected_pads(PadClass::Smd)
            .map(GenericPad::from_pad)
            .collect();
        count += generate(&mut pads, &tracks, request.smd(), &mut arcs);
    }
    if request.via() > 0.0 {
        let mut pads: Vec<GenericPad> = board
            .selected_vias()
            .map(GenericPad::from_via)
            .collect();
        count += generate(&mut pads, &tracks, request.via(), &mut arcs);
    }

    debug!("generated {count} teardrop arcs");
    board.group_mut(GROUP_NAME).arcs.extend(arcs);
    count
}

fn generate(
    pads: &mut [GenericPad],
    tracks: &[Track],
    rel_radius: f64,
    arcs: &mut Vec<TeardropArc>,
) -> usize {
    let mut count = 0;
    for pad in pads.iter_mut() {
        for track in tracks {
            count += arcs_for_pad(pad, track, rel_radius, arcs);
        }
    }
    count
}

/// Teardrop arcs for one (pad, track) pair: 0, 1 or 2, one candidate per
/// lateral side of the track.
fn arcs_for_pad(
    pad: &mut GenericPad,
    track: &Track,
    rel_radius: f64,
    arcs: &mut Vec<TeardropArc>,
) -> usize {
    if !pad.layers().contains(track.layer) {
        return 0;
    }

    // Exactly one endpoint must lie inside the pad outline; reorient so
    // `a` is the pad-side endpoint.
    let contains_start = pad.outline().contains(track.start);
    let contains_end = pad.outline().contains(track.end);
    let seg = if contains_start && !contains_end {
        Segment::new(track.start, track.end)
    } else if contains_end && !contains_start {
        Segment::new(track.end, track.start)
    } else {
        return 0;
    };

    let abs_radius = round_units(track.width as f64 * rel_radius);
    // Where the arc's narrow end meets the pad: half a track width inside
    // the pad boundary, so the arc end matches the track edge tangentially.
    let pad_to_arc_end = -(track.width / 2);
    let pad_to_arc_center = pad_to_arc_end + abs_radius;
    if pad_to_arc_center <= 0 {
        return 0;
    }

    let mut count = 0;
    for sign in [1, -1] {
        if let Some(arc) = build_arc(
            pad,
            seg,
            track.layer,
            track.width,
            sign,
            abs_radius,
            pad_to_arc_end,
            pad_to_arc_center,
        ) {
            arcs.push(arc);
            count += 1;
        }
    }
    count
}

/// Tangent arc candidate on one side of the track.
///
/// The arc center must be at distance `abs_radius` from the track line and
/// at distance `pad_to_arc_center` from the pad boundary; the first locus
/// is a line parallel to the track, the second the inflated pad outline.
/// A single intersection of the two pins the center down; anything else is
/// ambiguous and rejected.
#[allow(clippy::too_many_arguments)]
fn build_arc(
    pad: &mut GenericPad,
    seg: Segment,
    layer: LayerId,
    width: i64,
    sign: i64,
    abs_radius: i64,
    pad_to_arc_end: i64,
    pad_to_arc_center: i64,
) -> Option<TeardropArc> {
    let ortho = seg.direction().perpendicular().resize(abs_radius as f64);
    let track_offset = seg.parallel_through(seg.a + ortho * sign);
    let hits = intersections(pad.offset(pad_to_arc_center), track_offset);
    if hits.len() != 1 {
        return None;
    }
    let center = hits[0];

    let start = seg.nearest_point(center);
    let end = pad.offset(pad_to_arc_end).nearest_point(center);

    // Pad-side tangent point collapsing onto the track centerline makes a
    // numerically unstable, visually meaningless arc.
    if seg.line_distance(end) < width as f64 / 100.0 {
        return None;
    }

    let chord_mid = Vec2::new(
        round_units((start.x + end.x) as f64 / 2.0),
        round_units((start.y + end.y) as f64 / 2.0),
    );
    if chord_mid == center {
        return None;
    }
    let mid = center + (chord_mid - center).resize(abs_radius as f64);

    // Swap endpoint roles with the side so winding stays consistent.
    Some(TeardropArc {
        layer,
        width,
        start: if sign < 0 { start } else { end },
        mid,
        end: if sign < 0 { end } else { start },
    })
}
