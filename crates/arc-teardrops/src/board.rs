use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::outline::Outline;

/// Copper layer id, 0..63.
pub type LayerId = u32;

/// Bitmask over copper layer ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerSet(u64);

impl LayerSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn single(layer: LayerId) -> Self {
        Self(1 << layer)
    }

    pub const fn with(self, layer: LayerId) -> Self {
        Self(self.0 | (1 << layer))
    }

    pub const fn contains(self, layer: LayerId) -> bool {
        self.0 & (1 << layer) != 0
    }
}

/// Pad attribute class, selecting which relative radius applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadClass {
    Pth,
    Smd,
}

/// A copper pad with its effective outline polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pad {
    pub class: PadClass,
    pub layers: LayerSet,
    pub outline: Outline,
    #[serde(default)]
    pub selected: bool,
}

/// A via: a circular barrel present on a set of layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Via {
    pub center: Vec2,
    /// Barrel diameter in board units.
    pub width: i64,
    pub layers: LayerSet,
    #[serde(default)]
    pub selected: bool,
}

/// One placed straight track segment. Read-only snapshot; width > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub layer: LayerId,
    pub width: i64,
    pub start: Vec2,
    pub end: Vec2,
}

/// An entry of the board's track list. The subtype is decided once when
/// the snapshot is built and never re-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackItem {
    Track(Track),
    Via(Via),
}

/// A circular arc primitive defined by three points, emitted onto the
/// board. Always carries its source track's layer and width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardropArc {
    pub layer: LayerId,
    pub width: i64,
    pub start: Vec2,
    pub mid: Vec2,
    pub end: Vec2,
}

/// A named group of arc primitives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcGroup {
    pub name: String,
    #[serde(default)]
    pub arcs: Vec<TeardropArc>,
}

/// In-memory snapshot of the board geometry relevant to teardrop
/// generation. Taken once per run; never re-read mid-run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub tracks: Vec<TrackItem>,
    #[serde(default)]
    pub pads: Vec<Pad>,
    #[serde(default)]
    pub groups: Vec<ArcGroup>,
}

impl Board {
    /// Plain track segments, in board order. Vias in the track list are
    /// not tracks.
    pub fn straight_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter_map(|item| match item {
            TrackItem::Track(t) => Some(t),
            TrackItem::Via(_) => None,
        })
    }

    pub fn selected_vias(&self) -> impl Iterator<Item = &Via> {
        self.tracks.iter().filter_map(|item| match item {
            TrackItem::Via(v) if v.selected => Some(v),
            _ => None,
        })
    }

    pub fn selected_pads(&self, class: PadClass) -> impl Iterator<Item = &Pad> {
        self.pads
            .iter()
            .filter(move |p| p.selected && p.class == class)
    }

    /// Group with the given name, created if absent.
    pub fn group_mut(&mut self, name: &str) -> &mut ArcGroup {
        let idx = match self.groups.iter().position(|g| g.name == name) {
            Some(i) => i,
            None => {
                self.groups.push(ArcGroup {
                    name: name.to_string(),
                    arcs: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_set_membership() {
        let set = LayerSet::single(0).with(31);
        assert!(set.contains(0));
        assert!(set.contains(31));
        assert!(!set.contains(1));
        assert!(!LayerSet::empty().contains(0));
    }

    #[test]
    fn group_mut_finds_or_creates() {
        let mut board = Board::default();
        board.group_mut("ARC-TEARDROPS").arcs.push(TeardropArc {
            layer: 0,
            width: 100,
            start: Vec2::new(0, 0),
            mid: Vec2::new(1, 1),
            end: Vec2::new(2, 0),
        });
        // Second lookup reuses the same group
        board.group_mut("ARC-TEARDROPS");
        assert_eq!(board.groups.len(), 1);
        assert_eq!(board.groups[0].arcs.len(), 1);

        board.group_mut("OTHER");
        assert_eq!(board.groups.len(), 2);
    }

    #[test]
    fn track_list_partitions_by_kind() {
        let board = Board {
            tracks: vec![
                TrackItem::Track(Track {
                    layer: 0,
                    width: 200,
                    start: Vec2::new(0, 0),
                    end: Vec2::new(1000, 0),
                }),
                TrackItem::Via(Via {
                    center: Vec2::new(1000, 0),
                    width: 600,
                    layers: LayerSet::single(0).with(31),
                    selected: true,
                }),
                TrackItem::Via(Via {
                    center: Vec2::new(2000, 0),
                    width: 600,
                    layers: LayerSet::single(0),
                    selected: false,
                }),
            ],
            ..Board::default()
        };
        assert_eq!(board.straight_tracks().count(), 1);
        assert_eq!(board.selected_vias().count(), 1);
    }

    #[test]
    fn board_json_round_trip() {
        let json = r#"{
            "tracks": [
                {"kind": "track", "layer": 0, "width": 200,
                 "start": {"x": 0, "y": 0}, "end": {"x": 5000, "y": 0}},
                {"kind": "via", "center": {"x": 5000, "y": 0}, "width": 600,
                 "layers": 1, "selected": true}
            ],
            "pads": [
                {"class": "pth", "layers": 1, "selected": true,
                 "outline": {"points": [
                     {"x": 100, "y": -100}, {"x": 100, "y": 100},
                     {"x": -100, "y": 100}, {"x": -100, "y": -100}]}}
            ]
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.straight_tracks().count(), 1);
        assert_eq!(board.selected_vias().count(), 1);
        assert_eq!(board.selected_pads(PadClass::Pth).count(), 1);
        assert!(board.groups.is_empty());

        let out = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&out).unwrap();
        assert_eq!(back.pads[0].outline, board.pads[0].outline);
    }
}
