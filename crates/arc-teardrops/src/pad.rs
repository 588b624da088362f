use std::collections::HashMap;

use crate::board::{LayerSet, Pad, Via};
use crate::outline::Outline;

/// A pad or a via normalized into one shape: an outline polygon plus the
/// layers it exists on, with a cache of inflated outlines.
///
/// Instances are created fresh per generation run and discarded with it;
/// the offset cache is owned exclusively by the instance and is never
/// shared across pads.
#[derive(Debug, Clone)]
pub struct GenericPad {
    layers: LayerSet,
    outline: Outline,
    cache: HashMap<i64, Outline>,
}

impl GenericPad {
    pub fn from_pad(pad: &Pad) -> Self {
        Self {
            layers: pad.layers,
            outline: pad.outline.clone(),
            cache: HashMap::new(),
        }
    }

    /// A via behaves like a circular pad of the via's diameter centered at
    /// the via's center, on the via's layer set.
    pub fn from_via(via: &Via) -> Self {
        Self {
            layers: via.layers,
            outline: Outline::circle(via.center, via.width / 2),
            cache: HashMap::new(),
        }
    }

    pub fn layers(&self) -> LayerSet {
        self.layers
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The outline inflated by `amount` (positive outward, negative
    /// inward), computed on first request for that exact amount and cached
    /// for the lifetime of this instance.
    pub fn offset(&mut self, amount: i64) -> &Outline {
        self.cache
            .entry(amount)
            .or_insert_with(|| self.outline.inflate(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PadClass;
    use crate::geometry::Vec2;

    fn circular_pad(radius: i64) -> Pad {
        Pad {
            class: PadClass::Pth,
            layers: LayerSet::single(0),
            outline: Outline::circle(Vec2::new(0, 0), radius),
            selected: true,
        }
    }

    #[test]
    fn offset_is_cached_per_amount() {
        let mut pad = GenericPad::from_pad(&circular_pad(1000));
        let first = pad.offset(400).clone();
        let second = pad.offset(400).clone();
        // Bit-exact and computed once
        assert_eq!(first, second);
        assert_eq!(pad.cache.len(), 1);

        pad.offset(-100);
        pad.offset(400);
        assert_eq!(pad.cache.len(), 2);
    }

    #[test]
    fn negative_and_positive_amounts_are_distinct_keys() {
        let mut pad = GenericPad::from_pad(&circular_pad(1000));
        let grown = pad.offset(100).clone();
        let shrunk = pad.offset(-100).clone();
        assert_ne!(grown, shrunk);
    }

    #[test]
    fn instances_do_not_share_caches() {
        let mut a = GenericPad::from_pad(&circular_pad(1000));
        let mut b = GenericPad::from_pad(&circular_pad(1000));
        a.offset(400);
        assert!(b.cache.is_empty());
        b.offset(400);
        assert_eq!(a.cache.len(), 1);
        assert_eq!(b.cache.len(), 1);
    }

    #[test]
    fn via_synthesizes_circular_outline() {
        let via = Via {
            center: Vec2::new(300, -700),
            width: 2000,
            layers: LayerSet::single(0).with(31),
            selected: true,
        };
        let pad = GenericPad::from_via(&via);
        assert_eq!(
            *pad.outline(),
            Outline::circle(Vec2::new(300, -700), 1000)
        );
        assert!(pad.layers().contains(0));
        assert!(pad.layers().contains(31));
        assert!(!pad.layers().contains(1));
    }
}
