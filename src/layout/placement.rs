//! Half-plane text anchoring
//!
//! Words on the left half of the circle would read upside down if they simply
//! followed their wedge's rotation. They are flipped 180° around their local
//! origin instead, and their anchor swaps so they still grow away from (or
//! toward) the center on the correct side.

use super::types::TextAnchor;

/// Which word of a wedge is being placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Inside the kite, reading toward the tip
    Inner,
    /// Beyond the kite tip
    Outer,
    /// Beyond the circle, halfway between two kite tips
    Sub,
}

/// How a word is anchored and oriented in its wedge-local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub anchor: TextAnchor,
    /// Rotate the text by 180° around the local origin
    pub flipped: bool,
}

impl TextPlacement {
    /// Horizontal offset from the kite tip, before any flip is applied
    pub fn x(&self, brim: f64) -> f64 {
        match self.anchor {
            TextAnchor::Start => brim,
            TextAnchor::End => -brim,
        }
    }
}

/// True for rotations on the left half of the circle, `[90, 270)`
pub fn is_left_half(rotation_degrees: f64) -> bool {
    let r = rotation_degrees.rem_euclid(360.0);
    (90.0..270.0).contains(&r)
}

/// Anchor and orientation for a word at the given rotation
///
/// Inner words end at the inner radius on the right half and start there
/// (flipped) on the left half. Outer and sub words do the opposite.
pub fn anchor_for(rotation_degrees: f64, role: TextRole) -> TextPlacement {
    let flipped = is_left_half(rotation_degrees);
    let anchor = match (role, flipped) {
        (TextRole::Inner, false) => TextAnchor::End,
        (TextRole::Inner, true) => TextAnchor::Start,
        (TextRole::Outer | TextRole::Sub, false) => TextAnchor::Start,
        (TextRole::Outer | TextRole::Sub, true) => TextAnchor::End,
    };
    TextPlacement { anchor, flipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_right_half_inner() {
        for r in [0.0, 45.0, 89.9, 270.0, 300.0, 359.0] {
            let p = anchor_for(r, TextRole::Inner);
            assert_eq!(p.anchor, TextAnchor::End, "rotation {r}");
            assert!(!p.flipped, "rotation {r}");
        }
    }

    #[test]
    fn test_left_half_inner() {
        for r in [90.0, 120.0, 180.0, 269.9] {
            let p = anchor_for(r, TextRole::Inner);
            assert_eq!(p.anchor, TextAnchor::Start, "rotation {r}");
            assert!(p.flipped, "rotation {r}");
        }
    }

    #[test]
    fn test_outer_and_sub_are_swapped() {
        for r in [0.0, 60.0, 90.0, 180.0, 240.0, 270.0, 330.0] {
            let inner = anchor_for(r, TextRole::Inner);
            for role in [TextRole::Outer, TextRole::Sub] {
                let p = anchor_for(r, role);
                assert_eq!(p.flipped, inner.flipped);
                assert_ne!(p.anchor, inner.anchor, "rotation {r} {role:?}");
            }
        }
    }

    #[test]
    fn test_mirror_rotations_differ_across_boundary() {
        // Mirrored rotations only land in different halves at the 90/270 boundary
        for r in [30.0, 60.0, 100.0, 150.0] {
            let a = anchor_for(r, TextRole::Inner);
            let b = anchor_for(360.0 - r, TextRole::Inner);
            let crosses = is_left_half(r) != is_left_half(360.0 - r);
            assert_eq!(a.anchor != b.anchor, crosses, "rotation {r}");
        }
        // 90 is left, its mirror 270 is right
        assert_ne!(
            anchor_for(90.0, TextRole::Inner).anchor,
            anchor_for(270.0, TextRole::Inner).anchor
        );
    }

    #[test]
    fn test_rotation_is_normalized() {
        assert_eq!(anchor_for(360.0, TextRole::Inner), anchor_for(0.0, TextRole::Inner));
        assert_eq!(anchor_for(-90.0, TextRole::Outer), anchor_for(270.0, TextRole::Outer));
        assert_eq!(anchor_for(450.0, TextRole::Sub), anchor_for(90.0, TextRole::Sub));
    }

    #[test]
    fn test_offset_follows_anchor() {
        let inner = anchor_for(0.0, TextRole::Inner);
        assert_eq!(inner.x(20.0), -20.0);
        let inner_flipped = anchor_for(180.0, TextRole::Inner);
        assert_eq!(inner_flipped.x(20.0), 20.0);
        let outer_flipped = anchor_for(180.0, TextRole::Outer);
        assert_eq!(outer_flipped.x(20.0), -20.0);
    }
}
