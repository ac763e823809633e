//! Feature extraction: per-frame geometric predicates from raw landmarks.
//!
//! Every predicate is a static threshold comparison on one frame's
//! coordinates. There are no velocities and no history: two identical
//! poses always produce identical feature sets.
//!
//! Image y grows downward, so "above" means a smaller y.

use tracing::trace;

use crate::config::Thresholds;
use crate::hand::{Finger, HandPose, Joint};

// ── Finger and thumb state ─────────────────────────────────

/// Extension state of one non-thumb finger.
///
/// `extended` and `curled` are strict opposites except when the tip
/// sits exactly level with the PIP joint, where both are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerState {
    pub extended: bool,
    pub curled: bool,
    pub half_curled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbState {
    /// Tip pushed sideways away from the thumb MCP.
    pub extended: bool,
    /// Tip above both the thumb MCP and the index MCP.
    pub up: bool,
    /// Tip well below the thumb MCP.
    pub down: bool,
}

// ── Contacts and spacing ───────────────────────────────────

/// Fingertip contact predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub thumb_index: bool,
    pub thumb_middle: bool,
    pub thumb_ring: bool,
    pub thumb_pinky: bool,
    pub index_middle: bool,
    pub index_middle_crossed: bool,
}

/// Distance and posture predicates that individual signs depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    /// Thumb tip close to the index knuckle.
    pub thumb_tucked: bool,
    /// Thumb tip near the index tip, looser than a touch.
    pub thumb_index_near: bool,
    /// Index and middle tips spread in a V.
    pub index_middle_spread: bool,
    /// Index and middle tips apart, looser than a V.
    pub index_middle_apart: bool,
    /// Index and pinky tips far apart (open spread hand).
    pub hand_spread: bool,
    /// Index and pinky tips held together.
    pub fingers_tight: bool,
    /// Index and pinky tips held very close.
    pub fingers_narrow: bool,
    /// Thumb tip below its own MCP (folded across the palm).
    pub thumb_across: bool,
    /// Index tip below its DIP joint.
    pub index_hooked: bool,
    /// Index tip below its MCP joint.
    pub index_pointing_down: bool,
    /// Index tip below the middle tip.
    pub index_drooping: bool,
    /// Thumb tip horizontally between the index and middle MCPs.
    pub thumb_between: bool,
}

// ── Zone ───────────────────────────────────────────────────

/// Coarse position of the wrist in the frame.
///
/// Flags are independent: the horizontal bands overlap (x in
/// (0.30, 0.35) is both left and center) and a wrist exactly on a
/// vertical boundary is in no vertical band at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zone {
    pub left: bool,
    pub center: bool,
    pub right: bool,
    pub high: bool,
    pub mid: bool,
    pub low: bool,
}

impl Zone {
    /// Classify a normalized position into zone flags.
    pub fn locate(x: f64, y: f64, t: &Thresholds) -> Self {
        Self {
            left: x < t.zone_left,
            center: (x - 0.5).abs() < t.zone_center_half_width,
            right: x > t.zone_right,
            high: y < t.zone_high,
            mid: y > t.zone_high && y < t.zone_low,
            low: y > t.zone_low,
        }
    }

    /// Compact tag for logging, e.g. "high+left+center".
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (self.high, "high"),
            (self.mid, "mid"),
            (self.low, "low"),
            (self.left, "left"),
            (self.center, "center"),
            (self.right, "right"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect();
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join("+")
        }
    }
}

// ── Feature set ────────────────────────────────────────────

/// Everything the rule table may inspect about one hand in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub index: FingerState,
    pub middle: FingerState,
    pub ring: FingerState,
    pub pinky: FingerState,
    pub thumb: ThumbState,
    pub contacts: Contacts,
    pub spacing: Spacing,
    /// All four fingers extended.
    pub all_extended: bool,
    /// All four fingers curled.
    pub fist: bool,
    /// No finger extended. Also true for a fist.
    pub all_curved: bool,
    /// Thumb and index tips held apart in a C.
    pub c_shape: bool,
    pub zone: Zone,
}

impl FeatureSet {
    /// State of one finger.
    pub fn finger(&self, finger: Finger) -> &FingerState {
        match finger {
            Finger::Index => &self.index,
            Finger::Middle => &self.middle,
            Finger::Ring => &self.ring,
            Finger::Pinky => &self.pinky,
        }
    }
}

fn finger_state(pose: &HandPose, finger: Finger, t: &Thresholds) -> FingerState {
    let [_, pip, dip, tip] = finger.joints();
    let tip_y = pose.landmark(tip).y;
    let pip_y = pose.landmark(pip).y;
    let dip_y = pose.landmark(dip).y;
    FingerState {
        extended: tip_y < pip_y,
        curled: tip_y > pip_y,
        half_curled: tip_y > dip_y && tip_y < pip_y + t.half_curl_margin,
    }
}

/// Derive the feature set for one hand pose.
pub fn extract(pose: &HandPose, t: &Thresholds) -> FeatureSet {
    let lm = |j: Joint| pose.landmark(j);
    let dist = |a: Joint, b: Joint| pose.distance(a, b);

    let index = finger_state(pose, Finger::Index, t);
    let middle = finger_state(pose, Finger::Middle, t);
    let ring = finger_state(pose, Finger::Ring, t);
    let pinky = finger_state(pose, Finger::Pinky, t);

    let thumb_tip = lm(Joint::ThumbTip);
    let thumb_mcp = lm(Joint::ThumbMcp);
    let thumb = ThumbState {
        extended: thumb_tip.x < thumb_mcp.x - t.thumb_extension
            || thumb_tip.x > thumb_mcp.x + t.thumb_extension,
        up: thumb_tip.y < thumb_mcp.y && thumb_tip.y < lm(Joint::IndexMcp).y,
        down: thumb_tip.y > thumb_mcp.y + t.thumb_down_drop,
    };

    let thumb_index = dist(Joint::ThumbTip, Joint::IndexTip);
    let index_middle = dist(Joint::IndexTip, Joint::MiddleTip);
    let index_pinky = dist(Joint::IndexTip, Joint::PinkyTip);
    let index_tip = lm(Joint::IndexTip);
    let middle_tip = lm(Joint::MiddleTip);

    let contacts = Contacts {
        thumb_index: thumb_index < t.thumb_index_touch,
        thumb_middle: dist(Joint::ThumbTip, Joint::MiddleTip) < t.thumb_middle_touch,
        thumb_ring: dist(Joint::ThumbTip, Joint::RingTip) < t.thumb_ring_touch,
        thumb_pinky: dist(Joint::ThumbTip, Joint::PinkyTip) < t.thumb_pinky_touch,
        index_middle: index_middle < t.index_middle_touch,
        index_middle_crossed: index_tip.x > middle_tip.x + t.index_middle_cross
            || index_tip.x < middle_tip.x - t.index_middle_cross,
    };

    let spacing = Spacing {
        thumb_tucked: dist(Joint::ThumbTip, Joint::IndexMcp) < t.thumb_tucked,
        thumb_index_near: thumb_index < t.thumb_index_near,
        index_middle_spread: index_middle > t.index_middle_spread,
        index_middle_apart: index_middle > t.index_middle_apart,
        hand_spread: index_pinky > t.hand_spread,
        fingers_tight: index_pinky < t.fingers_tight,
        fingers_narrow: index_pinky < t.fingers_narrow,
        thumb_across: thumb_tip.y > thumb_mcp.y,
        index_hooked: index_tip.y > lm(Joint::IndexDip).y,
        index_pointing_down: index_tip.y > lm(Joint::IndexMcp).y,
        index_drooping: index_tip.y > middle_tip.y,
        thumb_between: thumb_tip.x > lm(Joint::IndexMcp).x && thumb_tip.x < lm(Joint::MiddleMcp).x,
    };

    let fingers = [index, middle, ring, pinky];
    let wrist = lm(Joint::Wrist);

    let features = FeatureSet {
        index,
        middle,
        ring,
        pinky,
        thumb,
        contacts,
        spacing,
        all_extended: fingers.iter().all(|f| f.extended),
        fist: fingers.iter().all(|f| f.curled),
        all_curved: fingers.iter().all(|f| !f.extended),
        c_shape: thumb_index > t.c_shape_min && thumb_index < t.c_shape_max,
        zone: Zone::locate(wrist.x, wrist.y, t),
    };

    trace!(
        zone = %features.zone.describe(),
        thumb_index,
        index_middle,
        index_pinky,
        "extracted features"
    );

    features
}

// ── Tests ──────────────────────────────────────────────────
