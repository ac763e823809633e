//! Hand pose frames as delivered by the landmark detector.
//!
//! Models the 21 joints per hand in the detector's fixed order
//! (wrist, then thumb CMC→TIP, then MCP→TIP for each finger).
//! A `HandPose` is always exactly 21 finite landmarks; untrusted
//! sequences go through `HandPose::from_landmarks`.

use thiserror::Error;

// ── Joint definitions ──────────────────────────────────────

/// The 21 hand joints, in detector output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const JOINT_COUNT: usize = 21;

/// All joints in index order.
pub const JOINTS: [Joint; JOINT_COUNT] = [
    Joint::Wrist,
    Joint::ThumbCmc,
    Joint::ThumbMcp,
    Joint::ThumbIp,
    Joint::ThumbTip,
    Joint::IndexMcp,
    Joint::IndexPip,
    Joint::IndexDip,
    Joint::IndexTip,
    Joint::MiddleMcp,
    Joint::MiddlePip,
    Joint::MiddleDip,
    Joint::MiddleTip,
    Joint::RingMcp,
    Joint::RingPip,
    Joint::RingDip,
    Joint::RingTip,
    Joint::PinkyMcp,
    Joint::PinkyPip,
    Joint::PinkyDip,
    Joint::PinkyTip,
];

impl Joint {
    /// Convert joint enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// String representation for logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMcp => "index-mcp",
            Self::IndexPip => "index-pip",
            Self::IndexDip => "index-dip",
            Self::IndexTip => "index-tip",
            Self::MiddleMcp => "middle-mcp",
            Self::MiddlePip => "middle-pip",
            Self::MiddleDip => "middle-dip",
            Self::MiddleTip => "middle-tip",
            Self::RingMcp => "ring-mcp",
            Self::RingPip => "ring-pip",
            Self::RingDip => "ring-dip",
            Self::RingTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }
}

// ── Fingers ────────────────────────────────────────────────

/// The four non-thumb fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// (MCP, PIP, DIP, TIP) joints of this finger, palm to tip.
    pub fn joints(&self) -> [Joint; 4] {
        match self {
            Self::Index => [Joint::IndexMcp, Joint::IndexPip, Joint::IndexDip, Joint::IndexTip],
            Self::Middle => [Joint::MiddleMcp, Joint::MiddlePip, Joint::MiddleDip, Joint::MiddleTip],
            Self::Ring => [Joint::RingMcp, Joint::RingPip, Joint::RingDip, Joint::RingTip],
            Self::Pinky => [Joint::PinkyMcp, Joint::PinkyPip, Joint::PinkyDip, Joint::PinkyTip],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

// ── Handedness ─────────────────────────────────────────────

/// Which hand the detector believes it saw. Reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse detector handedness labels ("Left", "right", ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

// ── Landmark ───────────────────────────────────────────────

/// A single joint position. x/y are normalized to the frame (0.0-1.0,
/// y grows downward); z is the detector's relative depth.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another landmark in all three axes.
    pub fn distance(&self, other: &Landmark) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ── Errors ─────────────────────────────────────────────────

/// Why a landmark sequence was rejected as a hand pose.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    #[error("expected {expected} landmarks, got {got}")]
    LandmarkCount { expected: usize, got: usize },
    #[error("non-finite coordinate at {}", joint.as_str())]
    NonFinite { joint: Joint },
}

// ── Hand pose ──────────────────────────────────────────────

/// One detected hand in one camera frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandPose {
    landmarks: [Landmark; JOINT_COUNT],
}

impl HandPose {
    /// Build from an already well-formed landmark array.
    pub fn new(landmarks: [Landmark; JOINT_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Validate an untrusted landmark sequence.
    ///
    /// Rejects anything that is not exactly 21 landmarks, and any
    /// NaN/infinite coordinate.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, PoseError> {
        let array: [Landmark; JOINT_COUNT] =
            landmarks
                .try_into()
                .map_err(|_| PoseError::LandmarkCount {
                    expected: JOINT_COUNT,
                    got: landmarks.len(),
                })?;

        if let Some(joint) = JOINTS.iter().find(|j| !array[j.index()].is_finite()) {
            return Err(PoseError::NonFinite { joint: *joint });
        }

        Ok(Self::new(array))
    }

    /// Landmark for a given joint.
    pub fn landmark(&self, joint: Joint) -> &Landmark {
        &self.landmarks[joint.index()]
    }

    /// All landmarks in joint order.
    pub fn landmarks(&self) -> &[Landmark; JOINT_COUNT] {
        &self.landmarks
    }

    /// Euclidean distance between two joints on this hand.
    pub fn distance(&self, a: Joint, b: Joint) -> f64 {
        self.landmark(a).distance(self.landmark(b))
    }
}

// ── Test helpers ───────────────────────────────────────────

/// A pose with every joint at the given position.
#[cfg(test)]
pub(crate) fn make_pose(x: f64, y: f64) -> HandPose {
    HandPose::new([Landmark::new(x, y, 0.0); JOINT_COUNT])
}

#[cfg(test)]
pub(crate) fn set_joint(pose: &mut HandPose, joint: Joint, x: f64, y: f64, z: f64) {
    pose.landmarks[joint.index()] = Landmark::new(x, y, z);
}

// ── Tests ──────────────────────────────────────────────────
