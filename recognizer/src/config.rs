//! Classification thresholds.
//!
//! Every numeric constant the feature extractor compares against lives
//! here. Defaults reproduce the reference rule set; a plist file can
//! override any subset of them:
//!
//! ```text
//! (:thumb-index-touch 0.045 :zone-left 0.3)
//! ```

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::sexp;

/// Errors raised while loading or validating thresholds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed s-expression: {0}")]
    Parse(#[from] lexpr::parse::Error),
    #[error("value for :{key} is not a number")]
    NotANumber { key: String },
    #[error("invalid threshold :{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Thresholds for feature extraction, in normalized frame units.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Horizontal offset of thumb tip from thumb MCP for "thumb extended".
    pub thumb_extension: f64,
    /// Drop of thumb tip below thumb MCP for "thumb down".
    pub thumb_down_drop: f64,
    /// Allowance below the PIP joint for "half curled".
    pub half_curl_margin: f64,
    /// Thumb tip to index tip distance for contact.
    pub thumb_index_touch: f64,
    /// Thumb tip to middle tip distance for contact.
    pub thumb_middle_touch: f64,
    /// Thumb tip to ring tip distance for contact.
    pub thumb_ring_touch: f64,
    /// Thumb tip to pinky tip distance for contact.
    pub thumb_pinky_touch: f64,
    /// Index tip to middle tip distance for contact.
    pub index_middle_touch: f64,
    /// Horizontal offset between index and middle tips for "crossed".
    pub index_middle_cross: f64,
    /// Thumb tip to index tip distance for "near" (looser than touch).
    pub thumb_index_near: f64,
    /// Thumb tip to index MCP distance for "thumb tucked".
    pub thumb_tucked: f64,
    /// Index tip to middle tip distance for a V spread.
    pub index_middle_spread: f64,
    /// Index tip to middle tip distance for a walking spread.
    pub index_middle_apart: f64,
    /// Index tip to pinky tip distance for a fully spread hand.
    pub hand_spread: f64,
    /// Index tip to pinky tip distance for fingers held together.
    pub fingers_tight: f64,
    /// Index tip to pinky tip distance for a narrow flat hand.
    pub fingers_narrow: f64,
    /// Lower bound (exclusive) of thumb-index distance for a C shape.
    pub c_shape_min: f64,
    /// Upper bound (exclusive) of thumb-index distance for a C shape.
    pub c_shape_max: f64,
    /// Wrist x below this is the left zone.
    pub zone_left: f64,
    /// Wrist x above this is the right zone.
    pub zone_right: f64,
    /// Wrist x within this distance of 0.5 is the center zone.
    pub zone_center_half_width: f64,
    /// Wrist y below this is the high zone.
    pub zone_high: f64,
    /// Wrist y above this is the low zone.
    pub zone_low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            thumb_extension: 0.05,
            thumb_down_drop: 0.1,
            half_curl_margin: 0.05,
            thumb_index_touch: 0.05,
            thumb_middle_touch: 0.06,
            thumb_ring_touch: 0.06,
            thumb_pinky_touch: 0.06,
            index_middle_touch: 0.04,
            index_middle_cross: 0.02,
            thumb_index_near: 0.06,
            thumb_tucked: 0.08,
            index_middle_spread: 0.06,
            index_middle_apart: 0.05,
            hand_spread: 0.15,
            fingers_tight: 0.12,
            fingers_narrow: 0.10,
            c_shape_min: 0.08,
            c_shape_max: 0.18,
            zone_left: 0.35,
            zone_right: 0.65,
            zone_center_half_width: 0.2,
            zone_high: 0.35,
            zone_low: 0.65,
        }
    }
}

impl Thresholds {
    /// Every threshold with its plist key, in declaration order.
    pub fn entries(&self) -> [(&'static str, f64); 23] {
        [
            ("thumb-extension", self.thumb_extension),
            ("thumb-down-drop", self.thumb_down_drop),
            ("half-curl-margin", self.half_curl_margin),
            ("thumb-index-touch", self.thumb_index_touch),
            ("thumb-middle-touch", self.thumb_middle_touch),
            ("thumb-ring-touch", self.thumb_ring_touch),
            ("thumb-pinky-touch", self.thumb_pinky_touch),
            ("index-middle-touch", self.index_middle_touch),
            ("index-middle-cross", self.index_middle_cross),
            ("thumb-index-near", self.thumb_index_near),
            ("thumb-tucked", self.thumb_tucked),
            ("index-middle-spread", self.index_middle_spread),
            ("index-middle-apart", self.index_middle_apart),
            ("hand-spread", self.hand_spread),
            ("fingers-tight", self.fingers_tight),
            ("fingers-narrow", self.fingers_narrow),
            ("c-shape-min", self.c_shape_min),
            ("c-shape-max", self.c_shape_max),
            ("zone-left", self.zone_left),
            ("zone-right", self.zone_right),
            ("zone-center-half-width", self.zone_center_half_width),
            ("zone-high", self.zone_high),
            ("zone-low", self.zone_low),
        ]
    }

    /// Mutable access to a threshold by plist key.
    fn field_mut(&mut self, key: &str) -> Option<&mut f64> {
        let field = match key {
            "thumb-extension" => &mut self.thumb_extension,
            "thumb-down-drop" => &mut self.thumb_down_drop,
            "half-curl-margin" => &mut self.half_curl_margin,
            "thumb-index-touch" => &mut self.thumb_index_touch,
            "thumb-middle-touch" => &mut self.thumb_middle_touch,
            "thumb-ring-touch" => &mut self.thumb_ring_touch,
            "thumb-pinky-touch" => &mut self.thumb_pinky_touch,
            "index-middle-touch" => &mut self.index_middle_touch,
            "index-middle-cross" => &mut self.index_middle_cross,
            "thumb-index-near" => &mut self.thumb_index_near,
            "thumb-tucked" => &mut self.thumb_tucked,
            "index-middle-spread" => &mut self.index_middle_spread,
            "index-middle-apart" => &mut self.index_middle_apart,
            "hand-spread" => &mut self.hand_spread,
            "fingers-tight" => &mut self.fingers_tight,
            "fingers-narrow" => &mut self.fingers_narrow,
            "c-shape-min" => &mut self.c_shape_min,
            "c-shape-max" => &mut self.c_shape_max,
            "zone-left" => &mut self.zone_left,
            "zone-right" => &mut self.zone_right,
            "zone-center-half-width" => &mut self.zone_center_half_width,
            "zone-high" => &mut self.zone_high,
            "zone-low" => &mut self.zone_low,
            _ => return None,
        };
        Some(field)
    }

    /// Parse a threshold plist. Missing keys keep their defaults.
    pub fn from_sexp(raw: &str) -> Result<Self, ConfigError> {
        let value = lexpr::from_str(raw)?;
        let mut thresholds = Self::default();

        for (key, val) in sexp::plist_entries(&value) {
            let number = val.and_then(sexp::as_float);
            let Some(field) = thresholds.field_mut(&key) else {
                warn!("ignoring unknown threshold :{}", key);
                continue;
            };
            let number = number.ok_or_else(|| ConfigError::NotANumber { key: key.clone() })?;
            *field = number;
            debug!("threshold :{} = {}", key, number);
        }

        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a plist file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_sexp(&raw)
    }

    /// Reject values that would make extraction meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, v) in self.entries() {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be a non-negative number, got {v}"),
                });
            }
        }
        if self.c_shape_min >= self.c_shape_max {
            return Err(ConfigError::Invalid {
                key: "c-shape-min",
                reason: format!("must be below c-shape-max ({})", self.c_shape_max),
            });
        }
        if self.zone_left > self.zone_right {
            return Err(ConfigError::Invalid {
                key: "zone-left",
                reason: format!("must not exceed zone-right ({})", self.zone_right),
            });
        }
        if self.zone_high > self.zone_low {
            return Err(ConfigError::Invalid {
                key: "zone-high",
                reason: format!("must not exceed zone-low ({})", self.zone_low),
            });
        }
        Ok(())
    }

    /// Generate s-expression listing every threshold.
    pub fn to_sexp(&self) -> String {
        let body: Vec<String> = self
            .entries()
            .iter()
            .map(|(key, v)| format!(":{} {:.3}", key, v))
            .collect();
        format!("({})", body.join(" "))
    }
}
