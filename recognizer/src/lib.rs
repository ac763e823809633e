//! ASL Recognizer - single-frame, rule-based sign classification from
//! 21-point hand landmarks.
//!
//! Pipeline: [`hand::HandPose`] -> [`features::extract`] ->
//! [`engine::Classifier`] (first matching rule in [`rules::RULES`]).

pub mod config;
pub mod engine;
pub mod features;
pub mod frame;
pub mod hand;
pub mod rules;
pub mod sexp;
pub mod vocabulary;

pub use config::{ConfigError, Thresholds};
pub use engine::{CandidateHand, Classifier, RuleTable, SignEvent};
pub use features::FeatureSet;
pub use hand::{HandPose, Handedness, Joint, Landmark, PoseError};
pub use vocabulary::{Category, Sign};
