//! Rule evaluation: first-match-wins over the ordered rule table.
//!
//! The classifier holds no per-frame state: it maps one hand pose to at
//! most one label. Hands in the same camera frame are classified
//! independently, in delivery order. Malformed candidates are dropped
//! before extraction.

use tracing::{debug, trace, warn};

use crate::config::{ConfigError, Thresholds};
use crate::features::{self, FeatureSet};
use crate::hand::{HandPose, Handedness, Landmark};
use crate::rules::{Rule, RULES};
use crate::sexp::escape_string;

// ── Rule table ─────────────────────────────────────────────

/// An ordered, immutable rule list.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    /// The published sign table.
    pub fn standard() -> Self {
        Self { rules: &RULES }
    }

    /// A table over an arbitrary rule list.
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose predicate holds, with its table index.
    pub fn first_match(&self, features: &FeatureSet) -> Option<(usize, &'static Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| (rule.when)(features))
    }

    /// Every rule whose predicate holds, in table order.
    pub fn matches(&self, features: &FeatureSet) -> Vec<&'static Rule> {
        self.rules
            .iter()
            .filter(|rule| (rule.when)(features))
            .collect()
    }

    /// Declared index of the rule for `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.label == label)
    }
}

// ── Events ─────────────────────────────────────────────────

/// A recognized sign for one hand in one camera frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SignEvent {
    /// Position of the hand in the frame's detection list.
    pub hand_index: usize,
    pub handedness: Option<Handedness>,
    pub label: &'static str,
}

impl SignEvent {
    /// Convert the event to an s-expression.
    pub fn to_sexp(&self) -> String {
        let handedness = self
            .handedness
            .map(|h| format!(":{}", h.as_str()))
            .unwrap_or_else(|| "nil".to_string());
        format!(
            "(:type :event :event :sign-detected :hand {} :handedness {} :label \"{}\")",
            self.hand_index,
            handedness,
            escape_string(self.label),
        )
    }
}

/// One hand as reported by the tracker, not yet validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateHand {
    pub handedness: Option<Handedness>,
    pub landmarks: Vec<Landmark>,
}

// ── Classifier ─────────────────────────────────────────────

/// Stateless sign classifier.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    thresholds: Thresholds,
    table: RuleTable,
}

impl Classifier {
    /// Classifier over the standard table. Rejects thresholds that fail
    /// [`Thresholds::validate`].
    pub fn new(thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            table: RuleTable::standard(),
        })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Use a different rule table.
    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Feature set for a pose under this classifier's thresholds.
    pub fn features(&self, pose: &HandPose) -> FeatureSet {
        features::extract(pose, &self.thresholds)
    }

    /// Classify an already extracted feature set.
    pub fn classify_features(&self, features: &FeatureSet) -> Option<&'static str> {
        match self.table.first_match(features) {
            Some((index, rule)) => {
                debug!(rule = index, label = rule.label, zone = %features.zone.describe(), "sign matched");
                Some(rule.label)
            }
            None => {
                trace!(zone = %features.zone.describe(), "no rule matched");
                None
            }
        }
    }

    /// Classify one hand pose.
    pub fn classify(&self, pose: &HandPose) -> Option<&'static str> {
        self.classify_features(&self.features(pose))
    }

    /// Classify every hand detected in one camera frame.
    ///
    /// Candidates that are not well-formed poses are skipped with a
    /// warning. Returns one event per recognized hand.
    pub fn process_frame(&self, hands: &[CandidateHand]) -> Vec<SignEvent> {
        let mut events = Vec::new();

        for (hand_index, candidate) in hands.iter().enumerate() {
            let pose = match HandPose::from_landmarks(&candidate.landmarks) {
                Ok(pose) => pose,
                Err(e) => {
                    warn!(hand = hand_index, "skipping hand: {}", e);
                    continue;
                }
            };

            if let Some(label) = self.classify(&pose) {
                events.push(SignEvent {
                    hand_index,
                    handedness: candidate.handedness,
                    label,
                });
            }
        }

        events
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Zone;
    use crate::hand::JOINT_COUNT;
    use crate::vocabulary;

    /// Pointing hand with the given zone, thumb folded in.
    fn pointing(zone: Zone) -> FeatureSet {
        let mut f = FeatureSet::default();
        f.index.extended = true;
        f.middle.curled = true;
        f.ring.curled = true;
        f.pinky.curled = true;
        f.all_curved = false;
        f.zone = zone;
        f
    }

    fn open_hand(thumb_extended: bool, zone: Zone) -> FeatureSet {
        let mut f = FeatureSet::default();
        f.index.extended = true;
        f.middle.extended = true;
        f.ring.extended = true;
        f.pinky.extended = true;
        f.all_extended = true;
        f.thumb.extended = thumb_extended;
        f.zone = zone;
        f
    }

    fn fist(zone: Zone) -> FeatureSet {
        let mut f = FeatureSet::default();
        f.index.curled = true;
        f.middle.curled = true;
        f.ring.curled = true;
        f.pinky.curled = true;
        f.fist = true;
        f.all_curved = true;
        f.zone = zone;
        f
    }

    fn zone(vertical: &str, horizontal: &[&str]) -> Zone {
        Zone {
            high: vertical == "high",
            mid: vertical == "mid",
            low: vertical == "low",
            left: horizontal.contains(&"left"),
            center: horizontal.contains(&"center"),
            right: horizontal.contains(&"right"),
        }
    }

    fn classify(f: &FeatureSet) -> Option<&'static str> {
        Classifier::default().classify_features(f)
    }

    #[test]
    fn test_one() {
        let mut f = pointing(Zone::default());
        f.spacing.thumb_tucked = true;
        assert_eq!(classify(&f), Some("1"));
    }

    #[test]
    fn test_two() {
        let mut f = FeatureSet::default();
        f.index.extended = true;
        f.middle.extended = true;
        f.ring.curled = true;
        f.pinky.curled = true;
        f.spacing.index_middle_spread = true;
        assert_eq!(classify(&f), Some("2"));
    }

    #[test]
    fn test_five() {
        let mut f = open_hand(true, zone("mid", &["center"]));
        f.spacing.hand_spread = true;
        assert_eq!(classify(&f), Some("5"));
    }

    #[test]
    fn test_ten() {
        let mut f = fist(zone("high", &["center"]));
        f.thumb.up = true;
        assert_eq!(classify(&f), Some("10"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify(&FeatureSet::default()), None);
        // open hand, thumb in, no zone at all
        assert_eq!(classify(&open_hand(false, Zone::default())), None);
    }

    #[test]
    fn test_first_match_returns_index() {
        let table = RuleTable::standard();
        let mut f = fist(zone("high", &["center"]));
        f.thumb.up = true;
        let (index, rule) = table.first_match(&f).unwrap();
        assert_eq!(index, 9);
        assert_eq!(rule.label, "10");
    }

    // ── Order sensitivity ──────────────────────────────────

    #[test]
    fn test_hello_shadows_learn() {
        let f = open_hand(true, zone("high", &["right"]));
        let labels: Vec<&str> = RuleTable::standard().matches(&f).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["HELLO", "LEARN"]);
        assert_eq!(classify(&f), Some("HELLO"));
    }

    #[test]
    fn test_goodbye_shadows_mother() {
        let f = open_hand(true, zone("high", &["left"]));
        let labels: Vec<&str> = RuleTable::standard().matches(&f).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["GOODBYE", "MOTHER"]);
        assert_eq!(classify(&f), Some("GOODBYE"));
    }

    #[test]
    fn test_ten_shadows_remember() {
        let mut f = fist(zone("high", &["center"]));
        f.thumb.up = true;
        let labels: Vec<&str> = RuleTable::standard().matches(&f).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["10", "YES", "SLEEP", "REMEMBER"]);
    }

    #[test]
    fn test_excuse_me_shadows_good() {
        let f = open_hand(false, zone("mid", &["right"]));
        let labels: Vec<&str> = RuleTable::standard().matches(&f).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["EXCUSE ME", "GOOD", "NICE"]);
        assert_eq!(classify(&f), Some("EXCUSE ME"));
    }

    #[test]
    fn test_five_before_please() {
        let mut f = open_hand(true, zone("mid", &["center"]));
        assert_eq!(classify(&f), Some("PLEASE"));
        f.spacing.hand_spread = true;
        assert_eq!(classify(&f), Some("5"));
    }

    #[test]
    fn test_eat_and_food_overlap() {
        // flat O with the index curled, in the band that is both center and right
        let mut f = fist(zone("high", &["center", "right"]));
        f.contacts.thumb_index = true;
        // keeps YES out of the way
        f.thumb.extended = true;

        let table = RuleTable::standard();
        let labels: Vec<&str> = table.matches(&f).iter().map(|r| r.label).collect();
        let eat = labels.iter().position(|l| *l == "EAT").unwrap();
        let food = labels.iter().position(|l| *l == "FOOD").unwrap();
        assert!(eat < food);

        // SLEEP is declared before both and covers them
        assert_eq!(labels[0], "SLEEP");
        assert_eq!(classify(&f), Some("SLEEP"));
    }

    #[test]
    fn test_food_when_index_not_curled() {
        let mut f = FeatureSet::default();
        f.contacts.thumb_index = true;
        f.middle.curled = true;
        f.ring.curled = true;
        f.pinky.curled = true;
        f.index.extended = true;
        f.zone = zone("high", &["right"]);
        assert_eq!(classify(&f), Some("FOOD"));
    }

    #[test]
    fn test_sleep_shadows_drink() {
        let mut f = FeatureSet::default();
        f.all_curved = true;
        f.c_shape = true;
        f.thumb.extended = true;
        f.zone = zone("high", &["center"]);
        assert_eq!(classify(&f), Some("SLEEP"));
        assert!(RuleTable::standard().matches(&f).iter().any(|r| r.label == "DRINK"));
    }

    #[test]
    fn test_confused_shadows_hot() {
        let mut f = FeatureSet::default();
        f.all_curved = true;
        f.c_shape = true;
        f.zone = zone("high", &["left"]);
        assert_eq!(classify(&f), Some("CONFUSED"));
    }

    fn shaped(build: impl FnOnce(&mut FeatureSet)) -> FeatureSet {
        with(FeatureSet::default(), build)
    }

    fn with(mut f: FeatureSet, edit: impl FnOnce(&mut FeatureSet)) -> FeatureSet {
        edit(&mut f);
        f
    }

    #[test]
    fn test_shadowed_rules() {
        let y_hand_high = shaped(|f| {
            f.index.curled = true;
            f.middle.curled = true;
            f.ring.curled = true;
            f.pinky.extended = true;
            f.thumb.extended = true;
            f.zone = zone("high", &["center"]);
        });
        let middle_only_mid = shaped(|f| {
            f.index.curled = true;
            f.middle.extended = true;
            f.ring.curled = true;
            f.pinky.curled = true;
            f.thumb.extended = true;
            f.zone = zone("mid", &["center"]);
        });
        let nine = |z: Zone| {
            shaped(|f| {
                f.contacts.thumb_index = true;
                f.index.curled = true;
                f.middle.extended = true;
                f.ring.extended = true;
                f.pinky.extended = true;
                f.zone = z;
            })
        };
        let three_pointing_down = shaped(|f| {
            f.index.extended = true;
            f.middle.extended = true;
            f.ring.curled = true;
            f.pinky.curled = true;
            f.thumb.extended = true;
            f.spacing.index_pointing_down = true;
        });
        // (features, winner, rule it hides)
        let cases = [
            (y_hand_high, "YESTERDAY", "WHY"),
            (with(fist(zone("mid", &["left"])), |f| f.thumb.up = true), "HELP", "LOVE"),
            (with(fist(zone("mid", &["left", "center"])), |f| f.thumb.up = true), "SORRY", "LOVE"),
            (fist(zone("mid", &["center"])), "SCARED", "COLD"),
            (with(fist(zone("mid", &["center"])), |f| f.contacts.thumb_index = true), "SCARED", "MORE"),
            (
                with(pointing(zone("high", &["center"])), |f| {
                    f.thumb.extended = true;
                    f.thumb.up = true;
                }),
                "LUNCH",
                "UNDERSTAND",
            ),
            (
                with(pointing(zone("high", &["right"])), |f| {
                    f.thumb.extended = true;
                    f.thumb.up = true;
                }),
                "WHO",
                "UNDERSTAND",
            ),
            (open_hand(false, zone("high", &["left"])), "KNOW", "FORGET"),
            (open_hand(false, zone("high", &["right"])), "FULL", "FORGET"),
            (open_hand(false, zone("mid", &["right"])), "EXCUSE ME", "NICE"),
            (with(fist(zone("high", &["left"])), |f| f.thumb.extended = true), "CONFUSED", "GIRL"),
            (with(fist(zone("high", &["right"])), |f| f.thumb.up = true), "ANGRY", "TOMORROW"),
            (
                with(fist(zone("high", &["right"])), |f| {
                    f.thumb.up = true;
                    f.thumb.extended = true;
                }),
                "BOY",
                "TOMORROW",
            ),
            (nine(zone("high", &["center"])), "9", "BREAKFAST"),
            (nine(zone("mid", &["center"])), "9", "FAMILY"),
            (three_pointing_down, "3", "PERSON"),
            (open_hand(true, zone("low", &["center"])), "WAIT", "WHAT"),
            (open_hand(false, zone("low", &["center"])), "WAIT", "BAD"),
            (middle_only_mid, "EXCITED", "LIKE"),
        ];

        let table = RuleTable::standard();
        for (f, winner, hidden) in cases {
            let labels: Vec<&str> = table.matches(&f).iter().map(|r| r.label).collect();
            assert_eq!(classify(&f), Some(winner), "matches: {:?}", labels);
            assert!(labels.contains(&hidden), "{} should also match: {:?}", hidden, labels);
            assert!(table.position(winner) < table.position(hidden));
        }
    }

    #[test]
    fn test_hurt_before_later() {
        let f = pointing(zone("mid", &["center"]));
        assert_eq!(classify(&f), Some("HURT"));

        let mut f = pointing(zone("mid", &["center"]));
        f.thumb.extended = true;
        assert_eq!(classify(&f), Some("LATER"));
    }

    #[test]
    fn test_go_vs_where_by_zone() {
        assert_eq!(classify(&pointing(zone("mid", &["right"]))), Some("GO"));
        assert_eq!(classify(&pointing(zone("mid", &["left"]))), Some("WHERE"));
    }

    #[test]
    fn test_overlapping_zone_takes_earlier_rule() {
        // left and center at once: THANK YOU (center) is declared before KNOW (left)
        let f = open_hand(false, zone("high", &["left", "center"]));
        assert_eq!(classify(&f), Some("THANK YOU"));
    }

    #[test]
    fn test_matches_head_equals_first_match() {
        let samples = [
            open_hand(true, zone("low", &["left"])),
            open_hand(false, zone("low", &["right"])),
            pointing(zone("high", &["center"])),
            fist(zone("mid", &["left"])),
            FeatureSet::default(),
        ];
        let table = RuleTable::standard();
        for f in &samples {
            let head = table.matches(f).first().map(|r| r.label);
            assert_eq!(head, table.first_match(f).map(|(_, r)| r.label));
        }
    }

    #[test]
    fn test_position() {
        let table = RuleTable::standard();
        assert_eq!(table.position("1"), Some(0));
        assert_eq!(table.position("PLAY"), Some(100));
        assert!(table.position("EAT") < table.position("FOOD"));
        assert_eq!(table.position("UNKNOWN"), None);
        assert_eq!(table.len(), 101);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_custom_table_order_wins() {
        static FIRST_A: [Rule; 2] = [
            Rule { label: "A", when: |f| f.fist },
            Rule { label: "B", when: |f| f.fist },
        ];
        static FIRST_B: [Rule; 2] = [
            Rule { label: "B", when: |f| f.fist },
            Rule { label: "A", when: |f| f.fist },
        ];
        let f = fist(Zone::default());
        let a = Classifier::default().with_table(RuleTable::new(&FIRST_A));
        let b = Classifier::default().with_table(RuleTable::new(&FIRST_B));
        assert_eq!(a.classify_features(&f), Some("A"));
        assert_eq!(b.classify_features(&f), Some("B"));
    }

    #[test]
    fn test_labels_in_vocabulary() {
        for rule in RuleTable::standard().rules() {
            assert!(vocabulary::contains(rule.label), "{} not in vocabulary", rule.label);
        }
    }

    // ── Frame processing ───────────────────────────────────

    fn flat_hand(wrist: (f64, f64)) -> Vec<Landmark> {
        let mut lm = vec![Landmark::new(wrist.0, wrist.1, 0.0); JOINT_COUNT];
        // thumb straight out to the side
        lm[1] = Landmark::new(wrist.0 - 0.04, wrist.1 - 0.04, 0.0);
        lm[2] = Landmark::new(wrist.0 - 0.07, wrist.1 - 0.07, 0.0);
        lm[3] = Landmark::new(wrist.0 - 0.11, wrist.1 - 0.09, 0.0);
        lm[4] = Landmark::new(wrist.0 - 0.15, wrist.1 - 0.10, 0.0);
        // fingers straight up, 0.03 apart
        for f in 0..4 {
            let x = wrist.0 - 0.045 + f as f64 * 0.03;
            let base = 5 + f * 4;
            lm[base] = Landmark::new(x, wrist.1 - 0.10, 0.0);
            lm[base + 1] = Landmark::new(x, wrist.1 - 0.14, 0.0);
            lm[base + 2] = Landmark::new(x, wrist.1 - 0.17, 0.0);
            lm[base + 3] = Landmark::new(x, wrist.1 - 0.20, 0.0);
        }
        lm
    }

    #[test]
    fn test_process_frame_skips_malformed() {
        let classifier = Classifier::default();
        let hands = vec![
            CandidateHand {
                handedness: Some(Handedness::Left),
                landmarks: vec![Landmark::new(0.5, 0.5, 0.0); 18],
            },
            CandidateHand {
                handedness: Some(Handedness::Right),
                landmarks: flat_hand((0.8, 0.3)),
            },
        ];
        let events = classifier.process_frame(&hands);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].hand_index, 1);
        assert_eq!(events[0].handedness, Some(Handedness::Right));
        assert_eq!(events[0].label, "HELLO");
    }

    #[test]
    fn test_process_frame_hands_independent() {
        let classifier = Classifier::default();
        let hands = vec![
            CandidateHand {
                handedness: None,
                landmarks: flat_hand((0.2, 0.3)),
            },
            CandidateHand {
                handedness: None,
                landmarks: flat_hand((0.8, 0.3)),
            },
        ];
        let labels: Vec<&str> = classifier.process_frame(&hands).iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["GOODBYE", "HELLO"]);
    }

    #[test]
    fn test_process_frame_empty() {
        assert!(Classifier::default().process_frame(&[]).is_empty());
    }

    #[test]
    fn test_sign_event_sexp() {
        let event = SignEvent {
            hand_index: 0,
            handedness: Some(Handedness::Right),
            label: "DON'T KNOW",
        };
        assert_eq!(
            event.to_sexp(),
            "(:type :event :event :sign-detected :hand 0 :handedness :right :label \"DON'T KNOW\")"
        );

        let event = SignEvent {
            hand_index: 1,
            handedness: None,
            label: "5",
        };
        assert!(event.to_sexp().contains(":hand 1 :handedness nil :label \"5\""));
    }
}
