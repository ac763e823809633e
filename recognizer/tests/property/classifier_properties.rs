use asl_recognizer::features::{self, Contacts, FeatureSet, FingerState, Spacing, ThumbState, Zone};
use asl_recognizer::hand::JOINT_COUNT;
use asl_recognizer::vocabulary;
use asl_recognizer::{Classifier, HandPose, Landmark, RuleTable, Thresholds};
use proptest::prelude::*;

fn landmark() -> impl Strategy<Value = Landmark> {
    (0.0f64..=1.0, 0.0f64..=1.0, -0.2f64..=0.2).prop_map(|(x, y, z)| Landmark::new(x, y, z))
}

fn pose() -> impl Strategy<Value = HandPose> {
    prop::collection::vec(landmark(), JOINT_COUNT)
        .prop_map(|lm| HandPose::from_landmarks(&lm).expect("21 finite landmarks"))
}

fn finger(bits: &[bool]) -> FingerState {
    FingerState {
        extended: bits[0],
        curled: bits[1],
        half_curled: bits[2],
    }
}

/// Arbitrary feature set, including combinations real poses never produce.
fn feature_set() -> impl Strategy<Value = FeatureSet> {
    prop::collection::vec(any::<bool>(), 43).prop_map(|b| FeatureSet {
        index: finger(&b[0..3]),
        middle: finger(&b[3..6]),
        ring: finger(&b[6..9]),
        pinky: finger(&b[9..12]),
        thumb: ThumbState {
            extended: b[12],
            up: b[13],
            down: b[14],
        },
        contacts: Contacts {
            thumb_index: b[15],
            thumb_middle: b[16],
            thumb_ring: b[17],
            thumb_pinky: b[18],
            index_middle: b[19],
            index_middle_crossed: b[20],
        },
        spacing: Spacing {
            thumb_tucked: b[21],
            thumb_index_near: b[22],
            index_middle_spread: b[23],
            index_middle_apart: b[24],
            hand_spread: b[25],
            fingers_tight: b[26],
            fingers_narrow: b[27],
            thumb_across: b[28],
            index_hooked: b[29],
            index_pointing_down: b[30],
            index_drooping: b[31],
            thumb_between: b[32],
        },
        all_extended: b[33],
        fist: b[34],
        all_curved: b[35],
        c_shape: b[36],
        zone: Zone {
            left: b[37],
            center: b[38],
            right: b[39],
            high: b[40],
            mid: b[41],
            low: b[42],
        },
    })
}

proptest! {
    #[test]
    fn classification_is_deterministic(p in pose()) {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&p), classifier.classify(&p));
        prop_assert_eq!(classifier.features(&p), classifier.features(&p));
    }

    #[test]
    fn labels_come_from_vocabulary(p in pose()) {
        if let Some(label) = Classifier::default().classify(&p) {
            prop_assert!(vocabulary::contains(label), "unknown label {}", label);
        }
    }

    #[test]
    fn first_match_heads_matches(f in feature_set()) {
        let table = RuleTable::standard();
        let head = table.matches(&f).first().map(|r| r.label);
        prop_assert_eq!(head, table.first_match(&f).map(|(_, r)| r.label));
    }

    #[test]
    fn winner_is_earliest_matching_rule(f in feature_set()) {
        let table = RuleTable::standard();
        if let Some((index, rule)) = table.first_match(&f) {
            prop_assert_eq!(table.position(rule.label), Some(index));
            for earlier in &table.rules()[..index] {
                prop_assert!(!(earlier.when)(&f), "{} should have won", earlier.label);
            }
        } else {
            prop_assert!(table.matches(&f).is_empty());
        }
    }

    #[test]
    fn extracted_fingers_are_consistent(p in pose()) {
        let f = features::extract(&p, &Thresholds::default());
        for state in [f.index, f.middle, f.ring, f.pinky] {
            prop_assert!(!(state.extended && state.curled));
        }
        if f.fist {
            prop_assert!(f.all_curved);
        }
        if f.all_extended {
            prop_assert!(!f.all_curved);
        }
    }

    #[test]
    fn extracted_zone_bands_are_consistent(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let z = Zone::locate(x, y, &Thresholds::default());
        prop_assert!(!(z.left && z.right));
        prop_assert!([z.high, z.mid, z.low].iter().filter(|b| **b).count() <= 1);
    }
}
