//! The ordered rule table.
//!
//! Each rule pairs a label with a predicate over a `FeatureSet`. Order is
//! policy: many predicates overlap and the engine takes the first one that
//! holds, so an earlier rule silently wins over any later rule whose
//! predicate it covers. Twenty-two later rules can never fire at all:
//!
//! | Earlier rule | Rules it hides |
//! |---|---|
//! | "9" | BREAKFAST, FAMILY |
//! | "3" | PERSON |
//! | "10" | REMEMBER |
//! | HELLO | LEARN |
//! | GOODBYE | MOTHER |
//! | EXCUSE ME | GOOD, NICE |
//! | SORRY, HELP | LOVE |
//! | WAIT | WHAT, BAD |
//! | SLEEP | EAT, DRINK |
//! | ANGRY, BOY | TOMORROW |
//! | SCARED | COLD, MORE |
//! | EXCITED | LIKE |
//! | CONFUSED | HOT, GIRL |
//! | YESTERDAY | WHY |
//! | LUNCH, WHO | UNDERSTAND |
//! | KNOW, FULL | FORGET |

use crate::features::FeatureSet;

/// One classification rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub when: fn(&FeatureSet) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish()
    }
}

// ── Hand shapes shared by several rules ────────────────────

impl FeatureSet {
    /// Index up, other three fingers curled.
    pub fn pointing(&self) -> bool {
        self.index.extended && self.middle.curled && self.ring.curled && self.pinky.curled
    }

    /// Index and middle up, ring and pinky curled.
    pub fn two_up(&self) -> bool {
        self.index.extended && self.middle.extended && self.ring.curled && self.pinky.curled
    }

    /// Middle, ring and pinky up.
    pub fn three_up(&self) -> bool {
        self.middle.extended && self.ring.extended && self.pinky.extended
    }

    /// Thumb and pinky out, other fingers not extended.
    pub fn y_hand(&self) -> bool {
        !self.index.extended
            && !self.middle.extended
            && !self.ring.extended
            && self.pinky.extended
            && self.thumb.extended
    }

    /// Thumb touching index, other three fingers curled.
    pub fn flat_o(&self) -> bool {
        self.contacts.thumb_index && self.middle.curled && self.ring.curled && self.pinky.curled
    }

    /// Only the middle finger extended.
    pub fn middle_only(&self) -> bool {
        self.middle.extended && !self.index.extended && !self.ring.extended && !self.pinky.extended
    }
}

// ── Table ──────────────────────────────────────────────────

macro_rules! rule {
    ($label:literal, $when:expr) => {
        Rule {
            label: $label,
            when: $when,
        }
    };
}

/// Number of rules in the table.
pub const RULE_COUNT: usize = 101;

/// The classification policy, evaluated top to bottom.
pub static RULES: [Rule; RULE_COUNT] = [
    // Numbers
    rule!("1", |f| f.pointing() && !f.thumb.extended && f.spacing.thumb_tucked),
    rule!("2", |f| f.two_up() && f.spacing.index_middle_spread && !f.thumb.extended),
    rule!("3", |f| f.two_up() && f.thumb.extended),
    rule!("4", |f| f.all_extended && !f.thumb.up && f.spacing.thumb_across),
    rule!("5", |f| {
        f.all_extended && f.thumb.extended && f.spacing.hand_spread && f.zone.mid && f.zone.center
    }),
    rule!("6", |f| {
        f.contacts.thumb_pinky && f.index.extended && f.middle.extended && f.ring.extended
    }),
    rule!("7", |f| {
        f.contacts.thumb_ring && f.index.extended && f.middle.extended && f.pinky.extended
    }),
    rule!("8", |f| {
        f.contacts.thumb_middle && f.index.extended && f.ring.extended && f.pinky.extended
    }),
    rule!("9", |f| f.contacts.thumb_index && f.three_up()),
    rule!("10", |f| f.thumb.up && f.fist && f.zone.high && f.zone.center),
    // Greetings
    rule!("HELLO", |f| f.all_extended && f.thumb.extended && f.zone.high && f.zone.right),
    rule!("GOODBYE", |f| f.all_extended && f.thumb.extended && f.zone.high && f.zone.left),
    rule!("THANK YOU", |f| f.all_extended && !f.thumb.extended && f.zone.high && f.zone.center),
    rule!("PLEASE", |f| f.all_extended && f.thumb.extended && f.zone.mid && f.zone.center),
    rule!("SORRY", |f| f.fist && f.thumb.up && f.zone.mid && f.zone.center),
    rule!("EXCUSE ME", |f| f.all_extended && !f.thumb.extended && f.zone.mid && f.zone.right),
    rule!("I LOVE YOU", |f| {
        f.index.extended
            && !f.middle.extended
            && !f.ring.extended
            && f.pinky.extended
            && f.thumb.extended
    }),
    rule!("YES", |f| f.fist && !f.thumb.extended && f.zone.high && f.zone.center),
    rule!("NO", |f| f.two_up() && (f.contacts.thumb_index || f.spacing.thumb_index_near)),
    // Actions
    rule!("HELP", |f| f.thumb.up && f.fist && f.zone.mid && !f.zone.center),
    rule!("STOP", |f| f.all_extended && f.spacing.fingers_tight && f.zone.mid && f.zone.left),
    rule!("GO", |f| f.pointing() && !f.thumb.extended && f.zone.mid && f.zone.right),
    rule!("COME", |f| f.pointing() && f.spacing.index_hooked && f.zone.mid && f.zone.center),
    rule!("WAIT", |f| f.all_extended && f.zone.low && f.zone.center),
    rule!("SIT", |f| f.two_up() && f.contacts.index_middle && f.zone.low && f.zone.center),
    rule!("STAND", |f| f.two_up() && f.contacts.index_middle && f.zone.mid && f.zone.left),
    rule!("WALK", |f| {
        f.two_up() && !f.thumb.extended && f.spacing.index_middle_apart && f.zone.low
    }),
    rule!("RUN", |f| f.pointing() && f.thumb.extended && f.zone.low && f.zone.right),
    rule!("SLEEP", |f| f.all_curved && f.zone.high && f.zone.center),
    rule!("WAKE UP", |f| f.flat_o() && f.zone.high && f.zone.left),
    // Food & drink
    rule!("EAT", |f| f.flat_o() && f.index.curled && f.zone.high && f.zone.center),
    rule!("DRINK", |f| {
        f.all_curved && f.c_shape && f.thumb.extended && f.zone.high && f.zone.center
    }),
    rule!("WATER", |f| {
        f.index.extended
            && f.middle.extended
            && f.ring.extended
            && f.pinky.curled
            && !f.thumb.extended
            && f.zone.high
            && f.zone.center
    }),
    rule!("MILK", |f| f.fist && !f.thumb.extended && f.zone.mid && f.zone.right),
    rule!("HUNGRY", |f| f.all_curved && f.c_shape && f.zone.mid && f.zone.center),
    rule!("FULL", |f| f.all_extended && !f.thumb.extended && f.zone.high && f.zone.right),
    rule!("FOOD", |f| f.flat_o() && f.zone.high && f.zone.right),
    rule!("BREAKFAST", |f| f.contacts.thumb_index && f.three_up() && f.zone.high),
    rule!("LUNCH", |f| f.pointing() && f.thumb.extended && f.zone.high && f.zone.center),
    rule!("DINNER", |f| f.pointing() && f.contacts.thumb_middle && f.zone.high),
    // Feelings
    rule!("HAPPY", |f| f.all_extended && f.thumb.extended && f.zone.mid && f.zone.right),
    rule!("SAD", |f| {
        f.all_extended && f.spacing.index_pointing_down && f.zone.high && f.zone.center
    }),
    rule!("ANGRY", |f| f.all_curved && !f.thumb.extended && f.zone.high && f.zone.right),
    rule!("SCARED", |f| f.fist && f.zone.mid && f.zone.center && !f.thumb.up),
    rule!("TIRED", |f| {
        f.all_extended && f.spacing.index_drooping && f.zone.mid && f.zone.center
    }),
    rule!("SICK", |f| f.middle_only() && f.zone.high),
    rule!("HURT", |f| f.pointing() && !f.thumb.extended && f.zone.mid && f.zone.center),
    rule!("LOVE", |f| f.fist && f.thumb.up && f.zone.mid && f.zone.left),
    rule!("EXCITED", |f| f.middle_only() && f.zone.mid),
    rule!("CONFUSED", |f| f.all_curved && f.zone.high && f.zone.left),
    rule!("SURPRISED", |f| {
        f.all_curved && f.c_shape && f.thumb.extended && f.zone.high && f.zone.right
    }),
    // People
    rule!("MOTHER", |f| f.all_extended && f.thumb.extended && f.zone.high && f.zone.left),
    rule!("FATHER", |f| f.all_extended && f.thumb.up && f.zone.high && !f.zone.center),
    rule!("FAMILY", |f| f.contacts.thumb_index && f.three_up() && f.zone.mid && f.zone.center),
    rule!("FRIEND", |f| {
        f.pointing() && f.thumb.extended && f.spacing.index_hooked && f.zone.mid
    }),
    rule!("BABY", |f| f.all_extended && !f.thumb.extended && f.zone.low && f.zone.left),
    rule!("BOY", |f| f.fist && f.thumb.extended && f.zone.high && f.zone.right),
    rule!("GIRL", |f| f.thumb.extended && f.fist && f.zone.high && f.zone.left),
    rule!("PERSON", |f| f.two_up() && f.spacing.index_pointing_down && f.thumb.extended),
    // Places
    rule!("HOME", |f| {
        f.contacts.thumb_index
            && !f.middle.extended
            && !f.ring.extended
            && !f.pinky.extended
            && f.zone.high
            && f.zone.right
    }),
    rule!("SCHOOL", |f| f.all_extended && !f.thumb.extended && f.zone.mid && f.zone.left),
    rule!("WORK", |f| f.fist && !f.thumb.extended && f.zone.mid && f.zone.left),
    rule!("STORE", |f| f.flat_o() && f.zone.mid && !f.zone.center),
    rule!("HOSPITAL", |f| f.two_up() && f.contacts.index_middle && f.zone.mid && f.zone.right),
    rule!("CHURCH", |f| f.all_curved && f.c_shape && f.zone.low && f.zone.right),
    // Time
    rule!("NOW", |f| f.y_hand() && f.zone.low),
    rule!("LATER", |f| f.pointing() && f.thumb.extended && f.zone.mid && f.zone.center),
    rule!("TODAY", |f| f.y_hand() && f.zone.mid && f.zone.center),
    rule!("TOMORROW", |f| f.thumb.up && f.fist && f.zone.high && f.zone.right),
    rule!("YESTERDAY", |f| f.y_hand() && f.zone.high),
    rule!("MORNING", |f| f.all_extended && f.thumb.extended && f.zone.low && f.zone.left),
    rule!("NIGHT", |f| f.all_extended && !f.thumb.extended && f.zone.low && f.zone.right),
    // Questions
    rule!("WHAT", |f| f.all_extended && f.thumb.extended && f.zone.low && f.zone.center),
    rule!("WHERE", |f| f.pointing() && !f.thumb.extended && f.zone.mid && f.zone.left),
    rule!("WHEN", |f| {
        f.pointing() && f.thumb.extended && f.zone.mid && !f.zone.center && !f.zone.left
    }),
    rule!("WHO", |f| f.pointing() && f.thumb.extended && f.zone.high && !f.zone.center),
    rule!("WHY", |f| f.y_hand() && f.zone.high && f.zone.center),
    rule!("HOW", |f| f.fist && f.thumb.up && f.zone.low && f.zone.center),
    // Descriptive
    rule!("GOOD", |f| f.all_extended && !f.thumb.extended && f.zone.mid && f.zone.right),
    rule!("BAD", |f| f.all_extended && !f.thumb.extended && f.zone.low && f.zone.center),
    rule!("BIG", |f| f.pointing() && f.thumb.extended && f.zone.mid && f.zone.left),
    rule!("SMALL", |f| {
        f.all_extended && f.spacing.fingers_narrow && f.zone.mid && f.zone.center
    }),
    rule!("HOT", |f| f.all_curved && f.c_shape && f.zone.high && f.zone.left),
    rule!("COLD", |f| {
        f.fist && !f.thumb.up && !f.thumb.extended && f.zone.mid && f.zone.center
    }),
    rule!("BEAUTIFUL", |f| f.all_extended && f.thumb.extended && f.zone.high && f.zone.center),
    rule!("NICE", |f| {
        f.all_extended && !f.thumb.extended && f.zone.mid && !f.zone.center && !f.zone.left
    }),
    // Common
    rule!("MORE", |f| f.flat_o() && f.index.curled && f.zone.mid && f.zone.center),
    rule!("WANT", |f| f.all_curved && !f.thumb.extended && f.zone.mid && f.zone.center),
    rule!("NEED", |f| f.pointing() && f.spacing.index_hooked && f.zone.low),
    rule!("LIKE", |f| f.thumb.extended && f.middle_only() && f.zone.mid),
    rule!("DON'T LIKE", |f| {
        f.thumb.extended
            && f.middle.extended
            && f.index.curled
            && f.ring.curled
            && f.pinky.curled
            && f.zone.low
    }),
    rule!("KNOW", |f| f.all_extended && !f.thumb.extended && f.zone.high && f.zone.left),
    rule!("DON'T KNOW", |f| f.all_extended && f.thumb.extended && f.zone.mid && f.zone.left),
    rule!("LEARN", |f| f.all_extended && f.thumb.extended && f.zone.high && f.zone.right),
    rule!("UNDERSTAND", |f| f.pointing() && f.thumb.extended && f.zone.high && f.thumb.up),
    rule!("THINK", |f| f.pointing() && !f.thumb.extended && f.zone.high && f.zone.center),
    rule!("REMEMBER", |f| f.thumb.up && f.fist && f.zone.high && f.zone.center),
    rule!("FORGET", |f| f.all_extended && !f.thumb.extended && f.zone.high && !f.zone.center),
    rule!("AGAIN", |f| f.all_curved && f.zone.low && f.zone.left),
    rule!("BATHROOM", |f| f.fist && f.spacing.thumb_between && f.zone.mid && f.zone.right),
    rule!("PLAY", |f| f.y_hand() && f.zone.mid && !f.zone.center),
];
