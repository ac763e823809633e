//! The closed sign vocabulary and the reference guide built from it.
//!
//! Descriptions and categories exist for the guide display only; the
//! classifier never reads them.

use std::fmt::Write;

/// Guide category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Numbers,
    Greetings,
    Actions,
    FoodDrink,
    Feelings,
    People,
    Places,
    Time,
    Questions,
    Descriptive,
    Common,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Self::Numbers,
        Self::Greetings,
        Self::Actions,
        Self::FoodDrink,
        Self::Feelings,
        Self::People,
        Self::Places,
        Self::Time,
        Self::Questions,
        Self::Descriptive,
        Self::Common,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numbers => "Numbers",
            Self::Greetings => "Greetings",
            Self::Actions => "Actions",
            Self::FoodDrink => "Food & Drink",
            Self::Feelings => "Feelings",
            Self::People => "People",
            Self::Places => "Places",
            Self::Time => "Time",
            Self::Questions => "Questions",
            Self::Descriptive => "Descriptive",
            Self::Common => "Common",
        }
    }

    /// Parse a category name, case-insensitively. Accepts the display
    /// name or a dashed form ("food-drink").
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL.iter().copied().find(|c| {
            let name = c.as_str().to_ascii_lowercase();
            name == wanted || name.replace(" & ", " ") == wanted
        })
    }
}

/// One vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sign {
    pub label: &'static str,
    pub description: &'static str,
    pub category: Category,
}

const fn sign(label: &'static str, description: &'static str, category: Category) -> Sign {
    Sign {
        label,
        description,
        category,
    }
}

/// Every label the classifier can emit.
pub static VOCABULARY: [Sign; 101] = [
    sign("1", "Index finger extended, thumb tucked", Category::Numbers),
    sign("2", "Index and middle fingers extended and spread apart", Category::Numbers),
    sign("3", "Thumb, index, and middle fingers extended", Category::Numbers),
    sign("4", "All fingers extended except thumb (thumb across palm)", Category::Numbers),
    sign("5", "All fingers and thumb extended and spread (open hand)", Category::Numbers),
    sign("6", "Thumb and pinky touching, other fingers extended", Category::Numbers),
    sign("7", "Thumb and ring finger touching, others extended", Category::Numbers),
    sign("8", "Thumb and middle finger touching, others extended", Category::Numbers),
    sign("9", "Thumb and index touching (OK sign), others extended", Category::Numbers),
    sign("10", "Thumbs up gesture held high", Category::Numbers),
    sign("HELLO", "Open hand wave, palm forward, hand high on right side", Category::Greetings),
    sign("GOODBYE", "Open hand wave, palm forward, hand high on left side", Category::Greetings),
    sign("THANK YOU", "Flat hand at chin level, move outward (hand high, centered)", Category::Greetings),
    sign("PLEASE", "Open hand with thumb, circular motion on chest (mid, centered)", Category::Greetings),
    sign("SORRY", "Fist with thumb up, circular motion on chest (mid, centered)", Category::Greetings),
    sign("EXCUSE ME", "Flat hand brushing motion (mid, right side)", Category::Greetings),
    sign("I LOVE YOU", "Thumb, index finger, and pinky extended (ILY sign)", Category::Greetings),
    sign("YES", "Fist nodding motion (hand high, centered)", Category::Greetings),
    sign("NO", "Index and middle fingers snapping to thumb", Category::Greetings),
    sign("HELP", "Thumbs up on palm (mid height, not centered)", Category::Actions),
    sign("STOP", "Flat hand with palm out, fingers together (mid, left)", Category::Actions),
    sign("GO", "Index finger pointing forward (mid, right side)", Category::Actions),
    sign("COME", "Index finger beckoning/bending toward you (mid, centered)", Category::Actions),
    sign("WAIT", "Open hands, palms facing up (low, centered)", Category::Actions),
    sign("SIT", "Two fingers together pointing down (low, centered)", Category::Actions),
    sign("STAND", "Two fingers together standing up (mid, left)", Category::Actions),
    sign("WALK", "Two fingers spread, walking motion (low position)", Category::Actions),
    sign("RUN", "L-shape hand moving forward (low, right)", Category::Actions),
    sign("SLEEP", "All fingers curved, hand high and centered (closing over face)", Category::Actions),
    sign("WAKE UP", "O-shape opening at eyes (high, left)", Category::Actions),
    sign("EAT", "Flat O (thumb and index touching), move to mouth (high, centered)", Category::FoodDrink),
    sign("DRINK", "C-shape hand tilting to mouth (high, centered)", Category::FoodDrink),
    sign("WATER", "W-hand (3 fingers extended) at chin (high, centered)", Category::FoodDrink),
    sign("MILK", "Fist squeezing motion (mid, right)", Category::FoodDrink),
    sign("HUNGRY", "C-shape hand moving down chest (mid, centered)", Category::FoodDrink),
    sign("FULL", "Flat hand across throat area (high, right)", Category::FoodDrink),
    sign("FOOD", "Flat O to mouth (high, right)", Category::FoodDrink),
    sign("BREAKFAST", "Eat sign + morning gesture (high position)", Category::FoodDrink),
    sign("LUNCH", "L-hand at mouth (high, centered)", Category::FoodDrink),
    sign("DINNER", "D-hand at mouth (high position)", Category::FoodDrink),
    sign("HAPPY", "Flat hands brushing upward on chest (mid, right)", Category::Feelings),
    sign("SAD", "Hands moving down in front of face (high, centered)", Category::Feelings),
    sign("ANGRY", "Claw hand in front of face (high, right)", Category::Feelings),
    sign("SCARED", "Fists in front of chest (mid, centered)", Category::Feelings),
    sign("TIRED", "Hands drooping on chest (mid, centered)", Category::Feelings),
    sign("SICK", "Middle finger extended at forehead (high)", Category::Feelings),
    sign("HURT", "Index fingers pointing toward each other (mid, centered)", Category::Feelings),
    sign("LOVE", "Fists crossed over chest, thumb up (mid, left)", Category::Feelings),
    sign("EXCITED", "Middle fingers flicking up on chest (mid)", Category::Feelings),
    sign("CONFUSED", "Claw hands at head (high, left)", Category::Feelings),
    sign("SURPRISED", "C-hands at eyes widening (high, right)", Category::Feelings),
    sign("MOTHER", "Open hand with thumb at chin (high, left)", Category::People),
    sign("FATHER", "Open hand with thumb at forehead (high, not centered)", Category::People),
    sign("FAMILY", "F-hands (thumb+index circle, others up) circling (mid, centered)", Category::People),
    sign("FRIEND", "Index fingers hooking together (mid position)", Category::People),
    sign("BABY", "Arms cradling motion (low, left)", Category::People),
    sign("BOY", "Grabbing cap brim gesture (high, right)", Category::People),
    sign("GIRL", "Thumb along jaw (high, left)", Category::People),
    sign("PERSON", "P-hands moving down (index+middle down, thumb out)", Category::People),
    sign("HOME", "Flat O at cheek (high, right)", Category::Places),
    sign("SCHOOL", "Clapping motion with flat hands (mid, left)", Category::Places),
    sign("WORK", "S-hands (fists) tapping (mid, left)", Category::Places),
    sign("STORE", "Flat O hands moving outward (mid, not centered)", Category::Places),
    sign("HOSPITAL", "H-hand (index+middle together) drawing cross (mid, right)", Category::Places),
    sign("CHURCH", "C-shape on back of hand (low, right)", Category::Places),
    sign("NOW", "Y-hands (thumb+pinky out) pointing down (low)", Category::Time),
    sign("LATER", "L-hand moving forward (mid, centered)", Category::Time),
    sign("TODAY", "Y-hands with emphasis (mid, centered)", Category::Time),
    sign("TOMORROW", "Thumb on cheek moving forward (high, right)", Category::Time),
    sign("YESTERDAY", "Y-hand at cheek moving back (high)", Category::Time),
    sign("MORNING", "Arm rising like sun (low, left)", Category::Time),
    sign("NIGHT", "Arm setting like sun (low, right)", Category::Time),
    sign("WHAT", "Open hands, palms up, shrugging gesture (low, centered)", Category::Questions),
    sign("WHERE", "Index finger pointing side to side (mid, left)", Category::Questions),
    sign("WHEN", "Index circling motion (mid, right area)", Category::Questions),
    sign("WHO", "L-hand at chin (high, not centered)", Category::Questions),
    sign("WHY", "Y-hand at forehead (high, centered)", Category::Questions),
    sign("HOW", "Fists together rolling (low, centered)", Category::Questions),
    sign("GOOD", "Flat hand from chin moving out (mid, right)", Category::Descriptive),
    sign("BAD", "Flat hand from chin moving down (low, centered)", Category::Descriptive),
    sign("BIG", "L-hands spreading apart (mid, left)", Category::Descriptive),
    sign("SMALL", "Flat hands close together (mid, centered)", Category::Descriptive),
    sign("HOT", "C-hand turning away from mouth (high, left)", Category::Descriptive),
    sign("COLD", "Fists shaking/shivering (mid, centered)", Category::Descriptive),
    sign("BEAUTIFUL", "Open hand circling face (high, centered)", Category::Descriptive),
    sign("NICE", "Flat hand sliding on palm (mid, right area)", Category::Descriptive),
    sign("MORE", "Flat O hands tapping together (mid, centered)", Category::Common),
    sign("WANT", "Claw hands pulling toward body (mid, centered)", Category::Common),
    sign("NEED", "X-hand (bent index) bending down (low)", Category::Common),
    sign("LIKE", "Thumb and middle finger extended from chest (mid)", Category::Common),
    sign("DON'T LIKE", "Thumb flicking away from chest (low)", Category::Common),
    sign("KNOW", "Flat hand at forehead (high, left)", Category::Common),
    sign("DON'T KNOW", "Hand flicking away from forehead (mid, left)", Category::Common),
    sign("LEARN", "Picking knowledge from palm to head (high, right)", Category::Common),
    sign("UNDERSTAND", "Index flicking up near forehead with thumb up (high)", Category::Common),
    sign("THINK", "Index finger at forehead (high, centered)", Category::Common),
    sign("REMEMBER", "Thumb from forehead down (high, centered)", Category::Common),
    sign("FORGET", "Hand wiping across forehead (high, not centered)", Category::Common),
    sign("AGAIN", "Bent hand into palm (low, left)", Category::Common),
    sign("BATHROOM", "T-hand (fist with thumb between fingers) shaking (mid, right)", Category::Common),
    sign("PLAY", "Y-hands shaking (mid, not centered)", Category::Common),
];

/// Look up a sign by label.
pub fn lookup(label: &str) -> Option<&'static Sign> {
    VOCABULARY.iter().find(|s| s.label == label)
}

/// Whether `label` belongs to the vocabulary.
pub fn contains(label: &str) -> bool {
    lookup(label).is_some()
}

/// Signs of one category, in vocabulary order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Sign> {
    VOCABULARY.iter().filter(move |s| s.category == category)
}

/// Render the reference guide, optionally limited to one category.
pub fn render_guide(filter: Option<Category>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ASL Signs Guide");
    let _ = writeln!(
        out,
        "{} signs supported. Position your hand as described.",
        VOCABULARY.len()
    );

    for category in Category::ALL {
        if filter.is_some_and(|f| f != category) {
            continue;
        }
        let signs: Vec<&Sign> = by_category(category).collect();
        if signs.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({} signs)", category.as_str(), signs.len());
        for s in signs {
            let _ = writeln!(out, "  {:<12} {}", s.label, s.description);
        }
    }
    out
}
