use serde::{Deserialize, Serialize};

/// One phase of the lemonade-making cycle.
///
/// Each step determines which prompt/art pair is shown and which
/// transition rule applies on the next tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Picking a lemon from the tree
    SelectLemon,
    /// Squeezing the picked lemon, repeatedly
    Squeeze,
    /// Drinking the finished lemonade
    Drink,
    /// Empty glass, ready to start over
    EmptyGlass,
}

impl Step {
    /// All steps in cycle order.
    pub const ALL: [Step; 4] = [
        Step::SelectLemon,
        Step::Squeeze,
        Step::Drink,
        Step::EmptyGlass,
    ];
}

/// Where a session currently is in the cycle.
///
/// A plain owned value: the current step plus the number of squeezes still
/// required while in [`Step::Squeeze`]. The fields are only readable from
/// outside the domain layer; the state is replaced, never mutated in place,
/// by the advance transition.
///
/// # Examples
///
/// ```
/// use lemonade::domain::{LemonadeState, Step};
///
/// let state = LemonadeState::default();
/// assert_eq!(state.step(), Step::SelectLemon);
/// assert_eq!(state.squeeze_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LemonadeState {
    step: Step,
    squeeze_count: u32,
}

impl Default for LemonadeState {
    fn default() -> Self {
        Self {
            step: Step::SelectLemon,
            squeeze_count: 0,
        }
    }
}

impl LemonadeState {
    pub(crate) fn new(step: Step, squeeze_count: u32) -> Self {
        Self {
            step,
            squeeze_count,
        }
    }

    /// Current step of the cycle.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Squeezes still required before the lemonade is ready.
    ///
    /// Only meaningful while the step is [`Step::Squeeze`]; zero otherwise.
    pub fn squeeze_count(&self) -> u32 {
        self.squeeze_count
    }
}

/// Display resources for a single step: the instruction shown to the user,
/// a short description of the pictured item, and the ASCII art itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResources {
    pub prompt: String,
    pub description: String,
    pub art: String,
}

impl StepResources {
    fn new(prompt: &str, description: &str, art: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            description: description.to_string(),
            art: art.to_string(),
        }
    }
}

/// Complete set of display resources, one entry per step.
///
/// All four entries are required, so a resource pack deserialized from JSON
/// is always total over [`Step`]. The built-in default carries the standard
/// prompts and art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub select: StepResources,
    pub squeeze: StepResources,
    pub drink: StepResources,
    pub empty_glass: StepResources,
}

impl Default for ResourceBundle {
    fn default() -> Self {
        Self {
            select: StepResources::new(
                "Tap the lemon tree to select a lemon",
                "Lemon tree",
                LEMON_TREE_ART,
            ),
            squeeze: StepResources::new(
                "Keep tapping the lemon to squeeze it",
                "Lemon",
                LEMON_ART,
            ),
            drink: StepResources::new(
                "Tap the lemonade to drink it",
                "Glass of lemonade",
                LEMONADE_ART,
            ),
            empty_glass: StepResources::new(
                "Tap the empty glass to start again",
                "Empty glass",
                EMPTY_GLASS_ART,
            ),
        }
    }
}

impl ResourceBundle {
    /// Looks up the resources for a step. Total over all four steps.
    pub fn for_step(&self, step: Step) -> &StepResources {
        match step {
            Step::SelectLemon => &self.select,
            Step::Squeeze => &self.squeeze,
            Step::Drink => &self.drink,
            Step::EmptyGlass => &self.empty_glass,
        }
    }
}

const LEMON_TREE_ART: &str = r#"        ,,,,,
     ,;;;;;;;;;,
   ,;;;;;;;;;;;;;,
  ;;;;;(o);;;;;;;;;
  ;;(o);;;;;;;(o);;;
   ;;;;;;;(o);;;;;'
     ';;;;;;;;;;'
        |  |
        |  |
      __|  |__"#;

const LEMON_ART: &str = r#"       _.-""-._
     .'        '.
    /            \
   ;              ;
   ;              ;
    \            /
     '._      _.'
        '-..-'"#;

const LEMONADE_ART: &str = r#"   |~~~~~~~~~~|
   |::::::::::|
   |:::o::::::|
   |::::::o:::|
    \::::::::/
     \::::::/
      |____|
     _|____|_"#;

const EMPTY_GLASS_ART: &str = r#"   |          |
   |          |
   |          |
   |          |
    \        /
     \      /
      |____|
     _|____|_"#;
