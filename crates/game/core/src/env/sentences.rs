//! Prompt and menu labels.
//!
//! Scenarios may override any subset of these; the rest keep the English
//! defaults below.

/// Labels shown next to each kind of choice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionLabels {
    pub observe: String,
    pub special_observe: String,
    pub collect: String,
    pub talk: String,
    pub special_talk: String,
    pub accuse: String,
    pub change_room: String,
    pub read_memo: String,
    pub help: String,
    pub none: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            observe: "Observe".into(),
            special_observe: "Look closer".into(),
            collect: "Take it".into(),
            talk: "Talk".into(),
            special_talk: "Ask about what you found".into(),
            accuse: "Accuse someone".into(),
            change_room: "Go to another room".into(),
            read_memo: "Read your notes".into(),
            help: "Help".into(),
            none: "Nothing".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sentences {
    /// Prompt of the top-level menu.
    pub know_more: String,
    /// Prompt of the per-entity sub-menu.
    pub which_action: String,
    /// Prompt of the movement sub-menu.
    pub change_room: String,
    /// Label used in place of the room name for a trapdoor neighbor.
    pub trapdoor: String,
    pub accuse_killer: String,
    pub accuse_weapon: String,
    /// Officer line when the clock runs out.
    pub time_is_up: String,
    pub memo_title: String,
    pub help_title: String,
    pub replay: String,
    pub actions: ActionLabels,
}

impl Default for Sentences {
    fn default() -> Self {
        Self {
            know_more: "What would you like to look into?".into(),
            which_action: "What do you do?".into(),
            change_room: "Where do you want to go?".into(),
            trapdoor: "The trapdoor".into(),
            accuse_killer: "Who is the murderer?".into(),
            accuse_weapon: "With which weapon?".into(),
            time_is_up: "Time is up. Tell me who did it.".into(),
            memo_title: "Notes".into(),
            help_title: "Help".into(),
            replay: "Do you want to play again?".into(),
            actions: ActionLabels::default(),
        }
    }
}
