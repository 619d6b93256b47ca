//! Group role classification.
//!
//! Maps a (class, specialization) pair to the role the character fills in a
//! group. The class picks the branch and the specialization picks the
//! exception within it; anything unrecognized is `Unknown` rather than an
//! error so one odd payload never blocks a refresh.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tank,
    Healer,
    Melee,
    Ranged,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Healer => "Healer",
            Role::Melee => "Melee",
            Role::Ranged => "Ranged",
            Role::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a character's group role from its class and active spec.
pub fn role_for(class: &str, spec: &str) -> Role {
    match class {
        "Warrior" => match spec {
            "Protection" => Role::Tank,
            _ => Role::Melee,
        },
        "Paladin" => match spec {
            "Protection" => Role::Tank,
            "Holy" => Role::Healer,
            _ => Role::Melee,
        },
        "Druid" => match spec {
            "Guardian" => Role::Tank,
            "Restoration" => Role::Healer,
            "Balance" => Role::Ranged,
            _ => Role::Melee,
        },
        "Priest" => match spec {
            "Discipline" | "Holy" => Role::Healer,
            _ => Role::Ranged,
        },
        "Mage" | "Warlock" | "Hunter" => Role::Ranged,
        "Shaman" => match spec {
            "Restoration" => Role::Healer,
            "Elemental" => Role::Ranged,
            _ => Role::Melee,
        },
        "Monk" => match spec {
            "Brewmaster" => Role::Tank,
            "Mistweaver" => Role::Healer,
            _ => Role::Melee,
        },
        "Demon Hunter" => match spec {
            "Vengeance" => Role::Tank,
            _ => Role::Melee,
        },
        "Death Knight" => match spec {
            "Blood" => Role::Tank,
            _ => Role::Melee,
        },
        "Rogue" => Role::Melee,
        "Evoker" => match spec {
            "Preservation" => Role::Healer,
            _ => Role::Ranged,
        },
        _ => Role::Unknown,
    }
}
