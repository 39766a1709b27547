//! Profession catalog.
//!
//! Unlock conditions live in the external career system; the engine
//! only owns the append-only unlock sequence on `PlayerState` and the
//! static catalog consumers display from.

/// Every account starts with general practice unlocked.
pub const DEFAULT_PROFESSION_ID: &str = "clinica_geral";

/// Static definition of a profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessionDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All professions the career system can unlock.
pub const ALL_PROFESSIONS: &[ProfessionDef] = &[
    ProfessionDef {
        id: DEFAULT_PROFESSION_ID,
        name: "General Practice",
        description: "The starting point of every physician",
    },
    ProfessionDef {
        id: "cardiology",
        name: "Cardiology",
        description: "Heart and vascular cases",
    },
    ProfessionDef {
        id: "neurology",
        name: "Neurology",
        description: "Brain and nervous system cases",
    },
    ProfessionDef {
        id: "pediatrics",
        name: "Pediatrics",
        description: "Child and adolescent medicine",
    },
    ProfessionDef {
        id: "emergency",
        name: "Emergency Medicine",
        description: "Trauma and acute care",
    },
    ProfessionDef {
        id: "surgery",
        name: "Surgery",
        description: "Operative cases",
    },
];

/// Looks up a profession by id.
pub fn get_profession(id: &str) -> Option<&'static ProfessionDef> {
    ALL_PROFESSIONS.iter().find(|p| p.id == id)
}
