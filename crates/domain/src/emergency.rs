//! Emergency helplines shown on every page.

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub number: &'static str,
    pub label_en: &'static str,
    pub label_ur: &'static str,
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        number: "1122",
        label_en: "Rescue",
        label_ur: "ریسکیو",
    },
    EmergencyContact {
        number: "15",
        label_en: "Police",
        label_ur: "پولیس",
    },
    EmergencyContact {
        number: "115",
        label_en: "Edhi",
        label_ur: "ایدھی",
    },
];
