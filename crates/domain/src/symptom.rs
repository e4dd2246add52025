//! Symptom checker: points a symptom at the medical department to visit
//! and a government and a private facility that treat it.

use serde::Serialize;

/// A hospital with a phone number and a maps link.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub name: &'static str,
    pub phone: &'static str,
    pub map_url: &'static str,
}

/// Where to go for a given symptom.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Symptom {
    /// Roman-Urdu description with the English name in parentheses.
    pub label: &'static str,
    pub department: &'static str,
    pub government: Facility,
    pub private: Facility,
}

pub const SYMPTOMS: &[Symptom] = &[
    Symptom {
        label: "Dil mein dard (Chest Pain)",
        department: "Cardiology (دل کا شعبہ)",
        government: Facility {
            name: "NICVD",
            phone: "02199201271",
            map_url: "https://www.google.com/maps/search/NICVD+Karachi",
        },
        private: Facility {
            name: "Tabba Heart",
            phone: "021111844844",
            map_url: "https://www.google.com/maps/search/Tabba+Heart+Institute+Karachi",
        },
    },
    Symptom {
        label: "Hadi ya Jor ka masla (Bone/Joint)",
        department: "Orthopedics (ہڈیوں کا شعبہ)",
        government: Facility {
            name: "JPMC (Jinnah Hospital)",
            phone: "02199201300",
            map_url: "https://www.google.com/maps/search/JPMC+Karachi",
        },
        private: Facility {
            name: "Liaquat National",
            phone: "02134412526",
            map_url: "https://www.google.com/maps/search/Liaquat+National+Hospital+Karachi",
        },
    },
    Symptom {
        label: "Gurday ka masla (Kidney Issue)",
        department: "Nephrology (گردوں کا شعبہ)",
        government: Facility {
            name: "SIUT",
            phone: "021111000313",
            map_url: "https://www.google.com/maps/search/SIUT+Karachi",
        },
        private: Facility {
            name: "The Kidney Centre",
            phone: "02135831082",
            map_url: "https://www.google.com/maps/search/The+Kidney+Centre+Karachi",
        },
    },
    Symptom {
        label: "Danto ka dard / Masooray (Dental)",
        department: "Dentistry (دانتوں کا شعبہ)",
        government: Facility {
            name: "Sindh Govt Dental",
            phone: "02199215740",
            map_url: "https://www.google.com/maps/search/Sindh+Government+Dental+Hospital+Karachi",
        },
        private: Facility {
            name: "Fatima Jinnah Dental",
            phone: "02135111963",
            map_url: "https://www.google.com/maps/search/Fatima+Jinnah+Dental+College+Hospital",
        },
    },
    Symptom {
        label: "Aankhon ka masla (Eye Issue)",
        department: "Ophthalmology (آنکھوں کا شعبہ)",
        government: Facility {
            name: "Civil Hospital Eye Ward",
            phone: "02199215740",
            map_url: "https://www.google.com/maps/search/Civil+Hospital+Karachi",
        },
        private: Facility {
            name: "LRBT Eye Hospital",
            phone: "02132432801",
            map_url: "https://www.google.com/maps/search/LRBT+Korangi+Karachi",
        },
    },
    Symptom {
        label: "Gala, Naak, Kaan (ENT)",
        department: "ENT Department (ناک، کان، گلے کا شعبہ)",
        government: Facility {
            name: "Jinnah (JPMC) ENT",
            phone: "02199201300",
            map_url: "https://www.google.com/maps/search/JPMC+Karachi+ENT+Ward",
        },
        private: Facility {
            name: "Dow University Hospital",
            phone: "021111362111",
            map_url: "https://www.google.com/maps/search/Dow+University+Hospital+Karachi",
        },
    },
    Symptom {
        label: "Sugar ka masla (Diabetes)",
        department: "Endocrinology (شوگر کا شعبہ)",
        government: Facility {
            name: "Baqai Institute (NIDE)",
            phone: "02199261271",
            map_url: "https://www.google.com/maps/search/Baqai+Institute+of+Diabetology+Karachi",
        },
        private: Facility {
            name: "Aga Khan Hospital",
            phone: "021111911911",
            map_url: "https://www.google.com/maps/search/Aga+Khan+University+Hospital+Karachi",
        },
    },
    Symptom {
        label: "Jild ki kharish / Daane (Skin/Rash)",
        department: "Dermatology (جلد کا شعبہ)",
        government: Facility {
            name: "Skin Ward - JPMC",
            phone: "02199201300",
            map_url: "https://www.google.com/maps/search/JPMC+Karachi+Skin+Ward",
        },
        private: Facility {
            name: "Aga Khan Hospital",
            phone: "021111911911",
            map_url: "https://www.google.com/maps/search/Aga+Khan+Hospital+Karachi",
        },
    },
    Symptom {
        label: "Zehni dabao / Pareshani (Mental Health)",
        department: "Psychiatry (نفسیات کا شعبہ)",
        government: Facility {
            name: "JPMC Psychiatry",
            phone: "02199201300",
            map_url: "https://www.google.com/maps/search/JPMC+Psychiatry+Ward",
        },
        private: Facility {
            name: "Karwan-e-Hayat",
            phone: "021111534111",
            map_url: "https://www.google.com/maps/search/Karwan-e-Hayat+Karachi",
        },
    },
    Symptom {
        label: "Hadsati chot / Trauma (Emergency)",
        department: "Emergency / ER (ایمرجنسی)",
        government: Facility {
            name: "Civil Trauma Centre",
            phone: "02199215740",
            map_url: "https://www.google.com/maps/search/SMBB+Trauma+Centre+Karachi",
        },
        private: Facility {
            name: "Indus Hospital",
            phone: "02135112709",
            map_url: "https://www.google.com/maps/search/Indus+Hospital+Korangi+Karachi",
        },
    },
    Symptom {
        label: "Jal jana (Burn Injury)",
        department: "Burn Centre (جھلسنے کا شعبہ)",
        government: Facility {
            name: "Civil Burn Centre",
            phone: "02199215740",
            map_url: "https://www.google.com/maps/search/Civil+Hospital+Burn+Centre+Karachi",
        },
        private: Facility {
            name: "Patel Hospital",
            phone: "021111174111",
            map_url: "https://www.google.com/maps/search/Patel+Hospital+Karachi",
        },
    },
    Symptom {
        label: "Puranay zakham / Operation (Surgery)",
        department: "General Surgery (جنرل سرجری)",
        government: Facility {
            name: "JPMC Surgery Ward",
            phone: "02199201300",
            map_url: "https://www.google.com/maps/search/JPMC+Surgery+Ward",
        },
        private: Facility {
            name: "South City Hospital",
            phone: "02135862301",
            map_url: "https://www.google.com/maps/search/South+City+Hospital+Karachi",
        },
    },
];

/// Symptoms whose label contains `term`, ignoring case. An empty term
/// returns the whole table.
#[must_use]
pub fn filter(term: &str) -> Vec<&'static Symptom> {
    let term = term.trim().to_lowercase();
    SYMPTOMS
        .iter()
        .filter(|symptom| symptom.label.to_lowercase().contains(&term))
        .collect()
}

/// The record for an exact label, as picked from a filtered list.
#[must_use]
pub fn find(label: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|symptom| symptom.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_all_symptoms_for_empty_term() {
        assert_eq!(filter("").len(), SYMPTOMS.len());
    }

    #[test]
    fn should_filter_by_case_insensitive_substring() {
        let matches = filter("kidney");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].department, "Nephrology (گردوں کا شعبہ)");
    }

    #[test]
    fn should_match_roman_urdu_words() {
        let labels: Vec<&str> = filter("masla").iter().map(|s| s.label).collect();
        assert!(labels.contains(&"Sugar ka masla (Diabetes)"));
        assert!(labels.contains(&"Aankhon ka masla (Eye Issue)"));
    }

    #[test]
    fn should_return_empty_when_nothing_matches() {
        assert!(filter("fever").is_empty());
    }

    #[test]
    fn should_find_record_by_exact_label() {
        let symptom = find("Dil mein dard (Chest Pain)").unwrap();
        assert_eq!(symptom.government.name, "NICVD");
        assert_eq!(symptom.private.phone, "021111844844");
    }

    #[test]
    fn should_not_find_partial_label() {
        assert!(find("Chest Pain").is_none());
    }
}
