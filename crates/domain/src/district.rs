//! District finder: maps Karachi neighbourhoods to their Deputy
//! Commissioner (DC) office.

use serde::Serialize;

/// A Karachi administrative district and the DC office serving it.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct District {
    pub name: &'static str,
    pub areas: &'static [&'static str],
    pub office: &'static str,
    pub address: &'static str,
    pub maps: &'static str,
}

impl District {
    /// Case-insensitive exact match against this district's area names.
    #[must_use]
    pub fn covers(&self, area: &str) -> bool {
        self.areas
            .iter()
            .any(|candidate| candidate.to_lowercase() == area.to_lowercase())
    }
}

pub const DISTRICTS: &[District] = &[
    District {
        name: "District South",
        areas: &["DHA", "Clifton", "Saddar", "Lyari", "Garden"],
        office: "DC South Office, Haqqani Chowk",
        address: "Kutchery Road, near Shaheen Complex",
        maps: "https://maps.google.com/?q=DC+South+Office+Karachi",
    },
    District {
        name: "District East",
        areas: &[
            "Gulshan-e-Iqbal",
            "Jamshed Quarters",
            "Gulistan-e-Jauhar",
            "Ferozabad",
        ],
        office: "DC East Office, Civic Centre",
        address: "Near Gulshan Chowrangi, University Road",
        maps: "https://maps.google.com/?q=DC+East+Office+Karachi",
    },
    District {
        name: "District Central",
        areas: &["North Nazimabad", "Liaquatabad", "Gulberg", "New Karachi"],
        office: "DC Central Office",
        address: "Sakhi Hassan Chowrangi, North Nazimabad",
        maps: "https://maps.google.com/?q=DC+Central+Office+Karachi",
    },
    District {
        name: "District West",
        areas: &["Orangi Town", "Mominabad", "Surjani", "Manghopir"],
        office: "DC West Office",
        address: "SITE Area, near Habib Bank Chowrangi",
        maps: "https://maps.google.com/?q=DC+West+Office+Karachi",
    },
    District {
        name: "District Malir",
        areas: &["Bin Qasim", "Ibrahim Hyderi", "Gadap", "Airport"],
        office: "DC Malir Office",
        address: "Main National Highway, near Quaidabad",
        maps: "https://maps.google.com/?q=DC+Malir+Office+Karachi",
    },
];

/// First district whose area list contains `area`, ignoring case and
/// surrounding whitespace. Blank or unknown input yields `None`.
#[must_use]
pub fn find_by_area(area: &str) -> Option<&'static District> {
    let area = area.trim();
    if area.is_empty() {
        return None;
    }
    DISTRICTS.iter().find(|district| district.covers(area))
}

/// Every known area name, sorted, for populating a picker.
#[must_use]
pub fn all_areas() -> Vec<&'static str> {
    let mut areas: Vec<&'static str> = DISTRICTS
        .iter()
        .flat_map(|district| district.areas.iter().copied())
        .collect();
    areas.sort_unstable();
    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_clifton_to_district_south() {
        let district = find_by_area("Clifton").unwrap();
        assert_eq!(district.name, "District South");
    }

    #[test]
    fn should_match_ignoring_case() {
        let district = find_by_area("north nazimabad").unwrap();
        assert_eq!(district.name, "District Central");
    }

    #[test]
    fn should_return_none_for_unknown_area() {
        assert!(find_by_area("Nowhere").is_none());
    }

    #[test]
    fn should_return_none_for_partial_name() {
        assert!(find_by_area("Gulshan").is_none());
    }

    #[test]
    fn should_return_none_for_blank_input() {
        assert!(find_by_area("   ").is_none());
    }

    #[test]
    fn should_list_all_areas_sorted() {
        let areas = all_areas();
        let total: usize = DISTRICTS.iter().map(|d| d.areas.len()).sum();
        assert_eq!(areas.len(), total);
        assert!(areas.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(areas.first(), Some(&"Airport"));
    }
}
