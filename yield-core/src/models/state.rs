/// Postal abbreviations and canonical names for U.S. states, the District of
/// Columbia, and the inhabited territories.
const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("PR", "Puerto Rico"),
    ("GU", "Guam"),
    ("VI", "U.S. Virgin Islands"),
    ("AS", "American Samoa"),
    ("MP", "Northern Mariana Islands"),
];

/// Lookup from a two-letter code to the canonical state name.
///
/// The proportion calculator matches these names against free-text fund
/// names, which is the least reliable rule in the system, so the table is
/// injected into the calculator rather than referenced at the call sites.
/// A directory with a different table (or a corrected name) can be swapped
/// in without touching calculation code.
#[derive(Debug, Clone)]
pub struct StateDirectory {
    entries: &'static [(&'static str, &'static str)],
}

impl StateDirectory {
    /// Directory over a custom abbreviation table.
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolves a two-letter code to the state's full name,
    /// case-insensitively. Unknown codes resolve to `None`, never an error.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }
}

impl Default for StateDirectory {
    fn default() -> Self {
        Self::new(US_STATES)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_codes_case_insensitively() {
        let directory = StateDirectory::default();

        assert_eq!(directory.name_of("NY"), Some("New York"));
        assert_eq!(directory.name_of("ny"), Some("New York"));
        assert_eq!(directory.name_of("Wa"), Some("Washington"));
    }

    #[test]
    fn covers_territories() {
        let directory = StateDirectory::default();

        assert_eq!(directory.name_of("PR"), Some("Puerto Rico"));
        assert_eq!(directory.name_of("GU"), Some("Guam"));
    }

    #[test]
    fn unknown_code_resolves_to_none() {
        let directory = StateDirectory::default();

        assert_eq!(directory.name_of("ZZ"), None);
        assert_eq!(directory.name_of(""), None);
    }
}
