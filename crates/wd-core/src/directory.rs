use serde::Serialize;
use std::collections::HashMap;

/// Position of a parameter's token inside a WD document.
/// Both indices are zero-based; `line` counts physical lines and
/// `token` counts whitespace-separated fields within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub token: usize,
}

const fn at(line: usize, token: usize) -> Location {
    Location { line, token }
}

/// The standard WD LC/DC input layout. Grouping comments give the
/// 1-based file line each block lives on.
const DIRECTORY_ROWS: &[(&str, Location)] = &[
    // file lines 2-3: DC step sizes
    ("DEL_A", at(1, 0)),
    ("DEL_E", at(1, 1)),
    ("DEL_PER", at(1, 2)),
    ("DEL_I", at(1, 6)),
    ("DEL_T1", at(1, 9)),
    ("DEL_T2", at(1, 10)),
    ("DEL_Q", at(2, 4)),
    // file line 8: ephemeris and phase controls
    ("HJD0", at(7, 1)),
    ("P0", at(7, 2)),
    ("DPDT", at(7, 3)),
    ("PHS", at(7, 4)),
    ("DELPH", at(7, 5)),
    ("NGA", at(7, 6)),
    // file line 9: model configuration and surface grids
    ("MODE", at(8, 0)),
    ("IPB", at(8, 1)),
    ("IFAT1", at(8, 2)),
    ("IFAT2", at(8, 3)),
    ("N1", at(8, 4)),
    ("N2", at(8, 5)),
    ("VUNIT", at(8, 11)),
    ("VFAC", at(8, 12)),
    // file line 10: main orbital and radiative parameters
    ("ECC", at(9, 0)),
    ("A", at(9, 1)),
    ("F1", at(9, 2)),
    ("F2", at(9, 3)),
    ("VGAM", at(9, 4)),
    ("INCL", at(9, 5)),
    ("G1", at(9, 6)),
    ("G2", at(9, 7)),
    ("MH", at(9, 8)),
    // file line 11: surface and thermodynamic parameters
    ("T1", at(10, 0)),
    ("T2", at(10, 1)),
    ("ALB1", at(10, 2)),
    ("ALB2", at(10, 3)),
    ("POT1", at(10, 4)),
    ("POT2", at(10, 5)),
    // WD writes the mass ratio lowercase; the only non-uppercase symbol
    ("q", at(10, 6)),
    // file line 12: third body
    ("A3B", at(11, 0)),
    ("P3B", at(11, 1)),
    ("INCL3B", at(11, 2)),
    ("E3B", at(11, 3)),
    // file line 13: curve-specific flux and limb darkening
    ("L1", at(12, 1)),
    ("L2", at(12, 2)),
    ("X1", at(12, 3)),
    ("X2", at(12, 4)),
    ("EL3", at(12, 7)),
];

/// Maps canonical parameter symbols to their token positions.
///
/// Lookup is exact and case-sensitive: `q` and `Q` are different keys,
/// and only the former exists in the standard layout.
pub struct ParameterDirectory {
    rows: &'static [(&'static str, Location)],
    index: HashMap<&'static str, Location>,
}

impl ParameterDirectory {
    /// Directory for the standard WD input layout.
    pub fn standard() -> Self {
        Self::from_rows(DIRECTORY_ROWS)
    }

    fn from_rows(rows: &'static [(&'static str, Location)]) -> Self {
        Self {
            rows,
            index: rows.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<Location> {
        self.index.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in document order (line, then token).
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Location)> {
        self.rows.iter().copied()
    }
}

impl Default for ParameterDirectory {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dir = ParameterDirectory::standard();
        assert_eq!(dir.lookup("q"), Some(at(10, 6)));
        assert_eq!(dir.lookup("Q"), None);
        assert_eq!(dir.lookup("ECC"), Some(at(9, 0)));
        assert_eq!(dir.lookup("ecc"), None);
    }

    #[test]
    fn test_unknown_symbol() {
        let dir = ParameterDirectory::standard();
        assert_eq!(dir.lookup("BOGUS"), None);
        assert!(!dir.contains("BOGUS"));
    }

    #[test]
    fn test_no_duplicate_symbols() {
        let dir = ParameterDirectory::standard();
        let unique: std::collections::HashSet<&str> = dir.entries().map(|(s, _)| s).collect();
        assert_eq!(unique.len(), dir.len());
    }

    #[test]
    fn test_entries_follow_document_order() {
        let dir = ParameterDirectory::standard();
        let locations: Vec<Location> = dir.entries().map(|(_, loc)| loc).collect();
        let mut sorted = locations.clone();
        sorted.sort_by_key(|loc| (loc.line, loc.token));
        assert_eq!(locations, sorted);
    }
}
