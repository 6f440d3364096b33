use crate::error::{EchocatError, Result};
use std::fmt;

/// Elementary echocardiographic views from which an EF estimate is derived
///
/// Variant order is the canonical order used when a combination of views
/// is expanded into per-view lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Plax, // Parasternal long axis
    Ap2,  // Apical 2-chamber
    Ap4,  // Apical 4-chamber
}

/// All elementary views in canonical order
pub const ALL_VIEWS: [View; 3] = [View::Plax, View::Ap2, View::Ap4];

impl View {
    /// Returns the key under which this view's predictions are stored
    pub fn key(&self) -> &'static str {
        match self {
            View::Plax => "plax_ef",
            View::Ap2 => "ap2_ef",
            View::Ap4 => "ap4_ef",
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            View::Plax => "plax",
            View::Ap2 => "ap2",
            View::Ap4 => "ap4",
        }
    }

    /// Parses a view from its table key or simple name
    ///
    /// Accepts `"plax_ef"` and `"plax"` (and the AP2/AP4 equivalents),
    /// case-insensitive. Returns `None` for anything else.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plax_ef" | "plax" => Some(View::Plax),
            "ap2_ef" | "ap2" => Some(View::Ap2),
            "ap4_ef" | "ap4" => Some(View::Ap4),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// A requested view key: one elementary view or an unordered combination
///
/// Views are held deduplicated in canonical order, so `"ap4_ef,plax_ef"`
/// and `"plax_ef,ap4_ef"` name the same key. Exactly 7 keys exist (the 3
/// single views, the 3 pairs and the full triple), each with a fixed
/// display title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    views: Vec<View>,
}

impl ViewKey {
    /// Creates a key for a single elementary view
    pub fn single(view: View) -> Self {
        Self { views: vec![view] }
    }

    /// Creates a key from a set of views
    ///
    /// # Errors
    ///
    /// Returns [`EchocatError::UnknownViewKey`] if `views` is empty.
    pub fn new(views: &[View]) -> Result<Self> {
        if views.is_empty() {
            return Err(EchocatError::UnknownViewKey("<empty>".to_string()));
        }
        let mut views = views.to_vec();
        views.sort();
        views.dedup();
        Ok(Self { views })
    }

    /// Parses a key from a comma-separated list of view names
    ///
    /// Accepts elementary keys (`"plax_ef"`), combinations
    /// (`"ap2_ef,ap4_ef"`) and the alias `"all"` for the full triple.
    ///
    /// # Errors
    ///
    /// Returns [`EchocatError::UnknownViewKey`] if the list is empty or
    /// contains a name that is not an elementary view.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Self::new(&ALL_VIEWS);
        }
        let mut views = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match View::from_key(part) {
                Some(view) => views.push(view),
                None => return Err(EchocatError::UnknownViewKey(part.to_string())),
            }
        }
        if views.is_empty() {
            return Err(EchocatError::UnknownViewKey(s.to_string()));
        }
        Self::new(&views)
    }

    /// Returns the member views in canonical order
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Returns whether this key names a single elementary view
    pub fn is_single(&self) -> bool {
        self.views.len() == 1
    }

    /// Returns the fixed display title for this key
    ///
    /// The title table covers all 7 valid keys; invalid keys cannot be
    /// constructed.
    pub fn title(&self) -> &'static str {
        match self.views.as_slice() {
            [View::Plax] => "PLAX only",
            [View::Ap2] => "AP2 only",
            [View::Ap4] => "AP4 only",
            [View::Ap2, View::Ap4] => "AP4 and AP2",
            [View::Plax, View::Ap4] => "AP4 and PLAX",
            [View::Plax, View::Ap2] => "AP2 and PLAX",
            [View::Plax, View::Ap2, View::Ap4] => "All views",
            _ => unreachable!("ViewKey is always a non-empty subset of ALL_VIEWS"),
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.views.iter().map(|v| v.key()).collect();
        write!(f, "{}", keys.join(","))
    }
}

impl serde::Serialize for ViewKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plax_ef", View::Plax)]
    #[case("ap2_ef", View::Ap2)]
    #[case("ap4_ef", View::Ap4)]
    #[case("PLAX", View::Plax)]
    #[case(" ap4 ", View::Ap4)]
    fn test_view_from_key(#[case] input: &str, #[case] expected: View) {
        assert_eq!(View::from_key(input), Some(expected));
    }

    #[test]
    fn test_view_from_key_unknown() {
        assert_eq!(View::from_key("psax_ef"), None);
        assert_eq!(View::from_key(""), None);
    }

    #[rstest]
    #[case("plax_ef", "PLAX only")]
    #[case("ap2_ef", "AP2 only")]
    #[case("ap4_ef", "AP4 only")]
    #[case("ap2_ef,ap4_ef", "AP4 and AP2")]
    #[case("ap4_ef,plax_ef", "AP4 and PLAX")]
    #[case("ap2_ef,plax_ef", "AP2 and PLAX")]
    #[case("ap2_ef,ap4_ef,plax_ef", "All views")]
    #[case("all", "All views")]
    fn test_view_key_titles(#[case] input: &str, #[case] title: &str) {
        let key = ViewKey::parse(input).unwrap();
        assert_eq!(key.title(), title);
    }

    #[test]
    fn test_view_key_order_insensitive() {
        let a = ViewKey::parse("ap4_ef,plax_ef").unwrap();
        let b = ViewKey::parse("plax_ef,ap4_ef").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.views(), &[View::Plax, View::Ap4]);
    }

    #[test]
    fn test_view_key_dedup() {
        let key = ViewKey::parse("ap2_ef,ap2_ef").unwrap();
        assert!(key.is_single());
        assert_eq!(key.title(), "AP2 only");
    }

    #[test]
    fn test_view_key_unknown_name() {
        let err = ViewKey::parse("subcostal_ef").unwrap_err();
        assert!(matches!(err, EchocatError::UnknownViewKey(name) if name == "subcostal_ef"));
    }

    #[test]
    fn test_view_key_empty() {
        assert!(ViewKey::parse("").is_err());
        assert!(ViewKey::parse(" , ").is_err());
        assert!(ViewKey::new(&[]).is_err());
    }

    #[test]
    fn test_view_key_display() {
        let key = ViewKey::parse("ap4_ef,plax_ef").unwrap();
        assert_eq!(key.to_string(), "plax_ef,ap4_ef");
    }
}
