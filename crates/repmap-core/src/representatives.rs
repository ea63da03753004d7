use serde::{Deserialize, Deserializer, Serialize};

/// The region codes a representative is assigned to.
///
/// Serialized as a bare string when exactly one code applies and as an array
/// otherwise (including the empty array), matching what the map widget
/// consumes. Internally every consumer goes through [`RegionAssignment::codes`].
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(untagged)]
pub enum RegionAssignment {
    Single(String),
    /// Zero, or two or more, distinct codes.
    Multiple(Vec<String>),
}

impl RegionAssignment {
    /// Collapses a list of codes into the canonical shape, dropping repeats
    /// while keeping first-seen order.
    #[must_use]
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        if unique.len() == 1 {
            RegionAssignment::Single(unique.remove(0))
        } else {
            RegionAssignment::Multiple(unique)
        }
    }

    #[must_use]
    pub fn codes(&self) -> &[String] {
        match self {
            RegionAssignment::Single(code) => std::slice::from_ref(code),
            RegionAssignment::Multiple(codes) => codes,
        }
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes().iter().any(|c| c == code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes().is_empty()
    }
}

impl Default for RegionAssignment {
    fn default() -> Self {
        RegionAssignment::Multiple(Vec::new())
    }
}

// Order is not significant.
impl PartialEq for RegionAssignment {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.codes(), other.codes());
        left.len() == right.len() && left.iter().all(|code| right.contains(code))
    }
}

impl<'de> Deserialize<'de> for RegionAssignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::One(code) => RegionAssignment::from_codes([code]),
            Shape::Many(codes) => RegionAssignment::from_codes(codes),
        })
    }
}

/// A validated, deduplicated representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub region_id: RegionAssignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    /// Carried through from the CMS record but not displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Representative {
    #[must_use]
    pub fn region_codes(&self) -> &[String] {
        self.region_id.codes()
    }

    #[must_use]
    pub fn activities(&self) -> &[String] {
        self.activity.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn from_codes_single_collapses_to_string() {
        let assignment = RegionAssignment::from_codes(codes(&["RU-MOW"]));
        assert_eq!(assignment, RegionAssignment::Single("RU-MOW".to_string()));
        assert!(matches!(assignment, RegionAssignment::Single(_)));
    }

    #[test]
    fn from_codes_repeated_code_collapses_to_string() {
        let assignment = RegionAssignment::from_codes(codes(&["RU-MOW", "RU-MOW"]));
        assert!(matches!(assignment, RegionAssignment::Single(ref c) if c == "RU-MOW"));
    }

    #[test]
    fn from_codes_many_stays_array() {
        let assignment = RegionAssignment::from_codes(codes(&["A", "B", "A"]));
        assert!(matches!(assignment, RegionAssignment::Multiple(ref v) if v.len() == 2));
    }

    #[test]
    fn from_codes_empty_is_empty_array() {
        let assignment = RegionAssignment::from_codes(Vec::new());
        assert!(assignment.is_empty());
        assert_eq!(serde_json::to_value(&assignment).unwrap(), serde_json::json!([]));
    }

    #[test]
    fn equality_ignores_order() {
        let left = RegionAssignment::from_codes(codes(&["A", "B"]));
        let right = RegionAssignment::from_codes(codes(&["B", "A"]));
        assert_eq!(left, right);
        assert_ne!(left, RegionAssignment::from_codes(codes(&["A", "C"])));
    }

    #[test]
    fn serializes_single_as_bare_string() {
        let assignment = RegionAssignment::from_codes(codes(&["RU-MOW"]));
        assert_eq!(
            serde_json::to_value(&assignment).unwrap(),
            serde_json::json!("RU-MOW")
        );
    }

    #[test]
    fn deserializing_one_element_array_collapses() {
        let assignment: RegionAssignment = serde_json::from_str(r#"["RU-MOW"]"#).unwrap();
        assert!(matches!(assignment, RegionAssignment::Single(_)));
    }

    #[test]
    fn representative_uses_camel_case_and_skips_absent_optionals() {
        let rep = Representative {
            id: 7,
            name: "Иванов Иван".to_string(),
            position: "Менеджер".to_string(),
            phone: "+7 900 000-00-00".to_string(),
            email: "ivanov@example.ru".to_string(),
            region_id: RegionAssignment::from_codes(codes(&["RU-MOW"])),
            activity: None,
            working_hours: Some("9:00-18:00".to_string()),
            address: None,
        };
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(json["regionId"], "RU-MOW");
        assert_eq!(json["workingHours"], "9:00-18:00");
        assert!(json.get("activity").is_none());
        assert!(json.get("address").is_none());
    }
}
