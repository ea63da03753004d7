//! Display-ready projection of a [`Representative`] for the card list and
//! the contact panel.

use serde::Serialize;

use crate::registry::RegionRegistry;
use crate::representatives::Representative;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentativeCard {
    pub id: i64,
    pub name: String,
    /// Up to two uppercase letters, e.g. `"ИИ"` for `"Иванов Иван"`.
    pub initials: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailto_uri: Option<String>,
    /// Resolved region/district names in assignment order; unknown codes are
    /// shown as-is.
    pub regions: Vec<String>,
    pub activity: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
}

impl RepresentativeCard {
    #[must_use]
    pub fn new(rep: &Representative, registry: &RegionRegistry) -> Self {
        let regions = rep
            .region_codes()
            .iter()
            .map(|code| registry.resolve(code).name().to_owned())
            .collect();

        Self {
            id: rep.id,
            name: rep.name.clone(),
            initials: initials(&rep.name),
            position: rep.position.clone(),
            phone: rep.phone.clone(),
            email: rep.email.clone(),
            tel_uri: tel_uri(&rep.phone),
            mailto_uri: (!rep.email.is_empty()).then(|| format!("mailto:{}", rep.email)),
            regions,
            activity: rep.activities().to_vec(),
            working_hours: rep.working_hours.clone(),
        }
    }

    /// Builds cards for a list of representatives, preserving order.
    #[must_use]
    pub fn many(reps: &[&Representative], registry: &RegionRegistry) -> Vec<Self> {
        reps.iter().map(|rep| Self::new(rep, registry)).collect()
    }
}

/// First letter of each of the first two words, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `tel:` URI keeping only digits and `+`. `None` when nothing dialable is left.
#[must_use]
pub fn tel_uri(phone: &str) -> Option<String> {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    (!dialable.is_empty()).then(|| format!("tel:{dialable}"))
}
