//! Empty-state aware views for the contact panel and the card list.
//!
//! "Nothing found" is never an error; each view spells out which empty state
//! applies so the widget can word it.

use serde::Serialize;

use crate::card::RepresentativeCard;
use crate::lookup::for_region;
use crate::registry::RegionRegistry;
use crate::representatives::Representative;
use crate::resolver::ResolvedCode;
use crate::search::search;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContactPanel {
    NothingSelected,
    /// `representatives` may be empty: the "no representatives in this
    /// region" state.
    Selected {
        heading: ResolvedCode,
        representatives: Vec<RepresentativeCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    /// The normalized set itself is empty.
    NoRepresentatives,
    NoMatches { query: String },
    Matches { representatives: Vec<RepresentativeCard> },
}

#[must_use]
pub fn contact_panel(
    representatives: &[Representative],
    selected: Option<&str>,
    registry: &RegionRegistry,
) -> ContactPanel {
    let Some(code) = selected else {
        return ContactPanel::NothingSelected;
    };
    let matched = for_region(representatives, code, registry);
    ContactPanel::Selected {
        heading: registry.resolve(code).to_owned_code(code),
        representatives: RepresentativeCard::many(&matched, registry),
    }
}

#[must_use]
pub fn list_view(
    representatives: &[Representative],
    query: &str,
    registry: &RegionRegistry,
) -> ListView {
    if representatives.is_empty() {
        return ListView::NoRepresentatives;
    }
    let matched = search(representatives, query, registry);
    if matched.is_empty() {
        ListView::NoMatches {
            query: query.trim().to_owned(),
        }
    } else {
        ListView::Matches {
            representatives: RepresentativeCard::many(&matched, registry),
        }
    }
}
