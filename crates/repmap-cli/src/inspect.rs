//! Payload inspection commands: `normalize`, `search` and `region`.

use std::path::Path;

use repmap_core::{
    contact_panel, list_view, load_payload, normalize, payload_from_json, ContactPanel, ListView,
    PayloadSource, RegionRegistry, Representative, RepresentativeCard,
};

/// Loads and normalizes the payload at `path`, or the sample data set.
///
/// # Errors
///
/// Returns an error if the payload file exists but cannot be read.
pub(crate) fn load_representatives(path: Option<&Path>) -> anyhow::Result<Vec<Representative>> {
    let payload = load_payload(path)?;
    let report = normalize(&payload.records, RegionRegistry::russia());
    tracing::debug!(
        source = ?payload.source,
        kept = report.representatives.len(),
        dropped = report.dropped_count(),
        "loaded representatives"
    );
    Ok(report.representatives)
}

/// Normalizes a payload file and prints the report.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the output cannot be
/// serialized.
pub(crate) fn run_normalize(path: &Path, summary_only: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let payload = payload_from_json(Some(&raw));
    if payload.source == PayloadSource::Sample {
        anyhow::bail!("{} is not a JSON array of records", path.display());
    }

    let report = normalize(&payload.records, RegionRegistry::russia());
    println!(
        "records: {}  kept: {}  dropped: {}  unknown codes: {}",
        payload.records.len(),
        report.representatives.len(),
        report.dropped_count(),
        report.unknown_codes.len()
    );
    for dropped in &report.dropped {
        println!("  dropped #{}: {}", dropped.index, dropped.reason);
    }
    for unknown in &report.unknown_codes {
        println!(
            "  unknown code {:?} on representative {}",
            unknown.code, unknown.representative_id
        );
    }

    if !summary_only {
        println!("{}", serde_json::to_string_pretty(&report.representatives)?);
    }
    Ok(())
}

/// Prints the cards matching `query`.
///
/// # Errors
///
/// Returns an error if the payload file cannot be read.
pub(crate) fn run_search(query: &str, payload: Option<&Path>) -> anyhow::Result<()> {
    let representatives = load_representatives(payload)?;
    match list_view(&representatives, query, RegionRegistry::russia()) {
        ListView::NoRepresentatives => println!("no representatives loaded"),
        ListView::NoMatches { query } => println!("nothing found for \"{query}\""),
        ListView::Matches { representatives } => {
            println!("{} match(es)", representatives.len());
            for card in &representatives {
                print_card(card);
            }
        }
    }
    Ok(())
}

/// Prints the contact panel for `code`.
///
/// # Errors
///
/// Returns an error if the payload file cannot be read.
pub(crate) fn run_region(code: &str, payload: Option<&Path>) -> anyhow::Result<()> {
    let representatives = load_representatives(payload)?;
    match contact_panel(&representatives, Some(code), RegionRegistry::russia()) {
        ContactPanel::NothingSelected => println!("no region selected"),
        ContactPanel::Selected {
            heading,
            representatives,
        } => {
            match &heading.district_id {
                Some(district) => println!("{} ({district})", heading.name),
                None => println!("{}", heading.name),
            }
            if representatives.is_empty() {
                println!("no representatives in this region");
            }
            for card in &representatives {
                print_card(card);
            }
        }
    }
    Ok(())
}

fn print_card(card: &RepresentativeCard) {
    println!();
    println!("[{}] {} ({})", card.initials, card.name, card.id);
    println!("    {}", card.position);
    if !card.phone.is_empty() {
        println!("    tel:   {}", card.phone);
    }
    if !card.email.is_empty() {
        println!("    email: {}", card.email);
    }
    if !card.regions.is_empty() {
        println!("    regions: {}", card.regions.join(", "));
    }
    if !card.activity.is_empty() {
        println!("    activity: {}", card.activity.join(", "));
    }
    if let Some(hours) = &card.working_hours {
        println!("    hours: {hours}");
    }
}
