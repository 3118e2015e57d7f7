use anyhow::Result;
use serde_json::json;
use vitrin::BrowseOutcome;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(profile) if profile.has_link() => println!("{}", profile.url),
        Some(profile) => println!("{}", profile.name),
        None => println!("No selection"),
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(profile) => json!({
            "id": profile.id,
            "name": profile.name,
            "url": if profile.has_link() {
                json!(profile.url)
            } else {
                serde_json::Value::Null
            },
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
