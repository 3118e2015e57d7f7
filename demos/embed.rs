use vitrin::{
    BrowseState, Catalog, Controls, Profile, ShareRuntime, SystemClipboard, default_theme,
    sheet_from_command,
};

fn main() -> anyhow::Result<()> {
    // Build a small in-memory catalog
    let catalog = Catalog::from_profiles(vec![
        Profile::new(
            "draft-doctor",
            "Draft Doctor",
            "https://chat.example.com/g/draft-doctor",
        )
        .with_description("Tightens paragraphs without flattening the voice")
        .with_categories(["writing"])
        .with_public(true)
        .with_updated("2025-03-14T10:00:00Z"),
        Profile::new(
            "query-quizzer",
            "Query Quizzer",
            "https://chat.example.com/g/query-quizzer",
        )
        .with_description("Turns vague questions into sharp follow-ups")
        .with_categories(["learning"])
        .with_tags(["socratic"]),
    ])?;

    let share =
        ShareRuntime::start(Box::new(SystemClipboard::new(true)), sheet_from_command(&[]));
    let mut state = BrowseState::new(catalog, Controls::new(), share, default_theme(), "embed");
    let outcome = vitrin::run(&mut state)?;

    println!("Accepted? {}", outcome.accepted);
    match outcome.selection {
        Some(profile) => println!("Selected: {} ({})", profile.name, profile.url),
        None => println!("No selection"),
    }
    Ok(())
}
