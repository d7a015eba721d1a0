use std::fmt::Write;

use crate::model::EnrichedRecipe;

/// Width of one card in the grid, including its border
const CARD_WIDTH: usize = 34;

/// Render recipes as a grid of text cards, `columns` per row.
pub fn grid(recipes: &[&EnrichedRecipe], columns: usize) -> String {
    let columns = columns.max(1);
    let mut output = String::new();

    for row in recipes.chunks(columns) {
        let cards: Vec<Vec<String>> = row.iter().map(|r| card(r)).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for line in 0..height {
            let joined: Vec<&str> = cards
                .iter()
                .map(|c| c.get(line).map(String::as_str).unwrap_or(""))
                .collect();
            output.push_str(joined.join("  ").trim_end());
            output.push('\n');
        }
    }

    output
}

fn card(recipe: &EnrichedRecipe) -> Vec<String> {
    let inner = CARD_WIDTH - 4;
    let border = format!("+{}+", "-".repeat(CARD_WIDTH - 2));
    let body = [
        recipe.title.clone(),
        format!("{} · {}", recipe.category, recipe.area),
        format!("time: {}", recipe.duration),
        format!("mood: {}", recipe.mood_labels()),
        format!("id: {}", recipe.id),
    ];

    let mut lines = vec![border.clone()];
    for text in body {
        lines.push(format!("| {:<width$} |", truncate(&text, inner), width = inner));
    }
    lines.push(border);
    lines
}

/// Cut `text` to at most `max` characters, marking the cut with `…`
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Full view of a single recipe
pub fn detail(recipe: &EnrichedRecipe) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", recipe.title);
    let _ = writeln!(output, "{}", "=".repeat(recipe.title.chars().count()));
    let _ = writeln!(output, "Category: {}", recipe.category);
    let _ = writeln!(output, "Area:     {}", recipe.area);
    let _ = writeln!(output, "Time:     {}", recipe.duration);
    let _ = writeln!(output, "Mood:     {}", recipe.mood_labels());
    if !recipe.tags.is_empty() {
        let _ = writeln!(output, "Tags:     {}", recipe.tags.join(", "));
    }
    if let Some(thumbnail) = &recipe.thumbnail {
        let _ = writeln!(output, "Image:    {}", thumbnail);
    }
    output.push('\n');

    if recipe.instructions.trim().is_empty() {
        output.push_str("No instructions available.\n");
    } else {
        for paragraph in recipe
            .instructions
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            let _ = writeln!(output, "{}", paragraph);
        }
    }

    let _ = writeln!(output, "\nSource: {}", recipe.source_url);
    output
}
