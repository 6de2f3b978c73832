use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::content::{Category, CATEGORIES, RESULT_PLACEHOLDER};
use crate::scoring::{Rating, RiskTier, Scorer, TierLevel, Tone, CATEGORY_COUNT, MAX_TOTAL};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Render a rating as a five-cell bar: "███░░"
pub fn rating_bar(rating: Option<Rating>) -> String {
    let filled = rating.map_or(0, Rating::value) as usize;
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Render a rating value, `-` when unanswered
pub fn format_rating(rating: Option<Rating>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| r.to_string())
}

fn paint_tone(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Danger => text.red().bold().to_string(),
        Tone::Caution => text.yellow().bold().to_string(),
        Tone::Success => text.green().bold().to_string(),
    }
}

/// Wrap text on word boundaries to `width` columns
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Format the scorecard result: one row per category, the total, and the tier
pub fn format_report(scorer: &Scorer, use_colors: bool) -> String {
    let title_width = CATEGORIES
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0);
    let wrap_width = get_terminal_width()
        .unwrap_or(80)
        .saturating_sub(2)
        .clamp(20, 100);

    let mut lines = Vec::with_capacity(CATEGORY_COUNT + 6);

    for (idx, category) in CATEGORIES.iter().enumerate() {
        let rating = scorer.score(idx);
        let title = format!("{:<width$}", category.title, width = title_width);
        let value = format!("{:>2}", format_rating(rating));
        let bar = rating_bar(rating);
        if use_colors {
            lines.push(format!("{}. {}  {}  {}", idx + 1, title.bold(), value.cyan(), bar.cyan()));
        } else {
            lines.push(format!("{}. {}  {}  {}", idx + 1, title, value, bar));
        }
    }

    lines.push(String::new());
    let total = format!("{}/{}", scorer.total_score(), MAX_TOTAL);
    if use_colors {
        lines.push(format!("Diagnostic Score: {}", total.bold()));
    } else {
        lines.push(format!("Diagnostic Score: {}", total));
    }
    lines.push(String::new());

    match scorer.risk_tier() {
        Some(tier) => {
            let label = tier.label.to_uppercase();
            if use_colors {
                lines.push(paint_tone(&label, tier.tone));
            } else {
                lines.push(label);
            }
            lines.extend(wrap_text(tier.description, wrap_width));
        }
        None => lines.push(RESULT_PLACEHOLDER.to_string()),
    }

    lines.join("\n")
}

/// Format the six categories with their traditional and AI-powered flows
pub fn format_categories(use_colors: bool) -> String {
    let wrap_width = get_terminal_width()
        .unwrap_or(80)
        .saturating_sub(4)
        .clamp(20, 100);

    CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, category)| format_category(idx, category, wrap_width, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_category(idx: usize, category: &Category, wrap_width: usize, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let heading = format!("{}. {}", idx + 1, category.title);
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });

    let sections = [
        ("Traditional Flow", category.manual),
        ("AI-Powered Flow", category.ai_first),
    ];
    for (label, text) in sections {
        lines.push(if use_colors {
            format!("  {}", label.dimmed())
        } else {
            format!("  {}", label)
        });
        lines.extend(wrap_text(text, wrap_width).into_iter().map(|l| format!("    {}", l)));
    }

    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct TierReport {
    level: TierLevel,
    label: &'static str,
    description: &'static str,
}

impl From<&RiskTier> for TierReport {
    fn from(tier: &RiskTier) -> Self {
        Self {
            level: tier.level,
            label: tier.label,
            description: tier.description,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport {
    scores: [u8; CATEGORY_COUNT],
    answered: usize,
    total: u32,
    max: u32,
    tier: Option<TierReport>,
}

/// Format the result as pretty JSON. Unanswered categories are reported as 0.
pub fn format_json(scorer: &Scorer) -> serde_json::Result<String> {
    let report = JsonReport {
        scores: scorer.raw_scores(),
        answered: scorer.answered_count(),
        total: scorer.total_score(),
        max: MAX_TOTAL,
        tier: scorer.risk_tier().map(TierReport::from),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::parse_answers;

    fn scorer(args: &[&str]) -> Scorer {
        Scorer::with_scores(parse_answers(args).unwrap())
    }

    #[test]
    fn test_rating_bar() {
        assert_eq!(rating_bar(None), "░░░░░");
        assert_eq!(rating_bar(Some(Rating::new(3).unwrap())), "███░░");
        assert_eq!(rating_bar(Some(Rating::new(5).unwrap())), "█████");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(None), "-");
        assert_eq!(format_rating(Some(Rating::new(4).unwrap())), "4");
    }

    #[test]
    fn test_report_without_answers() {
        let result = format_report(&Scorer::new(), false);
        assert!(result.contains("Diagnostic Score: 0/30"));
        assert!(result.contains(RESULT_PLACEHOLDER));
        assert!(result.contains("CRM & Pipeline Hygiene"));
    }

    #[test]
    fn test_report_with_tier() {
        let result = format_report(&scorer(&["3", "3", "3", "3", "3", "2"]), false);
        assert!(result.contains("Diagnostic Score: 17/30"));
        assert!(result.contains("THE EFFICIENCY TRAP"));
        assert!(result.contains("graveyard"));
        assert!(!result.contains(RESULT_PLACEHOLDER));
    }

    #[test]
    fn test_report_marks_unanswered() {
        let result = format_report(&scorer(&["5"]), false);
        let lines: Vec<&str> = result.lines().collect();
        assert!(lines[0].contains(" 5  █████"));
        assert!(lines[1].contains(" -  ░░░░░"));
        assert!(result.contains("OPERATIONAL DEBT RISK"));
    }

    #[test]
    fn test_format_categories_lists_both_flows() {
        let result = format_categories(false);
        assert!(result.contains("1. CRM & Pipeline Hygiene"));
        assert!(result.contains("6. Lead Response Time"));
        assert_eq!(result.matches("Traditional Flow").count(), CATEGORY_COUNT);
        assert_eq!(result.matches("AI-Powered Flow").count(), CATEGORY_COUNT);
    }

    #[test]
    fn test_json_without_tier() {
        let json = format_json(&Scorer::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["max"], 30);
        assert!(value["tier"].is_null());
    }

    #[test]
    fn test_json_with_tier() {
        let json = format_json(&scorer(&["5", "5", "5", "5", "1", "-"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scores"], serde_json::json!([5, 5, 5, 5, 1, 0]));
        assert_eq!(value["answered"], 5);
        assert_eq!(value["total"], 21);
        assert_eq!(value["tier"]["level"], "ai_first_leader");
        assert_eq!(value["tier"]["label"], "AI-First Sales Leader");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }
}
