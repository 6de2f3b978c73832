use super::rating::Rating;
use super::scorer::{ScoreSet, CATEGORY_COUNT};

/// Parse command-line answers into a score set.
///
/// Accepts `1`-`5` per category, with `0` or `-` marking an unanswered one.
/// Missing trailing answers stay unanswered.
/// Returns all validation errors at once (not just the first).
pub fn parse_answers<S: AsRef<str>>(args: &[S]) -> Result<ScoreSet, Vec<String>> {
    let mut errors = Vec::new();
    let mut scores = ScoreSet::new();

    if args.len() > CATEGORY_COUNT {
        errors.push(format!(
            "answers: expected at most {} values, got {}",
            CATEGORY_COUNT,
            args.len()
        ));
    }

    for (i, arg) in args.iter().enumerate().take(CATEGORY_COUNT) {
        let arg = arg.as_ref().trim();
        if arg == "-" || arg == "0" {
            continue;
        }
        match Rating::parse(arg) {
            Ok(rating) => scores.set(i, rating),
            Err(e) => errors.push(format!("answers[{}]: invalid '{}' - {}", i, arg, e)),
        }
    }

    if errors.is_empty() {
        Ok(scores)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_answer_set() {
        let scores = parse_answers(&["1", "2", "3", "4", "5", "5"]).unwrap();
        assert_eq!(scores.total(), 20);
        assert_eq!(scores.answered(), 6);
    }

    #[test]
    fn test_empty_answers() {
        let empty: [&str; 0] = [];
        let scores = parse_answers(&empty).unwrap();
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.answered(), 0);
    }

    #[test]
    fn test_unanswered_markers() {
        let scores = parse_answers(&["-", "0", "4"]).unwrap();
        assert_eq!(scores.raw(), [0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_scale_value() {
        let errors = parse_answers(&["3", "7"]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("answers[1]"));
        assert!(errors[0].contains("'7'"));
    }

    #[test]
    fn test_too_many_answers() {
        let errors = parse_answers(&["1", "1", "1", "1", "1", "1", "1"]).unwrap_err();
        assert!(errors[0].contains("at most 6"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = parse_answers(&["x", "3", "9", "1", "1", "1", "1"]).unwrap_err();
        // Too many values, plus two bad entries
        assert_eq!(errors.len(), 3);
    }
}
