use golf_scorecard::course::{CourseParser, HoleCountPolicy, ParseOptions};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds a parser from the configured options, letting a caller override the
/// hole-count policy for a single file.
pub(crate) fn course_parser(
    configured: ParseOptions,
    hole_count_override: Option<HoleCountPolicy>,
) -> CourseParser {
    let options = match hole_count_override {
        Some(policy) => ParseOptions::with_hole_count(policy),
        None => configured,
    };
    CourseParser::new(options)
}

pub(crate) fn parse_score(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(format!("score '{raw}' must be at least 1")),
        Ok(score) => Ok(score),
        Err(err) => Err(format!("failed to parse '{raw}' as a stroke count ({err})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_accepts_padded_positive_counts() {
        assert_eq!(parse_score(" 4 "), Ok(4));
        assert!(parse_score("0").is_err());
        assert!(parse_score("par").is_err());
    }

    #[test]
    fn override_replaces_configured_policy() {
        let parser = course_parser(ParseOptions::default(), Some(HoleCountPolicy::Lenient));
        assert_eq!(parser.options().hole_count, HoleCountPolicy::Lenient);

        let parser = course_parser(ParseOptions::default(), None);
        assert_eq!(parser.options().hole_count, HoleCountPolicy::Strict);
    }
}
