use crate::infra::course_parser;
use clap::Args;
use golf_scorecard::config::AppConfig;
use golf_scorecard::course::{CourseParser, GolfCourse, Golfer, HoleCountPolicy, ParseOptions};
use golf_scorecard::error::AppError;
use golf_scorecard::scorecard::{ScorecardReport, ScorecardSummary};
use golf_scorecard::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CourseShowArgs {
    /// Course file in the C/H line format
    pub(crate) path: PathBuf,
    /// Accept a header whose hole count disagrees with the hole records
    #[arg(long)]
    pub(crate) lenient: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScorecardArgs {
    /// Course file in the C/H line format
    #[arg(long)]
    pub(crate) course: PathBuf,
    /// Golfer name shown on the card and in the chart title
    #[arg(long)]
    pub(crate) golfer: String,
    /// Comma-separated strokes per hole. Every hole is scored at par when omitted.
    #[arg(long, value_delimiter = ',', value_parser = crate::infra::parse_score)]
    pub(crate) scores: Option<Vec<u32>>,
    /// Accept a header whose hole count disagrees with the hole records
    #[arg(long)]
    pub(crate) lenient: bool,
    /// Print the JSON summary instead of the table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_course_show(args: CourseShowArgs) -> Result<(), AppError> {
    let CourseShowArgs { path, lenient } = args;

    let course = cli_parser(lenient)?.from_path(path)?;
    render_course(&course);

    Ok(())
}

pub(crate) fn run_scorecard(args: ScorecardArgs) -> Result<(), AppError> {
    let ScorecardArgs {
        course,
        golfer,
        scores,
        lenient,
        json,
    } = args;

    let course = cli_parser(lenient)?.from_path(course)?;
    let golfer = match scores {
        Some(scores) => Golfer::new(golfer, scores)?,
        None => Golfer::at_par(golfer, &course),
    };
    golfer.check_alignment(&course)?;

    let summary = ScorecardReport::build(&course, &golfer)?.summary();
    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_scorecard(&course, &summary);
    }

    Ok(())
}

fn cli_parser(lenient: bool) -> Result<CourseParser, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let configured = ParseOptions::with_hole_count(config.course.hole_count_policy);
    Ok(course_parser(
        configured,
        lenient.then_some(HoleCountPolicy::Lenient),
    ))
}

pub(crate) fn render_course(course: &GolfCourse) {
    println!("Loaded course: {}", course.summary_line());
    let hole_par_total = course.hole_par_total();
    if hole_par_total != u64::from(course.par()) {
        println!(
            "Note: hole pars add up to {hole_par_total}, header declares {}",
            course.par()
        );
    }

    println!("\nFront Nine");
    for index in 0..course.front_nine().len() {
        print_prompt(course, index);
    }

    if !course.back_nine().is_empty() {
        println!("\nBack Nine");
        let offset = course.front_nine().len();
        for index in offset..offset + course.back_nine().len() {
            print_prompt(course, index);
        }
    }
}

fn print_prompt(course: &GolfCourse, index: usize) {
    if let Some(prompt) = course.score_prompt(index) {
        println!("- {}", prompt);
    }
}

pub(crate) fn render_scorecard(course: &GolfCourse, summary: &ScorecardSummary) {
    println!("Loaded course: {}", course.summary_line());
    println!(
        "Golfer: {} | Total score: {} | {}",
        summary.golfer, summary.total_score, summary.standing_label
    );

    println!("\nScorecard");
    println!("{:>4}  {:>3}  {:>5}  Category", "Hole", "Par", "Score");
    for row in &summary.rows {
        println!(
            "{:>4}  {:>3}  {:>5}  {}",
            row.hole, row.par, row.score, row.category_label
        );
    }

    if !summary.nines.is_empty() {
        println!();
        for nine in &summary.nines {
            println!(
                "{}: {} (par {}, {})",
                nine.label,
                nine.score,
                nine.par,
                format_to_par(nine.score_to_par)
            );
        }
    }

    println!("\nShot categories");
    for entry in &summary.category_tally {
        println!("- {}: {}", entry.category_label, entry.holes);
    }
}

fn format_to_par(score_to_par: i64) -> String {
    if score_to_par == 0 {
        "E".to_string()
    } else {
        format!("{score_to_par:+}")
    }
}
