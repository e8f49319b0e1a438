//! Course-file parsing and scorecard analysis for a golf score tracker.
//!
//! A course description is read with [`course::CourseParser`], a golfer's card is
//! checked against it with [`scorecard::ScoreAnalyzer`], and
//! [`scorecard::ScorecardReport`] bundles the table rows and chart series a front
//! end renders.

pub mod config;
pub mod course;
pub mod error;
pub mod scorecard;
pub mod telemetry;
