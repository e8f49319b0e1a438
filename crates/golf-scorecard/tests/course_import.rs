use golf_scorecard::course::{
    CourseParseError, CourseParser, GolfCourse, Hole, HoleCountPolicy, ParseOptions,
    RecordDefect, MAX_HOLES,
};

const WHISTLING_STRAITS: &str = include_str!("../whistling_straits.txt");

#[test]
fn parser_loads_full_eighteen_hole_course() {
    let course = CourseParser::default()
        .parse(WHISTLING_STRAITS)
        .expect("fixture parses");

    assert_eq!(course.name(), "Whistling Straits");
    assert_eq!(course.hole_count(), 18);
    assert_eq!(course.par(), 72);
    assert_eq!(course.holes().len(), 18);
    assert_eq!(course.hole_par_total(), 72);
    assert_eq!(course.holes()[0], Hole::new(1, "Outward Bound", 4).expect("valid hole"));
    assert_eq!(course.holes()[17], Hole::new(18, "Dyeabolical", 4).expect("valid hole"));
    assert_eq!(
        course.summary_line(),
        "Whistling Straits (18 holes, par 72)"
    );
    assert_eq!(course.front_nine().len(), 9);
    assert_eq!(course.back_nine()[0].name(), "Voyageur");
}

#[test]
fn parser_reads_course_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/whistling_straits.txt");
    let course = CourseParser::default()
        .from_path(path)
        .expect("fixture loads from disk");
    assert_eq!(course.holes().len(), 18);
}

#[test]
fn written_course_parses_back_identically() {
    let course: GolfCourse = WHISTLING_STRAITS.parse().expect("fixture parses");
    let text = course.to_course_file().expect("course serializes");
    let reparsed: GolfCourse = text.parse().expect("serialized course parses");
    assert_eq!(reparsed, course);
}

#[test]
fn hole_count_equals_number_of_hole_lines_in_file_order() {
    let text = "C,Scramble,20,5\n\
H,5,Five,4\n\
note,this line is not a record\n\
H,2,Two,4\n\
H,2,Two Again,4\n\
H,9,Nine,4\n\
H,1,One,4\n";
    let course = CourseParser::default().parse(text).expect("course parses");
    let names: Vec<&str> = course.holes().iter().map(Hole::name).collect();
    assert_eq!(names, vec!["Five", "Two", "Two Again", "Nine", "One"]);
}

#[test]
fn mismatched_hole_count_depends_on_policy() {
    let text = "C,Nine Of Eighteen,36,18\n\
H,1,A,4\nH,2,B,4\nH,3,C,4\nH,4,D,4\nH,5,E,4\nH,6,F,4\nH,7,G,4\nH,8,H,4\nH,9,I,4\n";

    let strict = CourseParser::default()
        .parse(text)
        .expect_err("strict parse rejects");
    assert_eq!(
        strict.to_string(),
        "course header declares 18 holes but 9 hole records were found"
    );

    let lenient = CourseParser::new(ParseOptions::with_hole_count(HoleCountPolicy::Lenient))
        .parse(text)
        .expect("lenient parse");
    assert_eq!(lenient.hole_count(), 18);
    assert_eq!(lenient.holes().len(), 9);
}

#[test]
fn malformed_records_report_their_line() {
    let error = CourseParser::default()
        .parse("C,Test,8,2\nH,1,One,4\nH,two,Two,4\n")
        .expect_err("bad hole number");
    assert!(matches!(error, CourseParseError::MalformedHole { line: 3, .. }));
    assert_eq!(
        error.to_string(),
        "malformed hole record on line 3: number is not an integer: 'two'"
    );
}

#[test]
fn lenient_parse_still_bounds_declared_hole_count() {
    let lenient = CourseParser::new(ParseOptions::with_hole_count(HoleCountPolicy::Lenient));

    let at_limit = format!("C,Long Day,4,{MAX_HOLES}\nH,1,A,4\n");
    let course = lenient.parse(&at_limit).expect("limit is accepted");
    assert_eq!(course.hole_count(), MAX_HOLES);

    let error = lenient
        .parse("C,Huge,4,4000000000\nH,1,A,4\n")
        .expect_err("declared count is bounded");
    assert!(matches!(
        error,
        CourseParseError::MalformedHeader {
            line: 1,
            reason: RecordDefect::OutOfRange {
                field: "hole_count",
                ..
            }
        }
    ));
}
