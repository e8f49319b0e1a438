use super::domain::GolfCourse;
use std::io::Write;

/// Writes `course` in the `C`/`H` line format, one `\n`-terminated record per line.
pub fn write_course<W: Write>(course: &GolfCourse, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record([
        "C".to_string(),
        course.name().to_string(),
        course.par().to_string(),
        course.hole_count().to_string(),
    ])?;

    for hole in course.holes() {
        csv_writer.write_record([
            "H".to_string(),
            hole.number().to_string(),
            hole.name().to_string(),
            hole.par().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

impl GolfCourse {
    /// The course rendered back to its text format.
    pub fn to_course_file(&self) -> Result<String, csv::Error> {
        let mut buffer = Vec::new();
        write_course(self, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| {
            csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })
    }
}
