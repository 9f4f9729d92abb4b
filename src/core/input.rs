//! Course file loading
//!
//! Transcripts are read from TOML (`[[course]]` tables) or CSV (one course
//! per row, header `id,name,grade,category,credits,semester,subject_approved,grade_level`).
//! This is the trust boundary: labels are parsed leniently, but anything the
//! engine cannot represent (unknown grades, negative credits, duplicate ids) is
//! rejected with the offending row.

use crate::core::models::{Course, CourseCategory, Grade, GradeLevel};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Errors raised while loading a course file
#[derive(Debug)]
pub enum InputError {
    /// The file could not be read
    Io(std::io::Error),
    /// The TOML document is malformed
    Toml(toml::de::Error),
    /// A CSV record is malformed
    Csv(csv::Error),
    /// The file extension is not `.toml` or `.csv`
    UnsupportedFormat(String),
    /// A field holds a value that cannot be interpreted
    InvalidField {
        /// 1-based course row
        row: usize,
        /// Field name
        field: &'static str,
        /// What was wrong
        message: String,
    },
    /// Credits are negative, NaN or infinite
    InvalidCredits {
        /// 1-based course row
        row: usize,
        /// The rejected value
        credits: f64,
    },
    /// Two courses share an id
    DuplicateId {
        /// 1-based course row of the second occurrence
        row: usize,
        /// The repeated id
        id: String,
    },
    /// Courses could not be serialized
    Serialize(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read course file: {err}"),
            Self::Toml(err) => write!(f, "invalid TOML course file: {err}"),
            Self::Csv(err) => write!(f, "invalid CSV course file: {err}"),
            Self::UnsupportedFormat(ext) => {
                write!(f, "unsupported course file format '{ext}' (expected .toml or .csv)")
            }
            Self::InvalidField {
                row,
                field,
                message,
            } => write!(f, "row {row}: invalid {field}: {message}"),
            Self::InvalidCredits { row, credits } => write!(
                f,
                "row {row}: credits must be a finite, non-negative number (got {credits})"
            ),
            Self::DuplicateId { row, id } => write!(f, "row {row}: duplicate course id '{id}'"),
            Self::Serialize(err) => write!(f, "could not serialize courses: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Serialize(_)
            | Self::UnsupportedFormat(_)
            | Self::InvalidField { .. }
            | Self::InvalidCredits { .. }
            | Self::DuplicateId { .. } => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for InputError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Supported course file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFormat {
    /// `[[course]]` tables
    Toml,
    /// Header row plus one course per line
    Csv,
}

impl CourseFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    /// Returns [`InputError::UnsupportedFormat`] for anything but `.toml` / `.csv`
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "csv" => Ok(Self::Csv),
            _ => Err(InputError::UnsupportedFormat(ext)),
        }
    }
}

/// One course as written in a file, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CourseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credits: Option<f64>,
    #[serde(default, alias = "semester_id", skip_serializing_if = "Option::is_none")]
    semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject_approved: Option<bool>,
    #[serde(
        default,
        deserialize_with = "level_cell",
        skip_serializing_if = "Option::is_none"
    )]
    grade_level: Option<String>,
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            id: Some(course.id.clone()),
            name: course.name.clone(),
            grade: course.grade.label().to_string(),
            category: Some(course.category.key().to_string()),
            credits: Some(course.credits),
            semester: (!course.semester_id.is_empty()).then(|| course.semester_id.clone()),
            subject_approved: course.subject_approved,
            grade_level: course.grade_level.map(|level| level.to_string()),
        }
    }
}

/// Reads a grade level cell as text so range errors surface in `validate`
struct LevelCellVisitor;

impl<'de> Visitor<'de> for LevelCellVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a grade level number or label")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }
}

fn level_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    deserializer.deserialize_option(LevelCellVisitor)
}

/// CSV output row; every column is always present so the header stays fixed
#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    grade: &'static str,
    category: &'static str,
    credits: f64,
    semester: &'a str,
    subject_approved: Option<bool>,
    grade_level: Option<u8>,
}

impl<'a> From<&'a Course> for CsvRow<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            id: &course.id,
            name: &course.name,
            grade: course.grade.label(),
            category: course.category.key(),
            credits: course.credits,
            semester: &course.semester_id,
            subject_approved: course.subject_approved,
            grade_level: course.grade_level.map(GradeLevel::number),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CourseFile {
    #[serde(default)]
    course: Vec<CourseRecord>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fallback id for a row without one: `c<row>`, suffixed until it is unused
fn generated_id(row: usize, explicit: &HashSet<String>, seen: &HashSet<String>) -> String {
    let base = format!("c{row}");
    let mut candidate = base.clone();
    let mut suffix = 2;
    while explicit.contains(&candidate) || seen.contains(&candidate) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }
    candidate
}

/// Turn raw records into validated courses
fn validate(records: Vec<CourseRecord>) -> Result<Vec<Course>, InputError> {
    let explicit: HashSet<String> = records
        .iter()
        .filter_map(|record| record.id.as_deref())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    let mut seen = HashSet::new();
    let mut courses = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let row = index + 1;

        let name = record.name.trim();
        if name.is_empty() {
            return Err(InputError::InvalidField {
                row,
                field: "name",
                message: "name must not be empty".to_string(),
            });
        }

        let grade: Grade = record
            .grade
            .parse()
            .map_err(|message| InputError::InvalidField {
                row,
                field: "grade",
                message,
            })?;

        let category = match non_blank(record.category) {
            Some(label) => label
                .parse::<CourseCategory>()
                .map_err(|message| InputError::InvalidField {
                    row,
                    field: "category",
                    message,
                })?,
            None => CourseCategory::Standard,
        };

        let credits = record.credits.unwrap_or(1.0);
        if !credits.is_finite() || credits < 0.0 {
            return Err(InputError::InvalidCredits { row, credits });
        }

        let grade_level = match non_blank(record.grade_level) {
            Some(label) => Some(label.parse::<GradeLevel>().map_err(|message| {
                InputError::InvalidField {
                    row,
                    field: "grade_level",
                    message,
                }
            })?),
            None => None,
        };

        let id = non_blank(record.id).unwrap_or_else(|| generated_id(row, &explicit, &seen));
        if !seen.insert(id.clone()) {
            return Err(InputError::DuplicateId { row, id });
        }

        let mut course = Course::new(id, name, grade, category, credits);
        course.semester_id = non_blank(record.semester).unwrap_or_default();
        course.subject_approved = record.subject_approved;
        course.grade_level = grade_level;
        courses.push(course);
    }

    Ok(courses)
}

/// Parse courses from a TOML document
///
/// # Errors
/// Returns an error if the document is malformed or a course fails validation
pub fn parse_toml(content: &str) -> Result<Vec<Course>, InputError> {
    let file: CourseFile = toml::from_str(content)?;
    validate(file.course)
}

/// Parse courses from CSV with a header row
///
/// Missing optional columns are allowed; empty cells count as absent.
///
/// # Errors
/// Returns an error if a record is malformed or a course fails validation
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Course>, InputError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: CourseRecord = result?;
        records.push(record);
    }

    validate(records)
}

/// Load courses from a `.toml` or `.csv` file
///
/// # Arguments
/// * `path` - Course file; the extension selects the format
///
/// # Errors
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or contains an invalid course
pub fn load_courses<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, InputError> {
    let path = path.as_ref();
    match CourseFormat::from_path(path)? {
        CourseFormat::Toml => parse_toml(&fs::read_to_string(path)?),
        CourseFormat::Csv => parse_csv(fs::File::open(path)?),
    }
}

/// Serialize courses as a TOML course file
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_toml(courses: &[Course]) -> Result<String, InputError> {
    let file = CourseFile {
        course: courses.iter().map(CourseRecord::from).collect(),
    };
    toml::to_string(&file).map_err(|e| InputError::Serialize(e.to_string()))
}

/// Serialize courses as CSV with the standard header row
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_csv(courses: &[Course]) -> Result<String, InputError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    for course in courses {
        writer.serialize(CsvRow::from(course))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| InputError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| InputError::Serialize(e.to_string()))
}
