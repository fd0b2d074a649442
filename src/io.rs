use crate::allocator::QuotaTable;
use crate::model::{Assignment, Rank, Schedule, Teacher};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// En-tête de la feuille de surveillance (la colonne `No` reste vide).
pub const SHEET_HEADER: [&str; 10] = [
    "Sr. No.",
    "Day",
    "Date",
    "Course Code",
    "Course Name",
    "Sec.",
    "No",
    "Venue",
    "Time",
    "Invigilator",
];

#[derive(Debug, Deserialize)]
struct TeacherRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Rank", default)]
    rank: String,
    #[serde(rename = "CoursesTaught", default)]
    courses_taught: String,
}

/// Import du personnel depuis CSV: header `Name,Rank,CoursesTaught`
///
/// Un grade inconnu n'est pas une erreur : il prend le quota `Others`.
pub fn import_teachers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Teacher>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening roster {}", path.display()))?;
    let mut out = Vec::new();
    for (idx, rec) in rdr.deserialize::<TeacherRecord>().enumerate() {
        // ligne 1 = en-tête
        let line = idx + 2;
        let rec = rec.with_context(|| format!("invalid roster row at line {line}"))?;
        if rec.name.is_empty() {
            bail!("invalid roster row at line {line} (empty Name)");
        }
        if Rank::from_known_title(&rec.rank).is_none() {
            warn!(teacher = %rec.name, rank = %rec.rank, "unrecognized rank, using Others quota");
        }
        out.push(Teacher::new(
            rec.name,
            Rank::from_title(&rec.rank),
            &rec.courses_taught,
        ));
    }
    Ok(out)
}

/// Import du calendrier: lignes brutes sans en-tête nommé.
///
/// `skip_rows` lignes de préambule (titres) sont ignorées ; la ligne suivante
/// porte les horaires, les autres sont des lignes d'examens.
pub fn import_schedule_csv<P: AsRef<Path>>(path: P, skip_rows: usize) -> anyhow::Result<Schedule> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening schedule {}", path.display()))?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("invalid schedule row at line {}", idx + 1))?;
        if idx < skip_rows {
            continue;
        }
        rows.push(rec.iter().map(str::to_owned).collect());
    }
    if rows.is_empty() {
        bail!("schedule {} has no time-label row", path.display());
    }
    Ok(Schedule::from_rows(rows))
}

/// Surcharges de quotas: objet JSON `{"Professor": 2, ...}`
pub fn load_quota_table<P: AsRef<Path>>(path: P) -> anyhow::Result<QuotaTable> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading quota file {}", path.display()))?;
    let table = QuotaTable::from_json_str(&raw)
        .with_context(|| format!("parsing quota file {}", path.display()))?;
    Ok(table)
}

/// Rendu de la feuille: titre, ligne vide, en-tête, puis pour chaque
/// affectation une ligne de données suivie du nom du surveillant seul.
pub fn write_invigilation_sheet<W: Write>(
    mut out: W,
    title: &str,
    assignments: &[Assignment],
) -> anyhow::Result<()> {
    {
        let mut w = sheet_writer(&mut out);
        w.write_record([title])?;
        w.flush()?;
    }
    // ligne vide entre le titre et l'en-tête
    out.write_all(b"\n")?;

    let mut w = sheet_writer(&mut out);
    w.write_record(SHEET_HEADER)?;

    let mut sr_no = itoa::Buffer::new();
    for a in assignments {
        w.write_record([
            sr_no.format(a.sr_no),
            a.day.as_str(),
            a.date.as_str(),
            a.course_code.as_str(),
            a.course_name.as_str(),
            a.section.as_str(),
            "",
            a.venue.as_str(),
            a.time.as_str(),
            a.invigilator.as_str(),
        ])?;
        w.write_record([a.invigilator.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

fn sheet_writer<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Export JSON des affectations (jolie mise en forme)
pub fn write_assignments_json<W: Write>(out: W, assignments: &[Assignment]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(out, assignments)?;
    Ok(())
}

pub fn import_assignments_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Assignment>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let assignments: Vec<Assignment> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing assignments {}", path.display()))?;
    Ok(assignments)
}
