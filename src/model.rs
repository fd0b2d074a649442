use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Grade d'un enseignant ; tout intitulé inconnu retombe sur `Others`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Professor,
    ProfessorHod,
    AssociateProfessor,
    AssistantProfessor,
    Others,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Professor,
        Rank::ProfessorHod,
        Rank::AssociateProfessor,
        Rank::AssistantProfessor,
        Rank::Others,
    ];

    /// Intitulé exact tel qu'il apparaît dans la liste du personnel.
    pub fn title(self) -> &'static str {
        match self {
            Rank::Professor => "Professor",
            Rank::ProfessorHod => "Professor & HOD",
            Rank::AssociateProfessor => "Associate Professor",
            Rank::AssistantProfessor => "Assistant Professor",
            Rank::Others => "Others",
        }
    }

    /// Correspondance exacte (après trim) ; `None` si l'intitulé est inconnu.
    pub fn from_known_title(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Rank::ALL.into_iter().find(|r| r.title() == raw)
    }

    pub fn from_title(raw: &str) -> Self {
        Self::from_known_title(raw).unwrap_or(Rank::Others)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Codes des cours enseignés (surveillance interdite).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSet(BTreeSet<String>);

impl CourseSet {
    /// Liste séparée par des virgules, sans trim des codes : `"A, B"` donne
    /// `"A"` et `" B"`. Comparaison par code entier, jamais en sous-chaîne.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Enseignant (surveillant potentiel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub name: String,
    pub rank: Rank,
    pub courses_taught: CourseSet,
}

impl Teacher {
    pub fn new<N: Into<String>>(name: N, rank: Rank, courses_taught: &str) -> Self {
        Self {
            name: name.into(),
            rank,
            courses_taught: CourseSet::parse(courses_taught),
        }
    }

    pub fn teaches(&self, course_code: &str) -> bool {
        self.courses_taught.contains(course_code)
    }
}

/// Épreuve d'une demi-journée (code vide = pas d'épreuve).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub course_code: String,
    pub course_name: String,
}

impl Session {
    pub fn new<C: Into<String>, N: Into<String>>(course_code: C, course_name: N) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
        }
    }
}

/// Ligne du calendrier d'examens : sessions du matin puis de l'après-midi.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamSlot {
    pub day: String,
    pub date: String,
    pub sessions: [Session; 2],
    pub section: String,
    pub venue: String,
}

/// Horaires (matin, après-midi) lus une seule fois sur la ligne d'en-tête.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLabels {
    pub morning: String,
    pub afternoon: String,
}

impl TimeLabels {
    pub fn for_session(&self, index: usize) -> &str {
        if index == 0 {
            &self.morning
        } else {
            &self.afternoon
        }
    }
}

const COL_DAY: usize = 0;
const COL_DATE: usize = 1;
const COL_MORNING_CODE: usize = 2;
const COL_MORNING_NAME: usize = 3;
const COL_AFTERNOON_CODE: usize = 4;
const COL_AFTERNOON_NAME: usize = 5;
const COL_SECTION: usize = 6;
const COL_VENUE: usize = 7;

/// Calendrier complet : horaires globaux + lignes d'examens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub labels: TimeLabels,
    pub slots: Vec<ExamSlot>,
}

impl Schedule {
    /// Construit le calendrier depuis les lignes brutes.
    ///
    /// La première ligne ne porte pas d'épreuve : ses colonnes « nom du cours »
    /// (matin, après-midi) donnent les horaires appliqués à toutes les lignes.
    /// Les cellules manquantes valent `""`.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<C>>,
        C: AsRef<str>,
    {
        let mut rows = rows.into_iter();
        let Some(header) = rows.next() else {
            return Self::default();
        };
        let labels = TimeLabels {
            morning: cell(&header, COL_MORNING_NAME),
            afternoon: cell(&header, COL_AFTERNOON_NAME),
        };
        let slots = rows
            .map(|row| ExamSlot {
                day: cell(&row, COL_DAY),
                date: cell(&row, COL_DATE),
                sessions: [
                    Session::new(cell(&row, COL_MORNING_CODE), cell(&row, COL_MORNING_NAME)),
                    Session::new(
                        cell(&row, COL_AFTERNOON_CODE),
                        cell(&row, COL_AFTERNOON_NAME),
                    ),
                ],
                section: cell(&row, COL_SECTION),
                venue: cell(&row, COL_VENUE),
            })
            .collect();
        Self { labels, slots }
    }
}

fn cell<C: AsRef<str>>(row: &[C], idx: usize) -> String {
    row.get(idx)
        .map(|c| c.as_ref().trim().to_string())
        .unwrap_or_default()
}

/// Surveillance attribuée (une ligne du résultat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Assignment {
    pub sr_no: usize,
    pub day: String,
    pub date: String,
    pub course_code: String,
    pub course_name: String,
    pub section: String,
    pub venue: String,
    pub time: String,
    pub invigilator: String,
}
