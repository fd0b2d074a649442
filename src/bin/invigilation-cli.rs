#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use invigilation::{
    allocator::{DutyAllocator, QuotaTable},
    io,
    storage::{JsonSink, ResultSink, SheetSink},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de répartition des surveillances d'examens
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Surcharges de quotas (JSON `{"Professor": 2, ...}`)
    #[arg(long, global = true)]
    quotas: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Répartir les surveillances et écrire la feuille
    Assign {
        /// CSV `Name,Rank,CoursesTaught`
        #[arg(long)]
        teachers: String,
        /// CSV du calendrier (ligne d'horaires puis lignes d'examens)
        #[arg(long)]
        schedule: String,
        /// Lignes de titre à ignorer en tête du calendrier
        #[arg(long, default_value_t = 2)]
        skip_rows: usize,
        /// Feuille CSV de sortie
        #[arg(long)]
        out: String,
        /// Export JSON (optionnel, relisible par `check`)
        #[arg(long)]
        out_json: Option<String>,
        #[arg(
            long,
            default_value = "Invigilation List For Courses and Lab Final Exam Spring 2024"
        )]
        title: String,
    },

    /// Vérifier une liste d'affectations JSON
    Check {
        #[arg(long)]
        teachers: String,
        #[arg(long)]
        assignments: String,
        /// Export CSV des violations (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Afficher la table de quotas effective
    Quotas,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let quotas = match &cli.quotas {
        Some(path) => io::load_quota_table(path)?,
        None => QuotaTable::default(),
    };
    let allocator = DutyAllocator::new(quotas);

    let code = match cli.cmd {
        Commands::Assign {
            teachers,
            schedule,
            skip_rows,
            out,
            out_json,
            title,
        } => {
            // tout charger avant d'écrire quoi que ce soit
            let teachers = io::import_teachers_csv(&teachers)?;
            let schedule = io::import_schedule_csv(&schedule, skip_rows)?;

            let allocation = allocator.run(&teachers, &schedule);
            SheetSink::new(&out, title).write(&allocation.assignments)?;
            if let Some(path) = out_json {
                JsonSink::new(path).write(&allocation.assignments)?;
            }

            for load in &allocation.loads {
                println!(
                    "{} | {} | {}/{}{}",
                    load.name,
                    load.rank,
                    load.assigned,
                    load.quota,
                    if load.is_full() { "" } else { " (under quota)" }
                );
            }
            println!(
                "{} assignment(s) written to {}",
                allocation.assignments.len(),
                out
            );
            0
        }
        Commands::Check {
            teachers,
            assignments,
            report,
        } => {
            let teachers = io::import_teachers_csv(&teachers)?;
            let assignments = io::import_assignments_json(&assignments)?;
            let violations = allocator.audit(&teachers, &assignments);
            if violations.is_empty() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    eprintln!("#{} {} [{}] {}", v.sr_no, v.invigilator, v.kind.as_str(), v.detail);
                }
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["sr_no", "invigilator", "kind", "detail"])?;
                    for v in &violations {
                        w.write_record([
                            v.sr_no.to_string().as_str(),
                            v.invigilator.as_str(),
                            v.kind.as_str(),
                            v.detail.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Quotas => {
            for (rank, quota) in allocator.quotas().iter() {
                println!("{rank}: {quota}");
            }
            0
        }
    };

    std::process::exit(code);
}
