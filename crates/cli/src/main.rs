use clap::{Parser, Subcommand, ValueEnum};
use flydoc_core::config::{catalog_from_env_value, flight_context_from_env_values};
use flydoc_core::guidance::quick_reference;
use flydoc_core::{
    Case, GuidanceGenerator, PatientContext, Report, ReportCompiler, TriageConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flydoc")]
#[command(about = "In-flight medical triage assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the symptom catalog
    Catalog,
    /// Assess a selection of symptoms and show guidance
    Assess {
        /// Symptom ids from the catalog
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Compile a handoff report for a selection of symptoms
    Report {
        /// Symptom ids from the catalog
        #[arg(required = true)]
        ids: Vec<String>,
        /// Archive the case after compiling the report
        #[arg(long)]
        submit: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the quick-reference guidelines
    Guidelines,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Yaml,
    Json,
}

/// Resolves configuration from the environment.
///
/// # Environment Variables
/// - `FLYDOC_FLIGHT_NUMBER`: flight number for reports (default: "SV123")
/// - `FLYDOC_AIRCRAFT`: aircraft type for reports (default: "Boeing 777")
/// - `FLYDOC_CATALOG`: path to a YAML symptom catalog (default: built-in catalog)
fn config_from_env() -> anyhow::Result<TriageConfig> {
    let catalog = catalog_from_env_value(std::env::var("FLYDOC_CATALOG").ok())?;
    let flight = flight_context_from_env_values(
        std::env::var("FLYDOC_FLIGHT_NUMBER").ok(),
        std::env::var("FLYDOC_AIRCRAFT").ok(),
    );
    tracing::debug!(
        "resolved {} catalog symptoms for flight {}",
        catalog.len(),
        flight.flight_number
    );
    Ok(TriageConfig::new(catalog, flight, PatientContext::default()))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flydoc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = config_from_env()?;

    match cli.command {
        Some(Commands::Catalog) => {
            for symptom in cfg.catalog().symptoms() {
                let marker = if symptom.critical() { " (critical)" } else { "" };
                println!("{:>4}  {}{}", symptom.id(), symptom.name(), marker);
            }
        }
        Some(Commands::Assess { ids }) => {
            let case = cfg.case_manager().create(&ids)?;
            print_case(&case);

            let guidance = GuidanceGenerator::generate(case.severity(), case.symptoms());
            println!();
            println!("Guidance ({} pathway):", guidance.pathway);
            for step in &guidance.steps {
                println!("  {}. {}", step.number, step.instruction);
            }
            println!();
            println!("{}", guidance.reassess_note);
        }
        Some(Commands::Report {
            ids,
            submit,
            format,
        }) => {
            let mut manager = cfg.case_manager();
            let case = manager.create(&ids)?;
            let report = ReportCompiler::compile(&case, cfg.flight(), cfg.patient());

            match format {
                Format::Text => print_report(&report),
                Format::Yaml => print!("{}", serde_yaml::to_string(&report)?),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            if submit {
                manager.save(case)?;

                eprintln!("Case log ({} entries):", manager.store().len());
                for entry in manager.store().list() {
                    eprintln!(
                        "  {}  {}  {}  [{}]",
                        entry.id(),
                        entry.status(),
                        entry.severity(),
                        entry.symptoms().join(", ")
                    );
                }
            }
        }
        Some(Commands::Guidelines) => {
            for section in quick_reference() {
                println!("{}", section.title);
                for item in section.items {
                    println!("  - {}", item);
                }
            }
        }
        None => {
            println!("Use 'flydoc --help' for commands");
        }
    }

    Ok(())
}

fn print_case(case: &Case) {
    println!("Case:     {}", case.id());
    println!("Created:  {}", case.created_at().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Severity: {}", case.severity());
    println!("Status:   {}", case.status());
    println!("Symptoms: {}", case.symptoms().join(", "));
}

fn print_report(report: &Report) {
    let case = report.case();
    let flight = report.flight();
    let patient = report.patient();

    println!("Medical report - in-flight emergency");
    println!();
    println!("Flight");
    println!("  Date:     {}", case.created_at().format("%Y-%m-%d"));
    println!("  Time:     {}", case.created_at().format("%H:%M:%S UTC"));
    println!("  Flight:   {}", flight.flight_number);
    println!("  Aircraft: {}", flight.aircraft);
    println!();
    println!("Patient");
    println!("  Age:       {}", patient.age);
    println!("  Sex:       {}", patient.sex);
    println!("  Seat:      {}", patient.seat);
    println!("  Condition: {}", patient.condition);
    println!();
    println!("Recorded symptoms");
    for symptom in case.symptoms() {
        println!("  - {}", symptom);
    }
    println!();
    println!("Assessment");
    println!("  Severity:        {}", case.severity());
    println!("  Actions taken:   {}", report.actions_taken());
    println!("  Recommendations: {}", report.recommendations());
    println!();
    println!("Notes for the ground medical team");
    println!("  {}", report.narrative());
}
