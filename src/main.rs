//! preptrack - command-line client for the interview-preparation tracker
//!
//! Talks to the tracker's REST API: a summary dashboard, list/add for every
//! tracked-item domain, and the narrow actions (favorite, attempt, resolve,
//! seed) the backend exposes alongside plain CRUD.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use preptrack::client::{
    Catalog, DsaClient, InterviewClient, StudySessionClient, TopicClient, WeakAreaClient,
};
use preptrack::config::{self, Config};
use preptrack::dashboard::Dashboard;
use preptrack::models::{AttemptInput, DsaProblem, MockInterview, StudySession, Topic, WeakArea};
use preptrack::transport::Transport;

#[derive(Parser)]
#[command(name = "preptrack")]
#[command(about = "Command-line client for the interview-preparation tracker")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file and environment)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// A tracked-item domain, by its API path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Domain {
    Dsa,
    SystemDesign,
    Azure,
    Oop,
    Csharp,
    AspNetCore,
    SqlServer,
    DesignPattern,
    Interview,
    WeakArea,
    StudySession,
}

impl Domain {
    fn catalog(self) -> Option<Catalog> {
        match self {
            Domain::SystemDesign => Some(Catalog::SystemDesign),
            Domain::Azure => Some(Catalog::Azure),
            Domain::Oop => Some(Catalog::Oop),
            Domain::Csharp => Some(Catalog::CSharp),
            Domain::AspNetCore => Some(Catalog::AspNetCore),
            Domain::SqlServer => Some(Catalog::SqlServer),
            Domain::DesignPattern => Some(Catalog::DesignPattern),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary dashboard
    Dashboard,

    /// List items in a domain, optionally filtered
    List {
        domain: Domain,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// DSA only
        #[arg(long)]
        difficulty: Option<String>,

        /// Interview/study-session type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Interviews only
        #[arg(long)]
        company: Option<String>,

        /// Weak areas only
        #[arg(long)]
        resolved: Option<bool>,

        /// Study sessions: start of the time range (ISO-8601)
        #[arg(long)]
        from: Option<String>,

        /// Study sessions: end of the time range (ISO-8601)
        #[arg(long)]
        to: Option<String>,
    },

    /// Add an item to a domain
    Add {
        domain: Domain,

        /// Title (DSA problems and topics)
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Interview/study-session type
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// Weak-area name
        #[arg(long)]
        area: Option<String>,

        #[arg(long)]
        severity: Option<String>,

        /// Study-session length in minutes
        #[arg(long)]
        minutes: Option<i32>,

        /// Study-session topic
        #[arg(long)]
        topic: Option<String>,
    },

    /// Toggle an item's favorite flag
    Favorite { domain: Domain, id: i64 },

    /// Record an attempt on a DSA problem
    Attempt {
        id: i64,

        #[arg(long)]
        minutes: i32,

        /// The solution was optimal
        #[arg(long)]
        optimal: bool,

        #[arg(long)]
        status: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark a weak area resolved
    Resolve { id: i64 },

    /// Delete an item (interviews and weak areas)
    Remove { domain: Domain, id: i64 },

    /// Populate demo data for a domain
    Seed { domain: Domain },

    /// Initialize a new config file
    Init {
        /// Output path for config file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preptrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Init { output } = &cli.command {
        let path = match output {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let cfg = Config::default();
        cfg.save_to(&path)?;

        println!("Created config file: {}", path.display());
        println!();
        println!("Point api.base_url at your tracker deployment, or set");
        println!("PREPTRACK_API_URL. The default targets a local backend at");
        println!("{}.", config::DEFAULT_BASE_URL);
        return Ok(());
    }

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // CLI flag > env var > config file > compiled default
    let base_url = match &cli.api_url {
        Some(url) => url.clone(),
        None => cfg.resolved_base_url(),
    };
    let transport = Transport::new(base_url);

    run(cli.command, transport).await
}

async fn run(command: Commands, transport: Transport) -> Result<()> {
    match command {
        Commands::Init { .. } => unreachable!("handled before config load"),

        Commands::Dashboard => {
            let dashboard = Dashboard::load(&transport).await;
            print!("{}", dashboard.render());
            Ok(())
        }

        Commands::List {
            domain,
            category,
            status,
            difficulty,
            kind,
            company,
            resolved,
            from,
            to,
        } => {
            list(
                transport, domain, category, status, difficulty, kind, company, resolved, from, to,
            )
            .await
        }

        Commands::Add {
            domain,
            title,
            category,
            difficulty,
            status,
            notes,
            tags,
            kind,
            company,
            area,
            severity,
            minutes,
            topic,
        } => {
            add(
                transport, domain, title, category, difficulty, status, notes, tags, kind,
                company, area, severity, minutes, topic,
            )
            .await
        }

        Commands::Favorite { domain, id } => {
            let flagged = match domain.catalog() {
                Some(catalog) => {
                    TopicClient::new(transport, catalog)
                        .toggle_favorite(id)
                        .await?
                        .is_favorite
                }
                None if domain == Domain::Dsa => {
                    DsaClient::new(transport).toggle_favorite(id).await?.is_favorite
                }
                None => bail!("favorite is not available for this domain"),
            };
            println!(
                "Item {} is {} a favorite",
                id,
                if flagged { "now" } else { "no longer" }
            );
            Ok(())
        }

        Commands::Attempt {
            id,
            minutes,
            optimal,
            status,
            notes,
        } => {
            let problem = DsaClient::new(transport)
                .record_attempt(
                    id,
                    &AttemptInput {
                        time_taken_minutes: minutes,
                        solved_optimally: optimal,
                        status,
                        notes,
                    },
                )
                .await?;
            println!(
                "Recorded attempt {} on '{}' (status: {})",
                problem.attempt_count, problem.title, problem.status
            );
            if let Some(next) = problem.next_review_date {
                println!("Next review: {next}");
            }
            Ok(())
        }

        Commands::Resolve { id } => {
            let area = WeakAreaClient::new(transport).resolve(id).await?;
            println!("Resolved '{}'", area.area);
            if let Some(at) = area.resolved_at {
                println!("Resolved at: {at}");
            }
            Ok(())
        }

        Commands::Remove { domain, id } => {
            match domain {
                Domain::Interview => InterviewClient::new(transport).remove(id).await?,
                Domain::WeakArea => WeakAreaClient::new(transport).remove(id).await?,
                _ => bail!("remove is only available for interviews and weak areas"),
            }
            println!("Removed item {id}");
            Ok(())
        }

        Commands::Seed { domain } => {
            let outcome = match domain.catalog() {
                Some(catalog) => TopicClient::new(transport, catalog).seed().await?,
                None if domain == Domain::Dsa => DsaClient::new(transport).seed().await?,
                None => bail!("seed is not available for this domain"),
            };
            println!("{}", outcome.message);
            Ok(())
        }
    }
}

/// Reject filter flags the domain's endpoint does not accept.
fn reject_filters(domain: Domain, unsupported: &[(&str, bool)]) -> Result<()> {
    for (flag, is_set) in unsupported {
        if *is_set {
            bail!("--{flag} does not apply to {domain:?} listings");
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn list(
    transport: Transport,
    domain: Domain,
    category: Option<String>,
    status: Option<String>,
    difficulty: Option<String>,
    kind: Option<String>,
    company: Option<String>,
    resolved: Option<bool>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    match domain {
        Domain::Dsa => {
            reject_filters(
                domain,
                &[
                    ("type", kind.is_some()),
                    ("company", company.is_some()),
                    ("resolved", resolved.is_some()),
                    ("from", from.is_some()),
                    ("to", to.is_some()),
                ],
            )?;
            let problems = DsaClient::new(transport)
                .list(category.as_deref(), difficulty.as_deref(), status.as_deref())
                .await?;
            for p in &problems {
                println!(
                    "{:>4}  {:<28} {:<12} {:<10} {}{}",
                    p.id.unwrap_or_default(),
                    p.title,
                    p.category,
                    p.difficulty,
                    p.status,
                    if p.is_favorite { "  *" } else { "" }
                );
            }
            println!("{} problem(s)", problems.len());
        }

        Domain::Interview => {
            reject_filters(
                domain,
                &[
                    ("category", category.is_some()),
                    ("status", status.is_some()),
                    ("difficulty", difficulty.is_some()),
                    ("resolved", resolved.is_some()),
                    ("from", from.is_some()),
                    ("to", to.is_some()),
                ],
            )?;
            let interviews = InterviewClient::new(transport)
                .list(kind.as_deref(), company.as_deref())
                .await?;
            for i in &interviews {
                println!(
                    "{:>4}  {:<20} {:<16} {}",
                    i.id.unwrap_or_default(),
                    i.company,
                    i.interview_type,
                    i.overall_score
                        .map(|s| format!("score {s:.1}"))
                        .unwrap_or_else(|| "not scored".to_string())
                );
            }
            println!("{} interview(s)", interviews.len());
        }

        Domain::WeakArea => {
            reject_filters(
                domain,
                &[
                    ("category", category.is_some()),
                    ("status", status.is_some()),
                    ("difficulty", difficulty.is_some()),
                    ("type", kind.is_some()),
                    ("company", company.is_some()),
                    ("from", from.is_some()),
                    ("to", to.is_some()),
                ],
            )?;
            let areas = WeakAreaClient::new(transport).list(resolved).await?;
            for a in &areas {
                println!(
                    "{:>4}  [{}] {:<28} {} {}",
                    a.id.unwrap_or_default(),
                    a.severity,
                    a.area,
                    a.category,
                    if a.resolved { "(resolved)" } else { "" }
                );
            }
            println!("{} weak area(s)", areas.len());
        }

        Domain::StudySession => {
            reject_filters(
                domain,
                &[
                    ("category", category.is_some()),
                    ("status", status.is_some()),
                    ("difficulty", difficulty.is_some()),
                    ("company", company.is_some()),
                    ("resolved", resolved.is_some()),
                ],
            )?;
            let sessions = StudySessionClient::new(transport)
                .list(kind.as_deref(), from.as_deref(), to.as_deref())
                .await?;
            for s in &sessions {
                println!(
                    "{:>4}  {:<16} {:>4} min  {}",
                    s.id.unwrap_or_default(),
                    s.session_type,
                    s.duration_minutes,
                    s.started_at.as_deref().unwrap_or("-")
                );
            }
            println!("{} session(s)", sessions.len());
        }

        _ => {
            reject_filters(
                domain,
                &[
                    ("difficulty", difficulty.is_some()),
                    ("type", kind.is_some()),
                    ("company", company.is_some()),
                    ("resolved", resolved.is_some()),
                    ("from", from.is_some()),
                    ("to", to.is_some()),
                ],
            )?;
            let catalog = domain.catalog().expect("non-catalog domains handled above");
            let topics = TopicClient::new(transport, catalog)
                .list(category.as_deref(), status.as_deref())
                .await?;
            for t in &topics {
                println!(
                    "{:>4}  {:<32} {:<16} {}{}",
                    t.id.unwrap_or_default(),
                    t.title,
                    t.category,
                    t.status,
                    if t.is_favorite { "  *" } else { "" }
                );
            }
            println!("{} topic(s)", topics.len());
        }
    }
    Ok(())
}

fn require(value: Option<String>, flag: &str) -> Result<String> {
    value.with_context(|| format!("--{flag} is required for this domain"))
}

#[allow(clippy::too_many_arguments)]
async fn add(
    transport: Transport,
    domain: Domain,
    title: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    status: Option<String>,
    notes: Option<String>,
    tags: Vec<String>,
    kind: Option<String>,
    company: Option<String>,
    area: Option<String>,
    severity: Option<String>,
    minutes: Option<i32>,
    topic: Option<String>,
) -> Result<()> {
    match domain {
        Domain::Dsa => {
            let created = DsaClient::new(transport)
                .create(&DsaProblem {
                    title: require(title, "title")?,
                    category: require(category, "category")?,
                    difficulty: difficulty.unwrap_or_default(),
                    status: status.unwrap_or_else(|| "NotStarted".to_string()),
                    notes,
                    tags,
                    ..Default::default()
                })
                .await?;
            println!(
                "Added DSA problem '{}' (id {})",
                created.title,
                created.id.unwrap_or_default()
            );
        }

        Domain::Interview => {
            let created = InterviewClient::new(transport)
                .create(&MockInterview {
                    company: require(company, "company")?,
                    interview_type: require(kind, "type")?,
                    scheduled_at: Some(Utc::now().to_rfc3339()),
                    notes,
                    ..Default::default()
                })
                .await?;
            println!(
                "Added interview with {} (id {})",
                created.company,
                created.id.unwrap_or_default()
            );
        }

        Domain::WeakArea => {
            let created = WeakAreaClient::new(transport)
                .create(&WeakArea {
                    area: require(area, "area")?,
                    category: require(category, "category")?,
                    severity: severity.unwrap_or_default(),
                    ..Default::default()
                })
                .await?;
            println!(
                "Added weak area '{}' (id {})",
                created.area,
                created.id.unwrap_or_default()
            );
        }

        Domain::StudySession => {
            let created = StudySessionClient::new(transport)
                .create(&StudySession {
                    session_type: require(kind, "type")?,
                    duration_minutes: minutes
                        .context("--minutes is required for study sessions")?,
                    topic,
                    started_at: Some(Utc::now().to_rfc3339()),
                    notes,
                    ..Default::default()
                })
                .await?;
            println!("Logged study session (id {})", created.id.unwrap_or_default());
        }

        _ => {
            let catalog = domain.catalog().expect("non-catalog domains handled above");
            let created = TopicClient::new(transport, catalog)
                .create(&Topic {
                    title: require(title, "title")?,
                    category: require(category, "category")?,
                    status: status.unwrap_or_else(|| "NotStarted".to_string()),
                    notes,
                    tags,
                    ..Default::default()
                })
                .await?;
            println!(
                "Added {} topic '{}' (id {})",
                catalog.segment(),
                created.title,
                created.id.unwrap_or_default()
            );
        }
    }
    Ok(())
}
