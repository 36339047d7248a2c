mod app;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use app::App;

#[derive(Parser)]
#[command(name = "studybuddy", about = "Study Buddy assignments, notes and Pomodoro CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Skip confirmation prompts
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Manage assignments
    #[command(subcommand)]
    Assignments(AssignmentCommand),

    /// Manage study resources
    #[command(subcommand)]
    Resources(ResourceCommand),

    /// Manage notes
    #[command(subcommand)]
    Notes(NoteCommand),

    /// List recorded study sessions
    Sessions,

    /// Manage your courses
    #[command(subcommand)]
    Courses(CourseCommand),

    /// Fetch the external course catalog
    Catalog,

    /// Show the dashboard summary
    Dashboard,

    /// Show study statistics
    Stats,

    /// Run the interactive Pomodoro timer
    Timer {
        /// Course to credit completed work intervals to
        #[arg(long)]
        course: Option<String>,
    },
}

#[derive(Subcommand)]
enum AssignmentCommand {
    /// List assignments
    List,
    /// Add an assignment
    Add {
        title: String,
        /// Course label
        #[arg(long)]
        course: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Priority (low, medium, high)
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Mark an assignment as completed
    Complete {
        /// Assignment id (prefix is enough)
        id: String,
    },
    /// Mark an assignment as not completed
    Reopen {
        /// Assignment id (prefix is enough)
        id: String,
    },
    /// Delete an assignment
    Delete {
        /// Assignment id (prefix is enough)
        id: String,
    },
}

#[derive(Subcommand)]
enum ResourceCommand {
    /// List resources
    List,
    /// Add a resource
    Add {
        title: String,
        /// Resource type (pdf, video, article, other)
        #[arg(long = "type", default_value = "other")]
        kind: String,
        #[arg(long)]
        course: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a resource
    Delete {
        /// Resource id (prefix is enough)
        id: String,
    },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// List notes
    List,
    /// Show one note
    Show {
        /// Note id (prefix is enough)
        id: String,
    },
    /// Add a note
    Add {
        title: String,
        #[arg(long)]
        course: String,
        /// Note text (use "-" to read from stdin)
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Edit a note
    Edit {
        /// Note id (prefix is enough)
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note id (prefix is enough)
        id: String,
    },
}

#[derive(Subcommand)]
enum CourseCommand {
    /// List your courses
    List,
    /// Add a course
    Add { name: String },
    /// Delete a course
    Delete {
        /// Course id prefix or name
        course: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut app = App::new(cli.data_dir)?;
    let format = &cli.format;

    match cli.command {
        Command::Assignments(cmd) => match cmd {
            AssignmentCommand::List => commands::assignments::list(&app, format),
            AssignmentCommand::Add {
                title,
                course,
                due,
                priority,
                description,
            } => commands::assignments::add(&mut app, title, course, &due, &priority, description),
            AssignmentCommand::Complete { id } => {
                commands::assignments::set_completed(&mut app, &id, true)
            }
            AssignmentCommand::Reopen { id } => {
                commands::assignments::set_completed(&mut app, &id, false)
            }
            AssignmentCommand::Delete { id } => {
                commands::assignments::delete(&mut app, &id, cli.yes)
            }
        },
        Command::Resources(cmd) => match cmd {
            ResourceCommand::List => commands::resources::list(&app, format),
            ResourceCommand::Add {
                title,
                kind,
                course,
                url,
                description,
            } => commands::resources::add(&mut app, title, &kind, course, url, description),
            ResourceCommand::Delete { id } => commands::resources::delete(&mut app, &id, cli.yes),
        },
        Command::Notes(cmd) => match cmd {
            NoteCommand::List => commands::notes::list(&app, format),
            NoteCommand::Show { id } => commands::notes::show(&app, &id),
            NoteCommand::Add {
                title,
                course,
                content,
            } => commands::notes::add(&mut app, title, course, content),
            NoteCommand::Edit {
                id,
                title,
                content,
                course,
            } => commands::notes::edit(&mut app, &id, title, content, course),
            NoteCommand::Delete { id } => commands::notes::delete(&mut app, &id, cli.yes),
        },
        Command::Sessions => commands::sessions::list(&app, format),
        Command::Courses(cmd) => match cmd {
            CourseCommand::List => commands::courses::list(&app, format),
            CourseCommand::Add { name } => commands::courses::add(&mut app, &name),
            CourseCommand::Delete { course } => {
                commands::courses::delete(&mut app, &course, cli.yes)
            }
        },
        Command::Catalog => commands::catalog::run(format),
        Command::Dashboard => commands::dashboard::run(&app, format),
        Command::Stats => commands::stats::run(&app, format),
        Command::Timer { course } => commands::timer::run(app, course),
    }
}
