use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_cli::{Error, TaskStore, ops, table};

#[derive(Parser, Debug)]
#[command(name = "todo-cli", about = "Track short text tasks in a flat JSON file")]
struct Cli {
    /// Path of the task store file.
    #[arg(long, global = true, default_value = "tasks.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task.
    Add { description: String },
    /// List tasks, optionally filtered by status.
    Ls { status: Option<String> },
    /// Delete a task by ID.
    Del { id: u32 },
    /// Change a task's status (pending, in-progress, done).
    Update { id: u32, status: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let args = Cli::parse();
    let store = TaskStore::new(args.file);

    // Operation failures are terminal for the invocation but are user
    // errors, not program errors: print the message and exit normally.
    if let Err(err) = run(&store, args.command) {
        eprintln!("{err}");
    }
    Ok(())
}

fn run(store: &TaskStore, command: Commands) -> Result<(), Error> {
    match command {
        Commands::Add { description } => {
            let task = ops::create(store, &description)?;
            println!("Task created with ID: {}", task.id());
        }
        Commands::Ls { status } => {
            let tasks = ops::list(store, status.as_deref())?;
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                println!("{}", table::render(&tasks));
            }
        }
        Commands::Del { id } => {
            ops::delete(store, id)?;
            println!("Task {id} deleted");
        }
        Commands::Update { id, status } => {
            let task = ops::update_status(store, id, &status)?;
            println!("Task {id} updated to {}", task.status());
        }
    }
    Ok(())
}
