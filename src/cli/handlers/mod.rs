mod settings;
pub use settings::cmd_settings;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::palette::priority_color_by_name;
use crate::ops::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let mut store = TaskStore::open(&cli.data_dir);

    match cli.command {
        // The TUI is launched from main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&store, json),
            Commands::Add(args) => cmd_add(&mut store, args),
            Commands::Toggle(args) => cmd_toggle(&mut store, args),
            Commands::Priority(args) => cmd_priority(&mut store, args),
            Commands::Mv(args) => cmd_mv(&mut store, args),
            Commands::Clean => cmd_clean(&mut store),
            Commands::Settings(args) => cmd_settings(&mut store, args, json),
            Commands::Color(args) => cmd_color(&store, args),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let dark = store.settings().dark_mode;
        let tasks: Vec<TaskJson> = store
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, t)| task_to_json(i, t, dark))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        println!("{}", format_task_list(store.tasks()));
    }
    Ok(())
}

fn cmd_color(store: &TaskStore, args: ColorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dark = args.dark || store.settings().dark_mode;
    println!("{}", priority_color_by_name(&args.priority, dark));
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut TaskStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    match store.add_task(&args.text, args.priority) {
        Some(index) => {
            store.save()?;
            println!("{}", index);
        }
        None => eprintln!("nothing to add: task text is empty"),
    }
    Ok(())
}

fn cmd_toggle(store: &mut TaskStore, args: IndexArgs) -> Result<(), Box<dyn std::error::Error>> {
    let completed = store.toggle_task(args.index)?;
    store.save()?;
    println!(
        "{} {}",
        args.index,
        if completed { "completed" } else { "open" }
    );
    Ok(())
}

fn cmd_priority(store: &mut TaskStore, args: PriorityArgs) -> Result<(), Box<dyn std::error::Error>> {
    // set_priority writes the file itself
    store.set_priority(args.index, args.priority)?;
    println!("{} {}", args.index, args.priority);
    Ok(())
}

fn cmd_mv(store: &mut TaskStore, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.from >= store.len() {
        return Err(format!(
            "no task at index {} (list has {})",
            args.from,
            store.len()
        )
        .into());
    }
    if store.reorder(args.from, args.to) {
        store.save()?;
    }
    println!("{}", format_task_list(store.tasks()));
    Ok(())
}

fn cmd_clean(store: &mut TaskStore) -> Result<(), Box<dyn std::error::Error>> {
    let removed = store.remove_completed();
    if removed > 0 {
        store.save()?;
    }
    println!("removed {} completed task{}", removed, if removed == 1 { "" } else { "s" });
    Ok(())
}
