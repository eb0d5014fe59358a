use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use wolf_scheduler::{AddOutcome, ScheduleManager, SchedulerConfig};

const SHORT_HEADERS: [&str; 4] = ["Name", "Section", "Title", "Meeting"];
const LONG_HEADERS: [&str; 7] = [
    "Name",
    "Section",
    "Title",
    "Credits",
    "Instructor",
    "Meeting",
    "Details",
];

fn render_rows_as_text_table<const N: usize>(
    headers: &[&str; N],
    rows: &[[String; N]],
    numbered: bool,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.len());
        }
    }
    let index_width = rows.len().saturating_sub(1).to_string().len().max(1);

    let mut sep = String::from("+");
    if numbered {
        sep.push_str(&"-".repeat(index_width + 2));
        sep.push('+');
    }
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, index: Option<String>, cells: Vec<&str>| {
        out.push('|');
        if numbered {
            let index = index.unwrap_or_default();
            out.push_str(&format!(" {:<width$} |", index, width = index_width));
        }
        for (ci, cell) in cells.iter().enumerate() {
            out.push_str(&format!(" {:<width$} |", cell, width = widths[ci]));
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, Some("#".to_string()), headers.to_vec());
    out.push_str(&sep);
    out.push('\n');
    for (ri, row) in rows.iter().enumerate() {
        push_row(
            &mut out,
            Some(ri.to_string()),
            row.iter().map(String::as_str).collect(),
        );
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  catalog                            Show the course catalog\n  schedule                           Show the schedule\n  full                               Show the schedule with all details\n  add <prefix> <number> <section>    Add a catalog course (e.g. add CSC 216 001)\n  event <days> <start> <end> <title...> [| <details...>]\n                                     Add an event (times as HHMM)\n  remove <index>                     Remove the activity at index\n  reset                              Clear the schedule\n  title [text...]                    Rename the schedule\n  export [path]                      Write the schedule to a file\n  quit|exit                          Exit"
    );
}

fn print_schedule(manager: &ScheduleManager) {
    println!("{}", manager.schedule_title());
    println!(
        "{}",
        render_rows_as_text_table(&SHORT_HEADERS, &manager.scheduled_activities(), true)
    );
}

fn init_tracing() {
    let level = env::var("WOLF_SCHEDULER_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_args() -> Result<SchedulerConfig, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut catalog_path: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => return Err("--config requires a path".to_string()),
            },
            path if catalog_path.is_none() => catalog_path = Some(PathBuf::from(path)),
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }

    let mut config = match config_path {
        Some(path) => SchedulerConfig::load_from_json(&path)
            .map_err(|e| format!("Error reading config {}: {}", path.display(), e))?,
        None => SchedulerConfig::default(),
    };
    if catalog_path.is_some() {
        config.catalog_path = catalog_path;
    }
    if config.catalog_path.is_none() {
        return Err("Usage: cli <catalog_path> [--config <json_path>]".to_string());
    }
    Ok(config)
}

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    let mut manager = match ScheduleManager::from_config(&config) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Wolf Scheduler (CLI) - type 'help' for commands\n");
    println!("Loaded {} courses.", manager.catalog().len());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "catalog" => {
                println!(
                    "{}",
                    render_rows_as_text_table(&SHORT_HEADERS, &manager.course_catalog(), false)
                );
            }
            "schedule" | "show" => print_schedule(&manager),
            "full" => {
                println!("{}", manager.schedule_title());
                println!(
                    "{}",
                    render_rows_as_text_table(
                        &LONG_HEADERS,
                        &manager.full_scheduled_activities(),
                        true
                    )
                );
            }
            "add" => {
                let prefix = parts.next();
                let number = parts.next();
                let section = parts.next();
                match (prefix, number, section) {
                    (Some(prefix), Some(number), Some(section)) => {
                        let name = format!("{prefix} {number}");
                        match manager.add_course_to_schedule(&name, section) {
                            Ok(AddOutcome::Added) => {
                                println!("Added {name}-{section}.");
                                print_schedule(&manager);
                            }
                            Ok(AddOutcome::NotInCatalog) => {
                                println!("{name}-{section} is not in the catalog.")
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: add <prefix> <number> <section>"),
                }
            }
            "event" => {
                let days = parts.next();
                let start = parts.next();
                let end = parts.next();
                let rest = parts.collect::<Vec<_>>().join(" ");
                let (title, details) = match rest.split_once('|') {
                    Some((title, details)) => (title.trim(), details.trim()),
                    None => (rest.trim(), ""),
                };
                match (days, start, end) {
                    (Some(days), Some(start), Some(end)) => {
                        let (start, end) = match (start.parse::<i32>(), end.parse::<i32>()) {
                            (Ok(start), Ok(end)) => (start, end),
                            _ => {
                                println!("Invalid time (HHMM)");
                                continue;
                            }
                        };
                        match manager.add_event_to_schedule(title, days, start, end, details) {
                            Ok(()) => {
                                println!("Added event {title}.");
                                print_schedule(&manager);
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: event <days> <start> <end> <title...> [| <details...>]"),
                }
            }
            "remove" => match parts.next().map(str::parse::<usize>) {
                Some(Ok(index)) => {
                    if manager.remove_activity_from_schedule(index) {
                        println!("Removed activity {index}.");
                        print_schedule(&manager);
                    } else {
                        println!("No activity at index {index}.");
                    }
                }
                Some(Err(_)) => println!("Invalid index"),
                None => println!("Usage: remove <index>"),
            },
            "reset" => {
                manager.reset_schedule();
                println!("Schedule cleared.");
            }
            "title" => {
                let title = parts.collect::<Vec<_>>().join(" ");
                manager.set_schedule_title(title);
                println!("Schedule title set to '{}'.", manager.schedule_title());
            }
            "export" => {
                let path = parts
                    .next()
                    .map(PathBuf::from)
                    .or_else(|| config.export_path.clone());
                match path {
                    Some(path) => match manager.export_schedule(&path) {
                        Ok(()) => println!("Schedule exported to {}.", path.display()),
                        Err(e) => println!("Error: {}", e),
                    },
                    None => println!("Usage: export <path>"),
                }
            }
            other => {
                println!("Unknown command '{}'. Type 'help' for commands.", other);
            }
        }
    }

    ExitCode::SUCCESS
}
