use chrono::NaiveDate;
use day_registry::{Category, JsonFileStore, RegistrationOutcome, Tracker};
use directories::UserDirs;
use std::io::{self, Write};
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("employee_records")
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            println!("Invalid date '{s}' (expected YYYY-MM-DD)");
            None
        }
    }
}

fn parse_category(s: &str) -> Option<Category> {
    let cat = Category::from_str(s);
    if cat.is_none() {
        println!("Invalid category '{s}' (vacations|work|holidays)");
    }
    cat
}

fn print_outcome(outcome: &RegistrationOutcome) {
    if !outcome.added.is_empty() {
        println!("Registered {} date(s).", outcome.added.len());
    }
    if !outcome.duplicates.is_empty() {
        let dup: Vec<String> = outcome.duplicates.iter().map(|d| d.to_string()).collect();
        println!("Already registered: {}", dup.join(", "));
    }
}

fn print_help() {
    println!(
        "Commands:\n  help                                    Show this help\n  people                                  List registered people\n  add <name>                              Add a person\n  rm <name>                               Delete a person (asks to confirm)\n  reg <name> <category> <start> [end]     Register a date or inclusive range\n  dates <name> <category>                 List registered dates\n  del <name> <category> <date>            Delete one registered date\n  export <name> <category>                Write a paginated text report\n  quit|exit                               Exit"
    );
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = data_dir();
    let store = JsonFileStore::new(dir.join("records.json"));
    let mut tracker = match Tracker::open(store) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("Failed to load records: {e}");
            std::process::exit(1);
        }
    };

    println!("Day Registry (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
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
            "people" => {
                let people = tracker.people();
                if people.is_empty() {
                    println!("No people registered.");
                } else {
                    for name in people {
                        println!("{name}");
                    }
                }
            }
            "add" => match parts.next() {
                Some(name) => match tracker.add_person(name) {
                    Ok(stored) => println!("Added '{stored}'."),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: add <name>"),
            },
            "rm" => match parts.next() {
                Some(name) => {
                    if confirm(&format!("Delete '{name}' and all their dates?")) {
                        match tracker.delete_person(name) {
                            Ok(()) => println!("Deleted."),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                }
                None => println!("Usage: rm <name>"),
            },
            "reg" => {
                let name_s = parts.next();
                let cat_s = parts.next();
                let start_s = parts.next();
                let end_s = parts.next();
                match (name_s, cat_s, start_s) {
                    (Some(name), Some(cat_s), Some(start_s)) => {
                        let Some(category) = parse_category(cat_s) else { continue };
                        let Some(start) = parse_date(start_s) else { continue };
                        let end = match end_s {
                            Some(s) => match parse_date(s) {
                                Some(d) => Some(d),
                                None => continue,
                            },
                            None => None,
                        };
                        match tracker.register(name, category, start, end) {
                            Ok(outcome) => print_outcome(&outcome),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: reg <name> <category> <start> [end]"),
                }
            }
            "dates" => {
                let name_s = parts.next();
                let cat_s = parts.next();
                match (name_s, cat_s) {
                    (Some(name), Some(cat_s)) => {
                        let Some(category) = parse_category(cat_s) else { continue };
                        match tracker.dates(name, category) {
                            Ok(dates) if dates.is_empty() => println!("No dates registered."),
                            Ok(dates) => {
                                for date in dates {
                                    println!("• {date}");
                                }
                            }
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: dates <name> <category>"),
                }
            }
            "del" => {
                let name_s = parts.next();
                let cat_s = parts.next();
                let date_s = parts.next();
                match (name_s, cat_s, date_s) {
                    (Some(name), Some(cat_s), Some(date_s)) => {
                        let Some(category) = parse_category(cat_s) else { continue };
                        let Some(date) = parse_date(date_s) else { continue };
                        match tracker.delete_date(name, category, date) {
                            Ok(()) => println!("Deleted {date}."),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: del <name> <category> <date>"),
                }
            }
            "export" => {
                let name_s = parts.next();
                let cat_s = parts.next();
                match (name_s, cat_s) {
                    (Some(name), Some(cat_s)) => {
                        let Some(category) = parse_category(cat_s) else { continue };
                        match tracker.export_to_dir(name, category, &dir) {
                            Ok(path) => println!("Report written to {}", path.display()),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: export <name> <category>"),
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
