use std::path::PathBuf;

use chrono::NaiveDate;
use showbiz_config::ConfigError;
use showbiz_core::storage::{RecordStorage, SaveOutcome};
use showbiz_domain::{Category, DateRange, Displayable, Identifiable, RecordKind};

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "add",
        "Record an income or expense",
        "add <income|expense> <amount> <description> <date> [category]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show every record in insertion order",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "balance",
        "Income minus expenses between two dates, inclusive",
        "balance <start> <end>",
        cmd_balance,
    ));
    registry.register(CommandEntry::new(
        "save",
        "Write all records to the records file or to <path>",
        "save [path]",
        cmd_save,
    ));
    registry.register(CommandEntry::new(
        "load",
        "Replace the records with the contents of the records file or <path>",
        "load [path]",
        cmd_load,
    ));
    registry.register(CommandEntry::new(
        "categories",
        "List categories, optionally for one kind",
        "categories [income|expense]",
        cmd_categories,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Print the active settings",
        "config",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "Show available commands",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
}

fn usage_error(context: &ShellContext, command: &str) -> CommandError {
    let usage = context
        .registry
        .get(command)
        .map(|entry| entry.usage)
        .unwrap_or(command);
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}

fn parse_date(context: &ShellContext, raw: &str) -> Result<NaiveDate, CommandError> {
    let format = context.config.date_format;
    format.parse(raw).map_err(|_| {
        CommandError::InvalidArguments(format!("Invalid date `{raw}`; expected {}", format.hint()))
    })
}

fn parse_kind(raw: &str) -> Result<RecordKind, CommandError> {
    raw.parse()
        .map_err(|err| CommandError::InvalidArguments(format!("{err}")))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !(4..=5).contains(&args.len()) {
        return Err(usage_error(context, "add"));
    }
    let kind = parse_kind(args[0])?;
    let amount: f64 = args[1]
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("Invalid amount `{}`", args[1])))?;
    let description = args[2];
    let date = parse_date(context, args[3])?;
    let category = match args.get(4) {
        Some(raw) => Category::parse_or_fallback(raw, kind),
        None => Category::fallback_for(kind),
    };

    let id = context
        .finance
        .add_record(kind, amount, description, date, category)?;
    let label = context
        .finance
        .store()
        .iter()
        .find(|record| record.id() == id)
        .map(|record| record.display_label())
        .unwrap_or_default();
    output::success(format!("Record added: {label}"));

    if context.config.autosave {
        if context.records_file_protected {
            tracing::warn!(path = %context.records_path.display(), "autosave skipped");
            output::warning(format!(
                "Autosave skipped: {} failed to load and was left untouched.",
                context.records_path.display()
            ));
        } else {
            let path = context.records_path.clone();
            save_to(context, path)?;
        }
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.finance.records();
    if records.is_empty() {
        output::info("No records.");
        return Ok(());
    }
    output::section("Finance records");
    for (idx, record) in records.iter().enumerate() {
        output::line(format!("{:>3}. {}", idx + 1, record.display_label()));
    }
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [start, end] = args else {
        return Err(usage_error(context, "balance"));
    };
    let start = parse_date(context, start)?;
    let end = parse_date(context, end)?;
    let range = DateRange::new(start, end).map_err(showbiz_core::CoreError::from)?;
    let summary = context.finance.summarize(range);
    let currency = &context.config.currency;

    output::section(format!("Balance {}", summary.range));
    output::line(format!("Income:   {:.2} {currency}", summary.income));
    output::line(format!("Expenses: {:.2} {currency}", summary.expense));
    output::line(format!(
        "Balance:  {:.2} {currency} ({} records)",
        summary.balance, summary.record_count
    ));
    Ok(())
}

fn target_path(context: &ShellContext, args: &[&str], command: &str) -> Result<PathBuf, CommandError> {
    match args {
        [] => Ok(context.records_path.clone()),
        [path] => Ok(PathBuf::from(*path)),
        _ => Err(usage_error(context, command)),
    }
}

fn save_to(context: &mut ShellContext, path: PathBuf) -> CommandResult {
    let storage: &dyn RecordStorage = &context.storage;
    match context.finance.save(storage, &path)? {
        SaveOutcome::NothingToSave => output::warning("No records to save."),
        SaveOutcome::Written { path, count } => {
            if path == context.records_path {
                context.records_file_protected = false;
            }
            output::success(format!("Saved {count} records to {}", path.display()))
        }
    }
    Ok(())
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.records_file_protected {
        return Err(CommandError::RecordsFileProtected(context.records_path.clone()));
    }
    let path = target_path(context, args, "save")?;
    save_to(context, path)
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = target_path(context, args, "load")?;
    let summary = context.load_from(&path)?;
    output::success(format!(
        "Loaded {} records from {} ({} skipped)",
        summary.loaded,
        path.display(),
        summary.skipped
    ));
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds: Vec<RecordKind> = match args {
        [] => RecordKind::ALL.to_vec(),
        [raw] => vec![parse_kind(raw)?],
        _ => return Err(usage_error(context, "categories")),
    };
    for kind in kinds {
        output::section(format!("{kind} categories"));
        for category in Category::for_kind(kind) {
            output::line(format!("  {category}"));
        }
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.config)
        .map_err(|err| ConfigError::Serde(err.to_string()))?;
    output::section("Settings");
    output::line(json);
    output::info(format!("Records file: {}", context.records_path.display()));
    output::info(format!(
        "Config file: {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .get(name)
            .ok_or_else(|| CommandError::InvalidArguments(format!("Unknown command `{name}`")))?;
        output::section(format!("Help: {}", entry.name));
        output::line(format!("  Description: {}", entry.description));
        output::line(format!("  Usage: {}", entry.usage));
        return Ok(());
    }
    output::section("Available commands");
    for entry in context.registry.list() {
        output::line(format!("  {:<12} {}", entry.name, entry.description));
    }
    output::info(format!(
        "Dates use {}. Use `help <command>` for details.",
        context.config.date_format.hint()
    ));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
