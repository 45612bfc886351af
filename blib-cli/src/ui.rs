use blib_core::ExportPolicy;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for a long-running batch
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a success message with green checkmark
pub fn success(message: &str) {
    println!("{} {}", "✓".bright_green().bold(), message.bright_green());
}

/// Print a warning message with yellow warning icon
pub fn warning(message: &str) {
    println!("{} {}", "⚠".bright_yellow().bold(), message.yellow());
}

/// Print an error message with red X
pub fn error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

/// Print an info message with blue info icon
pub fn info(message: &str) {
    println!("{} {}", "ℹ".bright_blue().bold(), message);
}

/// Ask what to do with files that would be overwritten
///
/// Shown only when the pre-check found at least one collision; the chosen
/// policy applies to the whole batch.
pub fn prompt_policy(collisions: &[String]) -> ExportPolicy {
    use std::io;

    println!(
        "\n{}",
        "Some files to be exported already exist:".bright_yellow().bold()
    );
    for name in collisions {
        println!("  {}", name.yellow());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    prompt_policy_with_reader(&mut reader, &mut stdout, warning)
}

fn prompt_policy_with_reader<R, W, F>(reader: &mut R, writer: &mut W, mut warn_fn: F) -> ExportPolicy
where
    R: std::io::BufRead,
    W: std::io::Write,
    F: FnMut(&str),
{
    let prompt = "Action to be taken [overwrite/rename/ignore] (default overwrite): ";
    let mut input = String::new();

    loop {
        write!(writer, "{}", prompt.bright_yellow()).unwrap();
        writer.flush().unwrap();

        input.clear();

        match reader.read_line(&mut input) {
            Ok(0) => return ExportPolicy::Overwrite,
            Ok(_) => {
                let trimmed = input.trim();

                if trimmed.is_empty() {
                    return ExportPolicy::Overwrite;
                }

                match trimmed.to_ascii_lowercase().as_str() {
                    "o" | "overwrite" => return ExportPolicy::Overwrite,
                    "r" | "rename" => return ExportPolicy::Rename,
                    "i" | "ignore" => return ExportPolicy::Ignore,
                    _ => warn_fn("Invalid response. Please enter overwrite/rename/ignore."),
                }
            }
            Err(err) => panic!("Failed to read input: {}", err),
        }
    }
}
