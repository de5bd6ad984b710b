// Terminal output.
// Match rendering with keyword highlighting, and transient progress lines.

use colored::Colorize;

use crate::search::StarMatch;

/// Print matched repositories with their matching lines.
pub fn display_matches(matches: &[StarMatch<'_>], greps: &[String]) {
    for found in matches {
        let name = found.star.name.bold().green();
        let html_url = found.star.html_url.blue();

        println!("{} ({})", name, html_url);

        for line in &found.lines {
            println!("- {}", highlight(line.trim(), greps));
        }

        println!();
    }
}

/// Wrap every literal occurrence of every keyword in red.
///
/// Longer keywords are applied first (ties broken lexically) so overlapping
/// keywords render the same way on every run.
pub fn highlight(line: &str, greps: &[String]) -> String {
    let mut ordered: Vec<&str> = greps.iter().map(String::as_str).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    ordered.dedup();

    let mut highlighted = line.to_string();
    for grep in ordered {
        highlighted = highlighted.replace(grep, &grep.red().to_string());
    }
    highlighted
}

/// Emit a transient progress line, overwritten by the next one.
pub fn progress(message: &str) {
    eprint!("\r{}\x1b[K", message.magenta());
}

/// Finish the progress output and move to a fresh row.
pub fn progress_done(message: &str) {
    eprintln!("\r{}\x1b[K", message.magenta());
}
