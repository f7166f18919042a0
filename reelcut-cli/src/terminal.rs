// ============================================================================
// reelcut-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Progress Bar, Prompts and Summaries
//
// KEY COMPONENTS:
// - ProgressDisplay: renders StatusUpdates as an indicatif bar
// - confirm_output_path: the [Y/n] output prompt
// - print_summary / print_check_line: final reports

use std::io;
use std::path::{Path, PathBuf};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use reelcut_core::{ProcessSummary, StageKind, StatusUpdate, format_duration};

// ============================================================================
// PROGRESS BAR
// ============================================================================

const BAR_TEMPLATE: &str = "{prefix:.bold} [{bar:30.cyan/blue}] {percent:>3}% {wide_msg}";

/// Shows a bar while progress is visible and removes it otherwise.
///
/// A fresh bar is created every time progress becomes visible again, so a
/// hidden phase leaves no stale line behind.
pub struct ProgressDisplay {
    bar: Option<ProgressBar>,
}

impl ProgressDisplay {
    pub fn new() -> Self {
        Self { bar: None }
    }

    pub fn update(&mut self, update: &StatusUpdate) {
        if !update.visible {
            self.clear();
            return;
        }

        let bar = self.bar.get_or_insert_with(new_bar);
        bar.set_prefix(stage_prefix(update));
        bar.set_position(u64::from(update.percent));
        bar.set_message(update.message.clone());
    }

    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressDisplay {
    fn drop(&mut self) {
        self.clear();
    }
}

fn new_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// Prefix such as `Trim 1/3` or `Join`.
pub fn stage_prefix(update: &StatusUpdate) -> String {
    match update.stage {
        Some(stage) => match stage.kind {
            StageKind::Trim => format!("Trim {}/{}", stage.index + 1, stage.count - 1),
            StageKind::Mux => "Join".to_string(),
        },
        None => String::new(),
    }
}

// ============================================================================
// OUTPUT CONFIRMATION
// ============================================================================

/// What the user answered to the output prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    Accept,
    Decline,
    Replace(PathBuf),
}

/// Interprets an answer: empty/y/yes accept, n/no decline, anything else is
/// taken as a different output path.
pub fn parse_prompt_answer(answer: &str) -> PromptAnswer {
    let trimmed = answer.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "y" | "yes" => PromptAnswer::Accept,
        "n" | "no" => PromptAnswer::Decline,
        _ => PromptAnswer::Replace(PathBuf::from(trimmed)),
    }
}

/// Asks on the terminal whether to write to `suggested`.
pub fn confirm_output_path(suggested: &Path) -> io::Result<Option<PathBuf>> {
    let term = Term::stderr();
    term.write_str(&format!(
        "{} {} {} ",
        style("Write output to").bold(),
        style(suggested.display()).cyan(),
        style("[Y/n or new path]").dim()
    ))?;
    let answer = term.read_line()?;

    Ok(match parse_prompt_answer(&answer) {
        PromptAnswer::Accept => Some(suggested.to_path_buf()),
        PromptAnswer::Decline => None,
        PromptAnswer::Replace(path) => Some(path),
    })
}

// ============================================================================
// REPORTS
// ============================================================================

/// Renders the summary printed after a successful run.
pub fn format_summary(summary: &ProcessSummary) -> String {
    format!(
        "{} {}\n  Output:       {}\n  Videos:       {} trimmed, {} passed through\n  Duration in:  {}\n  Elapsed:      {}",
        style("✓").green().bold(),
        style("Processing complete").bold(),
        summary.output_path.display(),
        summary.trimmed_count,
        summary.passthrough_count,
        format_duration(summary.total_duration_secs),
        format_duration(summary.elapsed.as_secs_f64()),
    )
}

pub fn print_summary(summary: &ProcessSummary) {
    println!("{}", format_summary(summary));
}

/// Prints one line of `reelcut check`.
pub fn print_check_line(label: &str, program: &str, found: bool) {
    if found {
        println!("{} {:<11} {}", style("✓").green().bold(), label, program);
    } else {
        println!(
            "{} {:<11} {} {}",
            style("✗").red().bold(),
            label,
            program,
            style("(not found)").red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcut_core::StageInfo;
    use std::time::Duration;

    #[test]
    fn prompt_answers() {
        assert_eq!(parse_prompt_answer(""), PromptAnswer::Accept);
        assert_eq!(parse_prompt_answer(" Y \n"), PromptAnswer::Accept);
        assert_eq!(parse_prompt_answer("no"), PromptAnswer::Decline);
        assert_eq!(
            parse_prompt_answer("/tmp/Other.mp4"),
            PromptAnswer::Replace(PathBuf::from("/tmp/Other.mp4"))
        );
    }

    #[test]
    fn prefixes_number_trims_among_trims() {
        let mut update = StatusUpdate::finished("x");
        assert_eq!(stage_prefix(&update), "");

        update.stage = Some(StageInfo::new(1, 3, StageKind::Trim));
        assert_eq!(stage_prefix(&update), "Trim 2/2");

        update.stage = Some(StageInfo::new(2, 3, StageKind::Mux));
        assert_eq!(stage_prefix(&update), "Join");
    }

    #[test]
    fn summary_lists_counts_and_durations() {
        console::set_colors_enabled(false);
        let summary = ProcessSummary {
            output_path: PathBuf::from("/out/joined.mp4"),
            output_dir: PathBuf::from("/out"),
            trimmed_count: 2,
            passthrough_count: 1,
            total_duration_secs: 125.0,
            elapsed: Duration::from_secs(61),
        };
        let text = format_summary(&summary);
        assert!(text.contains("/out/joined.mp4"));
        assert!(text.contains("2 trimmed, 1 passed through"));
        assert!(text.contains("00:02:05"));
        assert!(text.contains("00:01:01"));
    }

    #[test]
    fn hidden_updates_remove_the_bar() {
        let mut display = ProgressDisplay::new();
        let mut update = StatusUpdate {
            message: "Creating new video".to_string(),
            percent: 40,
            visible: true,
            stage: Some(StageInfo::new(0, 2, StageKind::Trim)),
            overall_percent: 20,
        };
        display.update(&update);
        assert!(display.bar.is_some());

        update.visible = false;
        display.update(&update);
        assert!(display.bar.is_none());
    }
}
