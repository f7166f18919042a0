// ============================================================================
// reelcut-core/src/external/auto_editor.rs
// ============================================================================
//
// TRIM COMMAND: Argument Building for the Trim Tool
//
// Turns one EditSpec into the argv of a trim tool invocation:
//
//   <tool> <input> [--edit <condition>] [--add-in <seg>...]
//          --output <temp> --no-open --progress machine
//
// Condition grammar: `audio:<n>%`, `motion:<n>%`, or `(or <clauses...>)`
// when both thresholds are enabled. Segment grammar: `<n>sec,<n>sec`.

use std::path::Path;

use crate::error::CoreResult;
use crate::job::EditSpec;

/// Builds the edit condition for a spec, or `None` when no threshold is set.
///
/// Clauses are ordered audio first, then motion. A single clause is emitted
/// bare; two clauses are grouped with `or` so that a segment is kept when it
/// passes either threshold.
pub fn edit_condition(spec: &EditSpec) -> Option<String> {
    if !spec.has_edit_condition() {
        return None;
    }

    let mut clauses = Vec::with_capacity(2);
    if spec.min_audio_percent > 0 {
        clauses.push(format!("audio:{}%", spec.min_audio_percent));
    }
    if spec.min_motion_percent > 0 {
        clauses.push(format!("motion:{}%", spec.min_motion_percent));
    }

    if clauses.len() == 1 {
        return clauses.pop();
    }
    Some(format!("(or {})", clauses.join(" ")))
}

/// Builds the full trim tool argv for `spec`, writing to `output_path`.
pub fn build_trim_command(
    program: &str,
    spec: &EditSpec,
    output_path: &Path,
) -> CoreResult<Vec<String>> {
    spec.validate()?;

    let mut args = vec![
        program.to_string(),
        spec.source_path.to_string_lossy().into_owned(),
    ];

    if let Some(condition) = edit_condition(spec) {
        args.push("--edit".to_string());
        args.push(condition);
    }

    if !spec.kept_segments.is_empty() {
        args.push("--add-in".to_string());
        args.extend(spec.kept_segments.iter().map(|segment| segment.token()));
    }

    args.push("--output".to_string());
    args.push(output_path.to_string_lossy().into_owned());
    args.push("--no-open".to_string());
    args.push("--progress".to_string());
    args.push("machine".to_string());

    Ok(args)
}
