//! Implementation of the 'process' subcommand.
//!
//! Assembles a PipelineJob from an optional job file and the command line,
//! confirms the output path, runs the pipeline with a progress bar and
//! prints a summary.

use std::fs;
use std::path::{self, Path, PathBuf};

use log::{debug, info, warn};
use reelcut_core::{
    CoreError, EditSpec, FfprobeDurationProbe, Pipeline, PipelineJob, PipelineOutcome,
    StdFileSystem, SystemProcessRunner, default_output_filename,
};

use crate::cli::ProcessArgs;
use crate::error::CliResult;
use crate::platform;
use crate::terminal::{self, ProgressDisplay};

/// Builds the job described by `args`.
///
/// Videos from `--job` come first. Transcode flags on the command line
/// replace the job file's transcode settings; without them the job file's
/// settings are kept. `--output-dir` also moves an output named by the job
/// file into that directory.
pub fn build_job(args: &ProcessArgs) -> CliResult<PipelineJob> {
    let mut job = match &args.job {
        Some(path) => {
            info!("Loading job file {}", path.display());
            PipelineJob::load(path)?
        }
        None => PipelineJob::new(Vec::new(), PathBuf::new()),
    };

    for video in &args.videos {
        job.videos.push(edit_spec_for(args, path::absolute(video)?));
    }

    if args.job.is_none() || args.requests_transcode() {
        job.transcode = args.transcode_options();
    }

    if let Some(output) = &args.output {
        job.output_path = output.clone();
    } else if job.output_path.as_os_str().is_empty() {
        let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let filename = default_output_filename(&job.videos, &chrono::Local::now());
        job.output_path = dir.join(filename);
    } else if let Some(dir) = &args.output_dir {
        // The job file names the output; --output-dir relocates it.
        let filename = job.output_path.file_name().ok_or_else(|| {
            CoreError::InvalidSpec(format!(
                "job output path '{}' has no file name",
                job.output_path.display()
            ))
        })?;
        let relocated = dir.join(filename);
        info!(
            "Moving job output {} into {}",
            job.output_path.display(),
            dir.display()
        );
        job.output_path = relocated;
    }

    Ok(job)
}

fn edit_spec_for(args: &ProcessArgs, source: PathBuf) -> EditSpec {
    if args.no_edit {
        return EditSpec::passthrough(source);
    }
    EditSpec {
        kept_segments: args.keep.clone(),
        ..EditSpec::new(source)
            .with_min_audio(args.min_audio)
            .with_min_motion(args.min_motion)
    }
}

/// Accepts the suggested path without asking, or prompts for it.
fn confirm_output(suggested: &Path, ask: bool) -> Option<PathBuf> {
    if !ask {
        return Some(suggested.to_path_buf());
    }
    match terminal::confirm_output_path(suggested) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Could not read an answer ({}); cancelling", e);
            None
        }
    }
}

/// Runs the `process` command.
pub fn run_process(args: ProcessArgs) -> CliResult<()> {
    let job = build_job(&args)?;
    debug!("Job: {:?}", job);

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let config = args.tools.to_core_config();
    let runner = SystemProcessRunner::new();
    let probe = FfprobeDurationProbe::new(&config.probe_tool);
    let file_system = StdFileSystem;
    let mut pipeline = Pipeline::new(&config, &runner, &probe, &file_system);

    let ask = !args.yes && console::user_attended_stderr();
    let mut display = ProgressDisplay::new();

    let outcome = pipeline.process(
        &job,
        |suggested| confirm_output(suggested, ask),
        |update| display.update(update),
    );
    display.clear();

    match outcome? {
        PipelineOutcome::Completed(summary) => {
            terminal::print_summary(&summary);
            if args.open {
                if let Err(e) = platform::open_folder(&summary.output_dir) {
                    warn!(
                        "Could not open {} with {}: {}",
                        summary.output_dir.display(),
                        platform::folder_opener(),
                        e
                    );
                }
            }
        }
        PipelineOutcome::Cancelled => {
            println!("Cancelled; nothing was written.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use reelcut_core::KeptSegment;

    fn process_args(args: &[&str]) -> ProcessArgs {
        let cli = Cli::try_parse_from(std::iter::once("reelcut").chain(args.iter().copied()))
            .unwrap();
        match cli.command {
            Commands::Process(args) => args,
            other => panic!("expected process, got {other:?}"),
        }
    }

    #[test]
    fn single_video_gets_a_derived_name() {
        let args = process_args(&["process", "/in/holiday.mov", "--output-dir", "/out"]);
        let job = build_job(&args).unwrap();
        assert_eq!(job.output_path, PathBuf::from("/out/holiday_processed.mov"));
        assert_eq!(job.videos[0].source_path, PathBuf::from("/in/holiday.mov"));
    }

    #[test]
    fn edit_flags_apply_to_listed_videos() {
        let args = process_args(&[
            "process",
            "/in/a.mp4",
            "/in/b.mp4",
            "--min-audio",
            "4",
            "--keep",
            "5-10",
            "-o",
            "/out/x.mp4",
        ]);
        let job = build_job(&args).unwrap();
        assert_eq!(job.videos.len(), 2);
        for spec in &job.videos {
            assert!(spec.apply_edit);
            assert_eq!(spec.min_audio_percent, 4);
            assert_eq!(spec.kept_segments, vec![KeptSegment::new(5, 10)]);
        }
        assert_eq!(job.output_path, PathBuf::from("/out/x.mp4"));
    }

    #[test]
    fn no_edit_passes_videos_through() {
        let args = process_args(&["process", "/in/a.mp4", "--no-edit", "--min-audio", "9"]);
        let job = build_job(&args).unwrap();
        assert!(!job.videos[0].apply_edit);
        assert_eq!(job.videos[0].min_audio_percent, 0);
    }

    #[test]
    fn job_file_videos_come_first_and_keep_their_transcode() {
        let dir = tempfile::tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        fs::write(
            &job_path,
            r#"{ "videos": [ { "source_path": "/in/first.mp4" } ],
                 "output_path": "/out/from-job.mp4",
                 "transcode": { "transcode_audio": true, "audio_bitrate_kbps": 96 } }"#,
        )
        .unwrap();

        let args = process_args(&[
            "process",
            "--job",
            job_path.to_str().unwrap(),
            "/in/second.mp4",
        ]);
        let job = build_job(&args).unwrap();

        let sources: Vec<_> = job.videos.iter().map(|v| v.source_path.clone()).collect();
        assert_eq!(sources, vec![PathBuf::from("/in/first.mp4"), PathBuf::from("/in/second.mp4")]);
        assert_eq!(job.output_path, PathBuf::from("/out/from-job.mp4"));
        assert!(job.transcode.transcode_audio);
        assert_eq!(job.transcode.audio_bitrate_kbps, 96);
    }

    #[test]
    fn output_dir_relocates_the_job_output() {
        let dir = tempfile::tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        fs::write(
            &job_path,
            r#"{ "videos": [ { "source_path": "/in/first.mp4" } ],
                 "output_path": "/out/from-job.mp4" }"#,
        )
        .unwrap();

        let args = process_args(&[
            "process",
            "--job",
            job_path.to_str().unwrap(),
            "--output-dir",
            "/elsewhere",
        ]);
        let job = build_job(&args).unwrap();
        assert_eq!(job.output_path, PathBuf::from("/elsewhere/from-job.mp4"));
    }

    #[test]
    fn transcode_flags_override_the_job_file() {
        let dir = tempfile::tempdir().unwrap();
        let job_path = dir.path().join("job.json");
        fs::write(
            &job_path,
            r#"{ "videos": [ { "source_path": "/in/first.mp4" } ],
                 "transcode": { "transcode_audio": true } }"#,
        )
        .unwrap();

        let args = process_args(&[
            "process",
            "--job",
            job_path.to_str().unwrap(),
            "--transcode-video",
            "--fps",
            "24",
        ]);
        let job = build_job(&args).unwrap();
        assert!(job.transcode.transcode_video);
        assert!(!job.transcode.transcode_audio);
        assert_eq!(job.transcode.fps, 24);
    }
}
