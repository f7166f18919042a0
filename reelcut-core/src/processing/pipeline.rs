// ============================================================================
// reelcut-core/src/processing/pipeline.rs
// ============================================================================
//
// PIPELINE ORCHESTRATION: Trim Each Video, Then Join Everything
//
// Drives one PipelineJob through its stages:
//
//   Idle -> Validating -> TrimPhase(0..n) -> MuxPhase -> Cleanup -> Done/Failed
//
// Every video with editing enabled is trimmed into a temp file next to the
// output; pass-through videos are used as they are. The intermediates are
// then probed and joined by the mux tool in batch order. Generated temp files
// are deleted on every exit path, originals never are.
//
// KEY COMPONENTS:
// - Pipeline: the orchestrator, generic over its external collaborators
// - PipelineState: observable stage of the current run
// - PipelineOutcome / ProcessSummary: result of a run

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, command_failed_error};
use crate::external::{
    DurationProbe, FileSystem, ProcessRunner, build_mux_command, build_trim_command,
};
use crate::job::PipelineJob;
use crate::processing::artifacts::IntermediateArtifacts;
use crate::progress_reporting::{ProgressAggregator, StageInfo, StageKind, StatusUpdate};

/// Message of the final status update of a successful run.
pub const SUCCESS_MESSAGE: &str = "Video processed successfully";

/// Stage the orchestrator is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    /// Trimming the video at this batch index
    TrimPhase(usize),
    MuxPhase,
    Cleanup,
    Done,
    Failed,
}

/// Facts about a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    pub output_path: PathBuf,
    /// Folder containing the output, for the caller to open
    pub output_dir: PathBuf,
    pub trimmed_count: usize,
    pub passthrough_count: usize,
    /// Combined duration of all mux inputs
    pub total_duration_secs: f64,
    pub elapsed: Duration,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Completed(ProcessSummary),
    /// The caller declined to confirm an output path; nothing was launched.
    Cancelled,
}

/// Headless orchestrator for trim-and-join jobs.
///
/// The runner, probe and file system are borrowed so a caller can inspect
/// them (or reuse them) after a run.
pub struct Pipeline<'a, R, P, F>
where
    R: ProcessRunner,
    P: DurationProbe,
    F: FileSystem,
{
    config: &'a CoreConfig,
    runner: &'a R,
    probe: &'a P,
    fs: &'a F,
    state: PipelineState,
}

impl<'a, R, P, F> Pipeline<'a, R, P, F>
where
    R: ProcessRunner,
    P: DurationProbe,
    F: FileSystem,
{
    pub fn new(config: &'a CoreConfig, runner: &'a R, probe: &'a P, fs: &'a F) -> Self {
        Self {
            config,
            runner,
            probe,
            fs,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs `job` to completion.
    ///
    /// `confirm` receives the suggested output path and returns the path to
    /// write, or `None` to cancel. `on_status` receives every progress update
    /// on the calling thread.
    pub fn process<C, S>(
        &mut self,
        job: &PipelineJob,
        confirm: C,
        mut on_status: S,
    ) -> CoreResult<PipelineOutcome>
    where
        C: FnOnce(&Path) -> Option<PathBuf>,
        S: FnMut(&StatusUpdate),
    {
        let started = Instant::now();

        self.state = PipelineState::Validating;
        if let Err(e) = self.validate(job) {
            log::error!("Job rejected: {}", e);
            self.state = PipelineState::Failed;
            return Err(e);
        }

        let output_path = match confirm(&job.output_path) {
            Some(path) => path,
            None => {
                log::info!("Output path not confirmed; nothing to do");
                self.state = PipelineState::Idle;
                return Ok(PipelineOutcome::Cancelled);
            }
        };
        let output_dir = containing_dir(&output_path);
        log::info!(
            "Processing {} video(s) into {}",
            job.videos.len(),
            output_path.display()
        );

        let mut artifacts = IntermediateArtifacts::new(self.fs);
        let result = self.run_stages(
            job,
            &output_path,
            &output_dir,
            &mut artifacts,
            &mut on_status,
        );

        self.state = PipelineState::Cleanup;
        let removed = artifacts.cleanup();
        log::debug!("Cleanup removed {} intermediate file(s)", removed);

        match result {
            Ok(total_duration_secs) => {
                self.state = PipelineState::Done;
                on_status(&StatusUpdate::finished(SUCCESS_MESSAGE));

                let trimmed_count = job.trim_count();
                let summary = ProcessSummary {
                    output_path,
                    output_dir,
                    trimmed_count,
                    passthrough_count: job.videos.len() - trimmed_count,
                    total_duration_secs,
                    elapsed: started.elapsed(),
                };
                log::info!(
                    "Finished {} in {:.1}s",
                    summary.output_path.display(),
                    summary.elapsed.as_secs_f64()
                );
                Ok(PipelineOutcome::Completed(summary))
            }
            Err(e) => {
                log::error!("Processing failed: {}", e);
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    fn validate(&self, job: &PipelineJob) -> CoreResult<()> {
        self.config.validate()?;

        if job.videos.is_empty() {
            return Err(CoreError::EmptyBatch);
        }

        for spec in &job.videos {
            spec.validate()?;
            if !self.fs.exists(&spec.source_path) {
                return Err(CoreError::InvalidSpec(format!(
                    "source video '{}' does not exist",
                    spec.source_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Runs all trims and the mux; returns the combined input duration.
    fn run_stages<S>(
        &mut self,
        job: &PipelineJob,
        output_path: &Path,
        output_dir: &Path,
        artifacts: &mut IntermediateArtifacts<'_, F>,
        on_status: &mut S,
    ) -> CoreResult<f64>
    where
        S: FnMut(&StatusUpdate),
    {
        let extension = output_path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(self.config.default_extension.as_str())
            .to_string();

        let stage_count = job.trim_count() + 1;
        let mut stage_index = 0;
        let mut intermediates = Vec::with_capacity(job.videos.len());

        for (i, spec) in job.videos.iter().enumerate() {
            self.state = PipelineState::TrimPhase(i);

            if !spec.apply_edit {
                log::info!(
                    "Video {}/{}: passing {} through unedited",
                    i + 1,
                    job.videos.len(),
                    spec.source_path.display()
                );
                intermediates.push(spec.source_path.clone());
                continue;
            }

            let temp_path = self.fs.unique_temp_path(output_dir, &extension);
            artifacts.register(temp_path.clone());

            log::info!(
                "Video {}/{}: trimming {}",
                i + 1,
                job.videos.len(),
                spec.source_path.display()
            );
            let argv = build_trim_command(&self.config.trim_tool, spec, &temp_path)?;
            let stage = StageInfo::new(stage_index, stage_count, StageKind::Trim);
            self.run_stage(&argv, stage, 0.0, on_status)?;

            intermediates.push(temp_path);
            stage_index += 1;
        }

        self.state = PipelineState::MuxPhase;

        let mut total_duration_secs = 0.0;
        for path in &intermediates {
            total_duration_secs += self.probe.duration_secs(path)?;
        }
        log::info!(
            "Joining {} input(s), {:.1}s in total",
            intermediates.len(),
            total_duration_secs
        );

        let argv = build_mux_command(
            &self.config.mux_tool,
            &intermediates,
            &job.transcode,
            output_path,
        )?;
        let stage = StageInfo::new(stage_index, stage_count, StageKind::Mux);
        self.run_stage(&argv, stage, total_duration_secs, on_status)?;

        Ok(total_duration_secs)
    }

    /// Launches one command and forwards its progress.
    fn run_stage<S>(
        &self,
        argv: &[String],
        stage: StageInfo,
        total_duration_secs: f64,
        on_status: &mut S,
    ) -> CoreResult<()>
    where
        S: FnMut(&StatusUpdate),
    {
        let tool = argv.first().cloned().unwrap_or_default();
        let mut aggregator = ProgressAggregator::new(stage, total_duration_secs);

        let outcome = self.runner.run(argv, &mut |line: &str| {
            if let Some(update) = aggregator.observe_line(line) {
                on_status(&update);
            }
        })?;

        if let Some(update) = aggregator.mark_idle() {
            on_status(&update);
        }

        if !outcome.success() {
            log::error!(
                "{} stage {} of {} failed: '{}' exited with {:?}",
                stage.kind.label(),
                stage.index + 1,
                stage.count,
                tool,
                outcome.code
            );
            return Err(command_failed_error(tool, outcome.code));
        }

        Ok(())
    }
}

fn containing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_dir_of_bare_filename_is_current_dir() {
        assert_eq!(containing_dir(Path::new("out.mp4")), PathBuf::from("."));
        assert_eq!(
            containing_dir(Path::new("/videos/out.mp4")),
            PathBuf::from("/videos")
        );
    }
}
