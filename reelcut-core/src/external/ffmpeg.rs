// ============================================================================
// reelcut-core/src/external/ffmpeg.rs
// ============================================================================
//
// MUX COMMAND: Argument Building for the Concatenation/Transcode Stage
//
// Produces the argv of the final mux invocation:
//
//   <tool> -i <in0> -i <in1> ... [-filter_complex <graph> -map [outv] -map [outa]]
//          [-c:v <codec> -crf <n>] [-filter:v fps=<n>] [-c:a <codec> -b:a <n>k]
//          -y -hide_banner <output>
//
// Several inputs are joined with the concat filter. A single input needs no
// graph; its fps normalisation (when video is transcoded) is a plain stream
// filter instead.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::job::TranscodeOptions;

/// Builds the concat filter graph for `input_count` inputs.
///
/// With `fps` set the concatenated video is routed through an fps filter
/// before it reaches the `[outv]` label.
pub fn concat_filter_graph(input_count: usize, fps: Option<u32>) -> String {
    let mut graph: String = (0..input_count)
        .map(|i| format!("[{i}:v][{i}:a]"))
        .collect();

    match fps {
        Some(fps) => graph.push_str(&format!(
            "concat=n={input_count}:v=1:a=1[catv][outa];[catv]fps={fps}[outv]"
        )),
        None => graph.push_str(&format!("concat=n={input_count}:v=1:a=1[outv][outa]")),
    }

    graph
}

/// Builds the full mux argv for the ordered `inputs`.
pub fn build_mux_command(
    program: &str,
    inputs: &[PathBuf],
    transcode: &TranscodeOptions,
    output_path: &Path,
) -> CoreResult<Vec<String>> {
    if inputs.is_empty() {
        return Err(CoreError::EmptyJob);
    }

    let mut args = vec![program.to_string()];
    for input in inputs {
        args.push("-i".to_string());
        args.push(input.to_string_lossy().into_owned());
    }

    let fps = transcode.transcode_video.then_some(transcode.fps);
    let use_filter_graph = inputs.len() > 1;

    if use_filter_graph {
        args.push("-filter_complex".to_string());
        args.push(concat_filter_graph(inputs.len(), fps));
        args.extend(["-map", "[outv]", "-map", "[outa]"].map(String::from));
    }

    if transcode.transcode_video {
        args.push("-c:v".to_string());
        args.push(transcode.video_codec.clone());
        args.push("-crf".to_string());
        args.push(transcode.crf.to_string());
        if !use_filter_graph {
            args.push("-filter:v".to_string());
            args.push(format!("fps={}", transcode.fps));
        }
    }

    if transcode.transcode_audio {
        args.push("-c:a".to_string());
        args.push(transcode.audio_codec.clone());
        args.push("-b:a".to_string());
        args.push(format!("{}k", transcode.audio_bitrate_kbps));
    }

    args.push("-y".to_string());
    args.push("-hide_banner".to_string());
    args.push(output_path.to_string_lossy().into_owned());

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn video_transcode() -> TranscodeOptions {
        TranscodeOptions {
            transcode_video: true,
            fps: 24,
            crf: 20,
            ..TranscodeOptions::default()
        }
    }

    #[test]
    fn empty_input_list_is_rejected() {
        let err = build_mux_command("ffmpeg", &[], &TranscodeOptions::default(), Path::new("o.mp4"))
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyJob));
    }

    #[test]
    fn single_input_passthrough_is_minimal() {
        let args = build_mux_command(
            "ffmpeg",
            &paths(&["/a.mp4"]),
            &TranscodeOptions::default(),
            Path::new("/out.mp4"),
        )
        .unwrap();
        assert_eq!(args, vec!["ffmpeg", "-i", "/a.mp4", "-y", "-hide_banner", "/out.mp4"]);
    }

    #[test]
    fn single_input_uses_plain_fps_filter() {
        let args = build_mux_command(
            "ffmpeg",
            &paths(&["/a.mp4"]),
            &video_transcode(),
            Path::new("/out.mp4"),
        )
        .unwrap();

        assert!(!args.iter().any(|a| a == "-filter_complex"));
        let pos = args.iter().position(|a| a == "-filter:v").unwrap();
        assert_eq!(args[pos + 1], "fps=24");
        let pos = args.iter().position(|a| a == "-c:v").unwrap();
        assert_eq!(&args[pos + 1..pos + 4], ["libx264", "-crf", "20"]);
    }

    #[test]
    fn three_inputs_chain_fps_after_concat() {
        let args = build_mux_command(
            "ffmpeg",
            &paths(&["/a.mp4", "/b.mp4", "/c.mp4"]),
            &video_transcode(),
            Path::new("/out.mp4"),
        )
        .unwrap();

        let pos = args.iter().position(|a| a == "-filter_complex").unwrap();
        let graph = &args[pos + 1];
        assert_eq!(
            graph,
            "[0:v][0:a][1:v][1:a][2:v][2:a]concat=n=3:v=1:a=1[catv][outa];[catv]fps=24[outv]"
        );
        assert_eq!(&args[pos + 2..pos + 6], ["-map", "[outv]", "-map", "[outa]"]);
        assert!(!args.iter().any(|a| a == "-filter:v"));
    }

    #[test]
    fn inputs_keep_their_order() {
        let args = build_mux_command(
            "ffmpeg",
            &paths(&["/z.mp4", "/a.mp4"]),
            &TranscodeOptions::default(),
            Path::new("/out.mp4"),
        )
        .unwrap();
        assert_eq!(&args[1..5], ["-i", "/z.mp4", "-i", "/a.mp4"]);
        assert!(args.contains(&"[0:v][0:a][1:v][1:a]concat=n=2:v=1:a=1[outv][outa]".to_string()));
    }

    #[test]
    fn audio_only_transcode_leaves_video_untouched() {
        let transcode = TranscodeOptions {
            transcode_audio: true,
            audio_codec: "libopus".to_string(),
            audio_bitrate_kbps: 96,
            ..TranscodeOptions::default()
        };
        let args = build_mux_command(
            "ffmpeg",
            &paths(&["/a.mp4"]),
            &transcode,
            Path::new("/out.mp4"),
        )
        .unwrap();

        assert!(!args.iter().any(|a| a == "-c:v" || a == "-crf" || a == "-filter:v"));
        let pos = args.iter().position(|a| a == "-c:a").unwrap();
        assert_eq!(&args[pos + 1..pos + 4], ["libopus", "-b:a", "96k"]);
        assert_eq!(args[args.len() - 3..], ["-y", "-hide_banner", "/out.mp4"]);
    }
}
