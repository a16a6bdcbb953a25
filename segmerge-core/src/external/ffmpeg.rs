//! ffmpeg argument building for chapter merges.

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;

/// Builds `ffmpeg -f concat -safe 0 -i <manifest> -c copy -y <output>`.
///
/// `-safe 0` lets the concat demuxer accept the absolute paths written to
/// the manifest. `-c copy` concatenates the encoded streams without
/// re-encoding and `-y` overwrites an existing merged file.
pub fn build_concat_command(manifest: &Path, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.format("concat");
    cmd.args(["-safe", "0"]);
    cmd.input(manifest);
    cmd.args(["-c", "copy"]);
    cmd.overwrite();
    cmd.output(output);
    cmd
}
