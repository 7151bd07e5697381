use std::{
    io::{Cursor, Write as _},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;
use image::{DynamicImage, GrayImage, ImageFormat};

use crate::foundation::error::{SketchError, SketchResult};

/// Options for [`trace_image`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Luma values below this become black (traced), the rest white.
    pub threshold: u8,
    /// The tracer executable.
    pub program: PathBuf,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            program: PathBuf::from("potrace"),
        }
    }
}

/// Whether `opts.program` can be run at all.
pub fn is_potrace_on_path(opts: &TraceOptions) -> bool {
    Command::new(&opts.program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Convert to a two-level grayscale image: 0 below `threshold`, 255 otherwise.
pub fn threshold_image(img: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = img.to_luma8();
    for px in gray.pixels_mut() {
        px.0[0] = if px.0[0] < threshold { 0 } else { 255 };
    }
    gray
}

pub fn encode_bmp(bitmap: &GrayImage) -> SketchResult<Vec<u8>> {
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(bitmap.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Bmp)
        .context("encode monochrome bitmap as bmp")?;
    Ok(buf)
}

/// Pipe a bitmap through `potrace -s --group -o -` and return the SVG it prints.
pub fn trace_bitmap(bitmap: Vec<u8>, opts: &TraceOptions) -> SketchResult<Vec<u8>> {
    let mut child = Command::new(&opts.program)
        .args(["-s", "--group", "-o", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            SketchError::trace(format!(
                "failed to spawn '{}' (is it installed and on PATH?): {e}",
                opts.program.display()
            ))
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| SketchError::trace("failed to open tracer stdin (unexpected)"))?;

    // Feed stdin from a separate thread so a large SVG on stdout cannot stall the pipe.
    let writer = std::thread::spawn(move || stdin.write_all(&bitmap));

    let output = child
        .wait_with_output()
        .map_err(|e| SketchError::trace(format!("failed to wait for tracer: {e}")))?;

    let written = writer
        .join()
        .map_err(|_| SketchError::trace("tracer stdin writer panicked"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(status = %output.status, "tracer exited with failure");
        return Err(SketchError::trace(format!(
            "tracer exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    written
        .map_err(|e| SketchError::trace(format!("failed to write bitmap to tracer stdin: {e}")))?;

    Ok(output.stdout)
}

/// Load an image, threshold it and trace it into raw SVG bytes.
#[tracing::instrument(skip(opts))]
pub fn trace_image(path: &Path, opts: &TraceOptions) -> SketchResult<Vec<u8>> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    let bitmap = threshold_image(&img, opts.threshold);
    let bmp = encode_bmp(&bitmap)?;
    trace_bitmap(bmp, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/trace/potrace.rs"]
mod tests;
