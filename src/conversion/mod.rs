mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::inspect::read_header;
use crate::settings::HeightmapSettings;
use crate::translate::RasterTranslator;

pub use error::ConversionError;


/// Source raster and destination heightmap for a single run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl ConversionRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ConversionError> {
        let input_path = input_path.into();
        let output_path = output_path.into();

        if input_path.as_os_str().is_empty() {
            return Err(ConversionError::EmptyInputPath);
        }

        if output_path.as_os_str().is_empty() {
            return Err(ConversionError::EmptyOutputPath);
        }

        Ok(ConversionRequest {
            input_path,
            output_path,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    outcome: Outcome,
    message: String,
}

impl ConversionResult {
    fn succeeded(message: String) -> Self {
        ConversionResult {
            outcome: Outcome::Succeeded,
            message,
        }
    }

    fn failed(message: String) -> Self {
        ConversionResult {
            outcome: Outcome::Failed,
            message,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_failure(&self) -> bool {
        self.outcome() == Outcome::Failed
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Runs one conversion and reports it on stdout.
///
/// Translator errors never escape: they end up as a failed result whose
/// message points at a missing GDAL installation.
pub fn convert(request: &ConversionRequest, translator: &dyn RasterTranslator) -> ConversionResult {
    let start = Instant::now();
    let settings = HeightmapSettings::default();

    println!("▶️  Processing {}", request.input_path().display());

    match translator.probe() {
        Ok(version) => println!("ℹ️  Using {}", version),
        Err(e) => return report_failure(e),
    }

    let output_existed = request.output_path().exists();

    let now = Instant::now();
    println!(
        "▶️  Translating to {}x{} {}",
        settings.width, settings.height, settings.format
    );
    if let Err(e) = translator.translate(request, &settings) {
        if !output_existed {
            remove_partial_output(request.output_path());
        }
        return report_failure(e);
    }
    println!("✔️  Translated in {}ms", now.elapsed().as_millis());

    match read_header(request.output_path()) {
        Ok(info) => {
            println!("ℹ️  Heightmap is {}", info);
            if !info.matches(&settings) {
                log::warn!(
                    "{} doesn't look like a {}x{} 8-bit grayscale heightmap",
                    request.output_path().display(),
                    settings.width,
                    settings.height
                );
            }
        }
        Err(e) => log::warn!(
            "Couldn't read header of {}: {}",
            request.output_path().display(),
            e
        ),
    }

    let result = ConversionResult::succeeded(format!(
        "Success! Saved terrain heightmap to {}",
        request.output_path().display()
    ));
    println!("✔️  {}", result.message());

    println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

    result
}

fn report_failure(e: ConversionError) -> ConversionResult {
    let result = ConversionResult::failed(format!("Make sure GDAL is installed. {}", e));
    println!("❌ Error: {}", result.message());

    result
}

fn remove_partial_output(path: &Path) {
    if !path.is_file() {
        return;
    }

    if let Err(e) = fs::remove_file(path) {
        log::warn!("Couldn't remove partial output {}: {}", path.display(), e);
    }
}
