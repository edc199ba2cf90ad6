use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::conversion::{ConversionError, ConversionRequest};
use crate::settings::{HeightmapSettings, GDAL_TRANSLATE};

use super::RasterTranslator;


/// Runs the `gdal_translate` executable as a child process.
pub struct GdalTranslate {
    program: PathBuf,
}

impl GdalTranslate {
    pub fn new() -> Self {
        GdalTranslate::with_program(GDAL_TRANSLATE)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        GdalTranslate {
            program: program.into(),
        }
    }

    pub fn command(&self, request: &ConversionRequest, settings: &HeightmapSettings) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(settings.args())
            .arg(request.input_path())
            .arg(request.output_path());

        cmd
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn check_status(&self, status: ExitStatus) -> Result<(), ConversionError> {
        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(ConversionError::ToolFailed {
                program: self.program_name(),
                code,
            }),
            None => Err(ConversionError::Terminated(self.program_name())),
        }
    }
}

impl RasterTranslator for GdalTranslate {
    fn probe(&self) -> Result<String, ConversionError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ConversionError::from_io(&self.program_name(), e))?;

        self.check_status(output.status)?;

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn translate(
        &self,
        request: &ConversionRequest,
        settings: &HeightmapSettings,
    ) -> Result<(), ConversionError> {
        // stdout/stderr are inherited so GDAL's progress bar and warnings reach the user
        let status = self
            .command(request, settings)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ConversionError::from_io(&self.program_name(), e))?;

        self.check_status(status)
    }
}
