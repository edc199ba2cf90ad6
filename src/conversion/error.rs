#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error("Input path is empty")]
    EmptyInputPath,

    #[error("Output path is empty")]
    EmptyOutputPath,

    #[error("Couldn't find `{0}` on the PATH")]
    ToolMissing(String),

    #[error("Failed to run `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {code}")]
    ToolFailed { program: String, code: i32 },

    #[error("`{0}` was terminated by a signal")]
    Terminated(String),
}

impl ConversionError {
    /// Maps a spawn or wait failure, treating "not found" as a missing tool.
    pub fn from_io(program: &str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => ConversionError::ToolMissing(program.to_string()),
            _ => ConversionError::Io {
                program: program.to_string(),
                source,
            },
        }
    }
}
