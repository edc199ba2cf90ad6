mod heightmap;

use crate::conversion::ConversionResult;

pub use heightmap::Heightmap;

pub trait Command {
    fn register(&self) -> clap::App<'static>;

    /// `Ok(None)` means nothing was converted, only guidance was printed.
    fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<Option<ConversionResult>>;
}
