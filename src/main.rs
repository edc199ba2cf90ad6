use crate::commands::{Command, Heightmap};
use crate::translate::GdalTranslate;

mod commands;
mod conversion;
mod inspect;
mod settings;
mod translate;
#[cfg(test)]
mod test;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<_> = std::env::args().collect();

    match execute(&args) {
        Ok(Some(result)) if result.is_failure() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            println!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(input: &[String]) -> anyhow::Result<Option<conversion::ConversionResult>> {
    let command = Heightmap::new(Box::new(GdalTranslate::new()));

    let matches = command.register().get_matches_from(input);

    command.run(&matches)
}
