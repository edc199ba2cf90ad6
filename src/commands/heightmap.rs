use clap::{app_from_crate, crate_name, App, Arg};

use crate::commands::Command;
use crate::conversion::{convert, ConversionRequest, ConversionResult};
use crate::translate::RasterTranslator;

#[cfg(test)]
#[allow(unused_must_use)]
mod tests {
    use clap::ArgMatches;
    use rstest::rstest;
    use tempdir::TempDir;

    use crate::commands::heightmap::usage;
    use crate::commands::{Command, Heightmap};
    use crate::conversion::{ConversionResult, Outcome};
    use crate::test::{with_input_and_output_paths, DummyTranslator};

    fn run_with_args(args: Vec<String>) -> anyhow::Result<Option<ConversionResult>> {
        let cmd = Heightmap::new(Box::new(DummyTranslator::new(true, true)));
        let matches: ArgMatches = cmd.register().get_matches_from(args);

        cmd.run(&matches)
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn fewer_than_two_paths_prints_usage_and_writes_nothing(#[case] path_count: usize) {
        let dir = TempDir::new("dem-heightmap-usage").unwrap();
        let mut args = vec!["dem-heightmap".to_string()];
        args.extend(
            ["mola.tif", "mars.png"]
                .iter()
                .take(path_count)
                .map(|p| dir.path().join(p).display().to_string()),
        );

        let res = run_with_args(args);

        assert!(matches!(res, Ok(None)));
        assert_eq!(dir.path().read_dir().unwrap().count(), 0);
    }

    #[test]
    fn two_paths_run_conversion() {
        with_input_and_output_paths(|input_path, output_path| {
            let png = output_path.join("mars.png");
            let res = run_with_args(vec![
                "dem-heightmap".to_string(),
                input_path.join("mola.tif").display().to_string(),
                png.display().to_string(),
            ]);

            let result = res.unwrap().unwrap();
            assert_eq!(result.outcome(), Outcome::Succeeded);
            assert!(result.message().contains(&png.display().to_string()));
            assert!(png.is_file());
        });
    }

    #[test]
    fn empty_input_path_bails() {
        let res = run_with_args(vec![
            "dem-heightmap".to_string(),
            "".to_string(),
            "mars.png".to_string(),
        ]);

        assert!(res.is_err());
    }

    #[test]
    fn usage_names_both_paths() {
        let text = usage();

        assert!(text.starts_with("Usage: dem-heightmap"));
        assert!(text.contains("<input_dem.tif> <output.png>"));
    }
}

/// Converts one DEM into a displacement heightmap.
pub struct Heightmap {
    translator: Box<dyn RasterTranslator>,
}

impl Heightmap {
    pub fn new(translator: Box<dyn RasterTranslator>) -> Self {
        Heightmap { translator }
    }
}

impl Command for Heightmap {
    fn register(&self) -> App<'static> {
        app_from_crate!()
            .arg(
                Arg::new("input")
                    .value_name("INPUT_DEM")
                    .help("Path to the elevation raster (GeoTIFF, PDS IMG, ...)")
                    .index(1),
            )
            .arg(
                Arg::new("output")
                    .value_name("OUTPUT_PNG")
                    .help("Path of the heightmap PNG to write")
                    .index(2),
            )
    }

    fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<Option<ConversionResult>> {
        let (input_path, output_path) = match (args.value_of("input"), args.value_of("output")) {
            (Some(input_path), Some(output_path)) => (input_path, output_path),
            _ => {
                println!("{}", usage());
                return Ok(None);
            }
        };

        let request = ConversionRequest::new(input_path, output_path)?;

        Ok(Some(convert(&request, self.translator.as_ref())))
    }
}

pub fn usage() -> String {
    format!("Usage: {} <input_dem.tif> <output.png>", crate_name!())
}
