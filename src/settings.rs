/// Name of the GDAL executable looked up on the `PATH`.
pub const GDAL_TRANSLATE: &str = "gdal_translate";

pub const HEIGHTMAP_WIDTH_IN_PX: u32 = 2048;
pub const HEIGHTMAP_HEIGHT_IN_PX: u32 = 1024;

#[cfg(test)]
mod tests {
    use crate::settings::HeightmapSettings;

    #[test]
    fn default_args_request_png_of_fixed_size_with_auto_scaling() {
        let args = HeightmapSettings::default().args();

        assert_eq!(
            args,
            vec!["-of", "PNG", "-ot", "Byte", "-outsize", "2048", "1024", "-scale"]
        );
    }

    #[test]
    fn manual_scaling_leaves_out_scale_flag() {
        let settings = HeightmapSettings {
            auto_scale: false,
            ..HeightmapSettings::default()
        };

        assert!(!settings.args().contains(&"-scale".to_string()));
    }
}

/// Fixed parameters handed to the raster translator.
///
/// Width is a power of two so the renderer can sample the texture without
/// padding. `auto_scale` maps the raster's own min/max elevation onto 0..=255.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightmapSettings {
    pub format: &'static str,
    pub output_type: &'static str,
    pub width: u32,
    pub height: u32,
    pub auto_scale: bool,
}

impl Default for HeightmapSettings {
    fn default() -> Self {
        HeightmapSettings {
            format: "PNG",
            output_type: "Byte",
            width: HEIGHTMAP_WIDTH_IN_PX,
            height: HEIGHTMAP_HEIGHT_IN_PX,
            auto_scale: true,
        }
    }
}

impl HeightmapSettings {
    /// `gdal_translate` options, without the positional source and destination.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-of".to_string(),
            self.format.to_string(),
            "-ot".to_string(),
            self.output_type.to_string(),
            "-outsize".to_string(),
            self.width.to_string(),
            self.height.to_string(),
        ];

        if self.auto_scale {
            args.push("-scale".to_string());
        }

        args
    }
}
