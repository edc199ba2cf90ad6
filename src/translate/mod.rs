mod gdal;

use crate::conversion::{ConversionError, ConversionRequest};
use crate::settings::HeightmapSettings;

pub use gdal::GdalTranslate;

/// Whatever turns a DEM raster into a heightmap file.
pub trait RasterTranslator {
    /// Checks that the backend is usable and returns a version line.
    fn probe(&self) -> Result<String, ConversionError>;

    fn translate(
        &self,
        request: &ConversionRequest,
        settings: &HeightmapSettings,
    ) -> Result<(), ConversionError>;
}
