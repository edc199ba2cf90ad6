use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{codecs::png::PngDecoder, ColorType, ImageDecoder};

use crate::settings::HeightmapSettings;


/// Header facts of a written heightmap.
#[derive(Debug)]
pub struct HeightmapInfo {
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
}

impl HeightmapInfo {
    pub fn matches(&self, settings: &HeightmapSettings) -> bool {
        self.width == settings.width && self.height == settings.height && self.color == ColorType::L8
    }
}

impl Display for HeightmapInfo {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}x{} px, {:?}", self.width, self.height, self.color)
    }
}

/// Reads the PNG header only; pixel data is never decoded.
pub fn read_header(path: &Path) -> anyhow::Result<HeightmapInfo> {
    let file = File::open(path)?;
    let decoder = PngDecoder::new(BufReader::new(file))?;

    let (width, height) = decoder.dimensions();

    Ok(HeightmapInfo {
        width,
        height,
        color: decoder.color_type(),
    })
}
