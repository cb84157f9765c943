//! Product image decoding and per-product texture cache state.

use eframe::egui;

const MAX_THUMBNAIL_EDGE: u32 = 512;

#[derive(Debug, Clone)]
pub struct ThumbnailImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_thumbnail(bytes: &[u8]) -> Result<ThumbnailImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = if dynamic.width() > MAX_THUMBNAIL_EDGE || dynamic.height() > MAX_THUMBNAIL_EDGE
    {
        dynamic.thumbnail(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE)
    } else {
        dynamic
    }
    .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(ThumbnailImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

pub enum ThumbnailState {
    Loading,
    Ready {
        image: ThumbnailImage,
        texture: Option<egui::TextureHandle>,
    },
    Failed,
}

impl ThumbnailState {
    /// Uploads the decoded image on first use and returns the texture.
    pub fn texture(&mut self, ctx: &egui::Context, name: &str) -> Option<&egui::TextureHandle> {
        let Self::Ready { image, texture } = self else {
            return None;
        };
        if texture.is_none() {
            let color_image =
                egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
            *texture = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
        }
        texture.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
