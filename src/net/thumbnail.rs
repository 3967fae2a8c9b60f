use iced::widget::image::Handle;
use image::imageops::FilterType;
use tracing::debug;

use crate::error::FetchError;

/// Download a product image and downsize it for a card
pub async fn fetch_thumbnail(
    client: reqwest::Client,
    url: String,
    size: u32,
) -> Result<Handle, FetchError> {
    let bytes = client.get(&url).send().await?.error_for_status()?.bytes().await?;

    // Decoding and resizing is CPU-bound, keep it off the executor threads
    let handle = tokio::task::spawn_blocking(move || downscale(&bytes, size)).await??;

    debug!(%url, "thumbnail ready");
    Ok(handle)
}

/// Decode an encoded image and fit it within `size` x `size`
pub fn downscale(encoded: &[u8], size: u32) -> Result<Handle, FetchError> {
    let img = image::load_from_memory(encoded).map_err(|e| FetchError::Image(e.to_string()))?;

    // Never upscale small images
    let thumbnail = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
