//! Output sinks for rendered images.
//!
//! The tracer produces a linear-light f32 raster; this module presents it:
//! - PNG export, converting each channel to 8-bit with a constant opaque
//!   alpha
//! - EXR export, preserving the full unclamped linear values
//! - live hand-off to a TEV viewer over TCP
//!
//! Presenting never alters the raster; each sink may be invoked any number
//! of times.

use exr::prelude::*;
use image::{ImageBuffer, Rgb, Rgba};
use log::{debug, info, warn};
use std::net::TcpStream;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Convert one linear channel value to its 8-bit output value.
///
/// Values are clamped to [0, 1] (reflection sums can exceed 1 by design)
/// and floored onto the 0-255 scale.
fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// Save an f32 RGB image as an opaque RGBA PNG.
///
/// Each channel is clamped to [0, 1] and floored onto 0-255; the alpha
/// channel is the constant 255, so the output is always fully opaque. No
/// gamma curve is applied; the traced values are written as-is.
///
/// I/O failures are logged as warnings and do not panic.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str, width: u32, height: u32) {
    let u8_image: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgba([
            to_channel(pixel[0]),
            to_channel(pixel[1]),
            to_channel(pixel[2]),
            255,
        ])
    });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save an f32 RGB image as EXR with full HDR precision.
///
/// Linear values are written untouched, so channels pushed above 1.0 by
/// reflection survive in the file. Failures are logged, not propagated.
pub fn save_image_as_exr(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str, width: u32, height: u32) {
    let pixels = image
        .pixels()
        .map(|rgb| (rgb[0], rgb[1], rgb[2]))
        .collect::<Vec<(f32, f32, f32)>>();

    let result = write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let index = y * (width as usize) + x;
        pixels[index]
    });

    match result {
        Ok(_) => info!("HDR image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}

/// Send an f32 RGB image to a TEV viewer for display.
///
/// Connects over TCP (appending TEV's default port when none is given),
/// creates the image, and streams the pixel data in TEV's planar channel
/// layout. Connection or protocol failures are logged as warnings.
pub fn send_image_to_tev(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, tev_address: &str, width: u32, height: u32) {
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    match TcpStream::connect(&tev_address) {
        Ok(stream) => {
            if let Err(e) = stream.set_nodelay(true) {
                debug!("Failed to set TCP_NODELAY: {}", e);
            }

            let mut client = TevClient::wrap(stream);

            let create_packet = PacketCreateImage {
                image_name: "lumiray_output",
                width,
                height,
                channel_names: &["R", "G", "B"],
                grab_focus: true,
            };

            if let Err(e) = client.send(create_packet) {
                warn!("Failed to create image in TEV: {}", e);
                return;
            }

            // Interleaved (RGBRGB...) to planar (RRR...GGG...BBB...) for TEV.
            let pixel_count = (width * height) as usize;
            let mut rgb_data = Vec::with_capacity(pixel_count * 3);
            for channel in 0..3 {
                for pixel in image.pixels() {
                    rgb_data.push(pixel[channel]);
                }
            }

            let start_time = std::time::Instant::now();
            let update_packet = PacketUpdateImage {
                image_name: "lumiray_output",
                grab_focus: false,
                channel_names: &["R", "G", "B"],
                x: 0,
                y: 0,
                width,
                height,
                channel_offsets: &[0, (width * height) as u64, (2 * width * height) as u64],
                channel_strides: &[1, 1, 1],
                data: &rgb_data,
            };

            match client.send(update_packet) {
                Ok(_) => info!("Image data sent to TEV at {} in {:.2?}", tev_address, start_time.elapsed()),
                Err(e) => warn!("Failed to send image data to TEV: {}", e),
            }
        }
        Err(e) => warn!("Failed to connect to TEV on {}: {}", tev_address, e),
    }
}
