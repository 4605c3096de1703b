//! Helpers shared by the examples.

use std::borrow::Cow;

use gles30::gl;
use gles30::types::GLuint;
use gles30::Gles;

/// Print the driver identification strings.
pub fn print_driver_info(gles: &Gles) {
    let strings = [
        ("Vendor", gl::VENDOR),
        ("Renderer", gl::RENDERER),
        ("Version", gl::VERSION),
        ("Shading language", gl::SHADING_LANGUAGE_VERSION),
    ];
    for (label, name) in strings {
        let value = unsafe { gles.get_string(name) };
        println!("{label}: {}", value.map_or(Cow::Borrowed("<unavailable>"), |s| s.to_string_lossy()));
    }
}

/// An RGBA8 renderbuffer attached to its own framebuffer.
///
/// Surfaceless contexts have no default framebuffer, so everything is drawn
/// here and read back with [`Offscreen::read_rgba`].
pub struct Offscreen {
    framebuffer: GLuint,
    renderbuffer: GLuint,
    width: i32,
    height: i32,
}

impl Offscreen {
    /// Create the target and bind it for drawing and reading.
    pub fn new(gles: &Gles, width: i32, height: i32) -> anyhow::Result<Self> {
        let mut renderbuffer = [0];
        let mut framebuffer = [0];
        unsafe {
            gles.gen_renderbuffers(&mut renderbuffer);
            gles.bind_renderbuffer(gl::RENDERBUFFER, renderbuffer[0]);
            gles.renderbuffer_storage(gl::RENDERBUFFER, gl::RGBA8, width, height);

            gles.gen_framebuffers(&mut framebuffer);
            gles.bind_framebuffer(gl::FRAMEBUFFER, framebuffer[0]);
            gles.framebuffer_renderbuffer(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0,
                gl::RENDERBUFFER,
                renderbuffer[0],
            );

            let status = gles.check_framebuffer_status(gl::FRAMEBUFFER);
            if status != gl::FRAMEBUFFER_COMPLETE {
                anyhow::bail!("framebuffer is incomplete: {status:#x}");
            }

            gles.viewport(0, 0, width, height);
            gles.check_error()?;
        }

        Ok(Self { framebuffer: framebuffer[0], renderbuffer: renderbuffer[0], width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Read the whole target back, rows top to bottom.
    pub fn read_rgba(&self, gles: &Gles) -> anyhow::Result<Vec<u8>> {
        let row = self.width as usize * 4;
        let mut pixels = vec![0u8; row * self.height as usize];
        unsafe {
            gles.pixel_storei(gl::PACK_ALIGNMENT, 1);
            gles.read_pixels(
                0,
                0,
                self.width,
                self.height,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                &mut pixels,
            );
            gles.check_error()?;
        }

        // GL's origin is the bottom left corner.
        let flipped = pixels.chunks_exact(row).rev().flatten().copied().collect();
        Ok(flipped)
    }

    pub fn delete(self, gles: &Gles) {
        unsafe {
            gles.bind_framebuffer(gl::FRAMEBUFFER, 0);
            gles.delete_framebuffers(&[self.framebuffer]);
            gles.delete_renderbuffers(&[self.renderbuffer]);
        }
    }
}

/// Write top-to-bottom RGBA8 rows as a PNG file.
#[cfg(feature = "png")]
pub fn write_png(
    path: &std::path::Path,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> anyhow::Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
