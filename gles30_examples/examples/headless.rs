//! Render into an offscreen target through an EGL device and save the result.
//!
//! Usage: `headless [OUTPUT.png]`

#[cfg(egl_backend)]
fn main() -> anyhow::Result<()> {
    use std::env;
    use std::ffi::CString;
    use std::path::PathBuf;

    use anyhow::Context as _;
    use gles30::{gl, Gles};
    use gles30_examples::Offscreen;
    use glutin::api::egl::device::Device;
    use glutin::api::egl::display::Display;
    use glutin::config::{Api, ConfigSurfaceTypes, ConfigTemplateBuilder};
    use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
    use glutin::prelude::*;

    const SIZE: i32 = 64;

    env_logger::init();

    let device = Device::query_devices()
        .context("querying EGL devices")?
        .next()
        .context("no EGL device available")?;
    log::info!("Using {device:?}");

    let display = unsafe { Display::with_device(&device, None) }.context("creating EGL display")?;

    let template = ConfigTemplateBuilder::default()
        .with_api(Api::GLES3)
        .with_surface_type(ConfigSurfaceTypes::empty())
        .build();
    let config = unsafe { display.find_configs(template) }?
        .next()
        .context("no surfaceless OpenGL ES 3 config")?;

    let attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
        .build(None);
    let _context = unsafe { display.create_context(&config, &attributes) }?
        .make_current_surfaceless()
        .context("making context current")?;

    let gles = Gles::load_with(|symbol| {
        let symbol = CString::new(symbol).unwrap();
        display.get_proc_address(&symbol)
    })?;

    gles30_examples::print_driver_info(&gles);

    let target = Offscreen::new(&gles, SIZE, SIZE)?;
    unsafe {
        gles.clear_color(0.1, 0.1, 0.1, 1.0);
        gles.clear(gl::COLOR_BUFFER_BIT);

        gles.enable(gl::SCISSOR_TEST);
        gles.scissor(SIZE / 4, SIZE / 4, SIZE / 2, SIZE / 2);
        gles.clear_color(0.9, 0.4, 0.1, 1.0);
        gles.clear(gl::COLOR_BUFFER_BIT);
        gles.disable(gl::SCISSOR_TEST);

        gles.finish();
    }

    let pixels = target.read_rgba(&gles)?;
    let center = ((SIZE / 2 * SIZE + SIZE / 2) * 4) as usize;
    println!("Corner pixel: {:?}", &pixels[..4]);
    println!("Center pixel: {:?}", &pixels[center..center + 4]);

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("gles30_headless.png"));
    gles30_examples::write_png(&path, target.width() as u32, target.height() as u32, &pixels)?;
    println!("Wrote {}", path.display());

    target.delete(&gles);
    Ok(())
}

#[cfg(not(egl_backend))]
fn main() {
    println!("This example requires EGL support.");
}
