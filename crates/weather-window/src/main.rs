// File: crates/weather-window/src/main.rs
// Summary: Desktop dashboard window; renders weather-core frames to RGBA and blits them via winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use weather_core::types::{Insets, HEIGHT, WIDTH};
use weather_core::{Dashboard, DashboardConfig, ExportFormat, Hit, RenderOptions, Renderer, ScreenLayout};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// User intent, from a click or a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Refresh,
    Export(ExportFormat),
    Dismiss,
}

impl From<Hit> for Action {
    fn from(hit: Hit) -> Self {
        match hit {
            Hit::Refresh => Action::Refresh,
            Hit::Export => Action::Export(ExportFormat::Json),
            Hit::Notice => Action::Dismiss,
        }
    }
}

/// While a notice is up only dismissal keys are live.
fn action_for_key(key: VirtualKeyCode, notice_visible: bool) -> Option<Action> {
    match (key, notice_visible) {
        (VirtualKeyCode::Escape | VirtualKeyCode::Return | VirtualKeyCode::Space, true) => Some(Action::Dismiss),
        (_, true) => None,
        (VirtualKeyCode::R | VirtualKeyCode::F5, false) => Some(Action::Refresh),
        (VirtualKeyCode::E, false) => Some(Action::Export(ExportFormat::Json)),
        (VirtualKeyCode::C, false) => Some(Action::Export(ExportFormat::Csv)),
        _ => None,
    }
}

fn apply(dashboard: &mut Dashboard, action: Action) {
    debug!("action {action:?}");
    match action {
        Action::Refresh => dashboard.refresh(),
        Action::Export(format) => {
            // failures are already surfaced as a notice by the dashboard
            if let Ok(path) = dashboard.export_as(format) {
                debug!("export written to {}", path.display());
            }
        }
        Action::Dismiss => {
            dashboard.dismiss_notice();
        }
    }
}

fn options_for(size: PhysicalSize<u32>) -> RenderOptions {
    RenderOptions { width: size.width as i32, height: size.height as i32, ..RenderOptions::default() }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let mut dashboard = Dashboard::new(DashboardConfig::default());
    let renderer = Renderer::new();
    info!("generated {} samples for {}", dashboard.records().len(), dashboard.config().city);

    // below this the analytics cards can't hold their content
    let (min_w, min_h) = ScreenLayout::min_size(Insets::default());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(dashboard.config().title())
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .with_min_inner_size(LogicalSize::new(min_w.max(640) as f64, min_h as f64))
        .build(&event_loop)
        .map_err(|e| anyhow!("build window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let notice_visible = dashboard.notice().is_some();
                let action = match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(new_size) => {
                        size = new_size;
                        window.request_redraw();
                        None
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = Some((position.x, position.y));
                        None
                    }
                    WindowEvent::CursorLeft { .. } => {
                        cursor = None;
                        None
                    }
                    WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => cursor
                        .and_then(|(x, y)| options_for(size).layout().hit_test(x as f32, y as f32, notice_visible))
                        .map(Action::from),
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => action_for_key(key, notice_visible),
                    _ => None,
                };
                if let Some(action) = action {
                    apply(&mut dashboard, action);
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, &renderer, &dashboard, size) {
                    warn!("frame dropped: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Render the dashboard at the window's physical size and blit it.
fn present(
    surface: &mut softbuffer::Surface,
    renderer: &Renderer,
    dashboard: &Dashboard,
    size: PhysicalSize<u32>,
) -> Result<()> {
    // Minimised windows report a zero size.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    let (rgba, _, _, _) = renderer.render_to_rgba8(dashboard, &options_for(size))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    // softbuffer pixels are 0RGB
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
