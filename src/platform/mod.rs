//! Platform layer
//!
//! Opens a fixed-size window, turns winit events into `InputEvent`s and
//! presents the software canvas through `pixels`. Everything above this
//! module is platform-free.

pub mod keymap;

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use crate::recorder::RecorderError;
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sim::InputEvent;

pub use keymap::{HeldKeys, pointer_button, toggle_for_key, wheel_notches};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("render surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

/// Something the window runner can drive, one frame per loop iteration
pub trait Demo {
    /// Called for each input as it arrives
    fn handle_input(&mut self, event: InputEvent);
    /// Draw the next frame. `canvas` still holds the previous frame on entry.
    fn frame(&mut self, canvas: &mut Canvas) -> Result<(), AppError>;
    /// Called after the frame is on screen; the place to throttle
    fn end_frame(&mut self);
}

/// Run `demo` in a window until it is closed or a frame fails
pub fn run<D: Demo>(settings: &Settings, demo: &mut D) -> Result<(), AppError> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&settings.title)
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(settings.width, settings.height, surface_texture)?;
    let mut canvas = Canvas::new(settings.width, settings.height);
    let mut cursor = Vec2::ZERO;
    let mut held_keys = HeldKeys::default();
    let mut failure: Option<AppError> = None;

    log::info!("Window open ({}x{})", settings.width, settings.height);

    event_loop.run_return(|event, _, control_flow| {
        control_flow.set_poll();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if !held_keys.update(key, state) {
                        return;
                    }
                    if key == VirtualKeyCode::Escape {
                        control_flow.set_exit();
                    } else if let Some(toggle) = toggle_for_key(key) {
                        demo.handle_input(InputEvent::Toggle(toggle));
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = canvas_position(&pixels, position);
                    demo.handle_input(InputEvent::PointerMoved { pos: cursor });
                }
                WindowEvent::CursorLeft { .. } => demo.handle_input(InputEvent::PointerLeft),
                WindowEvent::MouseInput { state, button, .. } => {
                    if let Some(button) = pointer_button(button) {
                        let event = match state {
                            ElementState::Pressed => InputEvent::ButtonPressed { button, pos: cursor },
                            ElementState::Released => {
                                InputEvent::ButtonReleased { button, pos: cursor }
                            }
                        };
                        demo.handle_input(event);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    demo.handle_input(InputEvent::Wheel {
                        delta_y: wheel_notches(delta),
                    });
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                        log::warn!("Resize surface error: {e}");
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let drawn = demo.frame(&mut canvas).and_then(|()| {
                    pixels.frame_mut().copy_from_slice(canvas.as_bytes());
                    pixels.render().map_err(AppError::from)
                });
                match drawn {
                    Ok(()) => demo.end_frame(),
                    Err(e) => {
                        failure = Some(e);
                        control_flow.set_exit();
                    }
                }
            }
            _ => {}
        }
    });

    log::info!("Window closed");
    failure.map_or(Ok(()), Err)
}

/// Window position to canvas pixel, clamped to the canvas
fn canvas_position(pixels: &Pixels, position: PhysicalPosition<f64>) -> Vec2 {
    let (x, y) = pixels
        .window_pos_to_pixel((position.x as f32, position.y as f32))
        .unwrap_or_else(|outside| pixels.clamp_pixel_pos(outside));
    Vec2::new(x as f32, y as f32)
}
