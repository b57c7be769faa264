// Display module - host window and frame presentation
//
// This module is the host-side collaborator of the emulator core:
// - Frame buffer (256x240 grayscale, expanded to RGBA at render time)
// - Window creation with integer scaling using winit + pixels
// - Frame pacing and quit handling (window close or Escape)

pub mod framebuffer;
pub mod window;

pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use window::{run_window, EmulatorWindow, WindowConfig};
