// PPU module - scan position, vertical blank, and NMI generation
//
// This is the minimal PPU the CPU core observes: a `(scanline,
// line_position)` counter pair advanced once per tick, a sticky vblank flag
// read (and cleared) through $2002, and a one-shot NMI line raised at the
// start of the vblank scanline. Three PPU ticks elapse per CPU cycle.
//
// Scanline layout (NTSC):
//
// ```text
// 1-240:   visible area (positions 1-256 produce pixels)
// 241:     vblank begins at position 1; NMI is raised
// 261:     last scanline; the counter wraps back to 0 afterwards
// ```
//
// Accurate picture rendering is out of scope. The visible area is filled
// with a placeholder grayscale gradient so the host window has something to
// present at each frame boundary.

use crate::display::framebuffer::FrameBuffer;

/// Last scanline of the visible area
pub const VBLANK_SCANLINE: u16 = 240;

/// Line position at which the visible area of a scanline ends
pub const HBLANK_POSITION: u16 = 256;

/// Last scanline before the counter wraps
pub const LAST_SCANLINE: u16 = 261;

/// Last position within a scanline (341 ticks per line)
pub const LAST_LINE_POSITION: u16 = 340;

/// Vblank bit in the status register
pub const STATUS_VBLANK: u8 = 0x80;

/// PPU structure holding the scan state the CPU can observe
pub struct Ppu {
    /// Frame counter, incremented at each frame boundary
    frame: u32,

    /// Current scanline (0-261)
    scanline: u16,

    /// Current position within the scanline (0-340)
    line_position: u16,

    /// Vblank flag; sticky until read through the status register
    in_vblank: bool,

    /// One-shot NMI line; cleared when the CPU takes it
    nmi_pending: bool,

    /// Set at the frame boundary, cleared when the frame is taken
    frame_ready: bool,

    /// Placeholder picture output
    frame_buffer: FrameBuffer,
}

impl Ppu {
    /// Create a new PPU in the reset state
    pub fn new() -> Self {
        Ppu {
            frame: 0,
            scanline: 0,
            line_position: 0,
            in_vblank: false,
            nmi_pending: false,
            frame_ready: false,
            frame_buffer: FrameBuffer::new(),
        }
    }

    /// Reset the scan counters and both flags
    pub fn reset(&mut self) {
        self.frame = 0;
        self.scanline = 0;
        self.line_position = 0;
        self.in_vblank = false;
        self.nmi_pending = false;
        self.frame_ready = false;
        self.frame_buffer.clear(0x00);
    }

    /// Advance the scan position by one tick
    ///
    /// Draws a placeholder pixel while inside the visible area, marks the
    /// frame complete at the end of it, and raises vblank + NMI at the
    /// start of scanline 241.
    pub fn tick(&mut self) {
        if self.in_visible_area() {
            let x = (self.line_position - 1) as usize;
            let y = (self.scanline - 1) as usize;
            self.frame_buffer.set_pixel(x, y, placeholder_shade(self.frame, x, y));
        }

        if self.at_frame_boundary() {
            self.frame = self.frame.wrapping_add(1);
            self.frame_ready = true;
        }

        self.advance_scan();
    }

    /// The scan advance rule
    fn advance_scan(&mut self) {
        self.line_position += 1;

        if self.line_position > LAST_LINE_POSITION {
            self.line_position = 0;
            self.scanline += 1;
        }

        if self.scanline == VBLANK_SCANLINE + 1 && self.line_position == 1 {
            self.in_vblank = true;
            self.nmi_pending = true;
        } else if self.scanline > LAST_SCANLINE {
            self.scanline = 0;
        }
    }

    #[inline]
    fn in_visible_area(&self) -> bool {
        self.scanline > 0
            && self.scanline <= VBLANK_SCANLINE
            && self.line_position > 0
            && self.line_position <= HBLANK_POSITION
    }

    #[inline]
    fn at_frame_boundary(&self) -> bool {
        self.scanline == VBLANK_SCANLINE && self.line_position == HBLANK_POSITION
    }

    /// Read the status register: bit 7 is the vblank flag, and reading
    /// clears it
    pub fn read_status(&mut self) -> u8 {
        let status = self.peek_status();
        self.in_vblank = false;
        status
    }

    /// Status register value without the read side effect
    pub fn peek_status(&self) -> u8 {
        if self.in_vblank {
            STATUS_VBLANK
        } else {
            0
        }
    }

    /// Take the one-shot NMI line, clearing it
    pub fn take_nmi(&mut self) -> bool {
        let pending = self.nmi_pending;
        self.nmi_pending = false;
        pending
    }

    /// Take the frame-ready flag, clearing it
    pub fn take_frame(&mut self) -> bool {
        let ready = self.frame_ready;
        self.frame_ready = false;
        ready
    }

    /// Place the scan counters directly
    ///
    /// Conformance harnesses seed the counters to match a reference trace
    /// (the nestest log starts as if 21 ticks have already elapsed).
    pub fn set_scan_position(&mut self, scanline: u16, line_position: u16) {
        self.scanline = scanline;
        self.line_position = line_position;
    }

    /// Current scanline (0-261)
    pub fn scanline(&self) -> u16 {
        self.scanline
    }

    /// Current position within the scanline (0-340)
    pub fn line_position(&self) -> u16 {
        self.line_position
    }

    /// Frames completed since reset
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether the vblank flag is currently set
    pub fn in_vblank(&self) -> bool {
        self.in_vblank
    }

    /// Whether an NMI is waiting to be taken
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// The placeholder picture for the current frame
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder gradient: a moving grayscale wash over the visible area
fn placeholder_shade(frame: u32, x: usize, y: usize) -> u8 {
    let c = (frame as i32 + x as i32 + y as i32) % 510 - 255;
    c.unsigned_abs() as u8
}
