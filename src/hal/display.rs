use std::ptr::NonNull;

/// A 24-bit RGB color word as stored in the LED matrix (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

/// A row-major pixel matrix that can be written one pixel at a time
pub trait Display {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write `color` at pixel (x, y). Writes outside the matrix are dropped.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Buffer index of pixel (x, y), or None when it lies outside the matrix
fn pixel_index(width: u32, height: u32, x: u32, y: u32) -> Option<usize> {
    if x >= width || y >= height {
        return None;
    }
    Some(y as usize * width as usize + x as usize)
}

/// In-memory LED matrix
///
/// Used by the host simulator and by tests. Counts writes so callers can
/// check how much of the screen a frame touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    writes: usize,
}

impl FrameBuffer {
    /// Create a black buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            writes: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        pixel_index(self.width, self.height, x, y).map(|i| Color(self.pixels[i]))
    }

    /// Raw row-major color words
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Number of pixel writes since creation or the last `reset_writes`
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color.0).count()
    }
}

impl Display for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = pixel_index(self.width, self.height, x, y) {
            self.pixels[i] = color.0;
            self.writes += 1;
        }
    }
}

/// Memory-mapped LED matrix peripheral
///
/// One 32-bit color word per pixel starting at the base address, row-major.
#[derive(Debug)]
pub struct LedMatrix {
    base: NonNull<u32>,
    width: u32,
    height: u32,
}

impl LedMatrix {
    /// Wrap the matrix mapped at `base`. Returns None for a null base.
    ///
    /// # Safety
    ///
    /// `base` must point to `width * height` writable, properly aligned `u32`
    /// words that stay mapped for the lifetime of the returned value and are
    /// not accessed through any other reference meanwhile.
    pub unsafe fn from_raw(base: *mut u32, width: u32, height: u32) -> Option<Self> {
        NonNull::new(base).map(|base| Self {
            base,
            width,
            height,
        })
    }
}

impl Display for LedMatrix {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = pixel_index(self.width, self.height, x, y) {
            // SAFETY: `i` is inside the mapping vouched for in `from_raw`.
            unsafe { self.base.as_ptr().add(i).write_volatile(color.0) }
        }
    }
}
