/// Borrowed view of an interleaved 8-bit RGB frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameRgb8<'a> {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Bytes between consecutive rows (>= 3 * w)
    pub stride: usize,
    /// Interleaved RGB bytes, row-major
    pub data: &'a [u8],
}

impl<'a> FrameRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Pixel bytes of row `y`, padding stripped.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + 3 * self.w]
    }
}

/// Owned packed RGB buffer, used for the masked ROI sub-image.
#[derive(Clone, Debug)]
pub struct RgbBuffer {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl RgbBuffer {
    /// Construct a zero-initialized (black) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; 3 * w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * self.w + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = 3 * (y * self.w + x);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Borrow as a read-only frame view.
    pub fn as_view(&self) -> FrameRgb8<'_> {
        FrameRgb8 {
            w: self.w,
            h: self.h,
            stride: 3 * self.w,
            data: &self.data,
        }
    }
}
