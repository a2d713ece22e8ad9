// Monochrome frame buffer for the e-paper panel
use image::GrayImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Black,
    White,
}

/// Two-valued pixel grid, row-major. Starts all white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    black: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            black: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Threshold a grayscale canvas: luma below `threshold` becomes black.
    pub fn from_luma(canvas: &GrayImage, threshold: u8) -> Self {
        let (width, height) = canvas.dimensions();
        let mut bitmap = Self::new(width, height);
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel.0[0] < threshold {
                bitmap.set(x, y, Ink::Black);
            }
        }
        bitmap
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Ink> {
        self.index(x, y).map(|i| if self.black[i] { Ink::Black } else { Ink::White })
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: u32, y: u32, ink: Ink) {
        if let Some(i) = self.index(x, y) {
            self.black[i] = ink == Ink::Black;
        }
    }

    #[cfg(test)]
    pub fn black_pixels(&self) -> usize {
        self.black.iter().filter(|b| **b).count()
    }

    /// Count black pixels inside `[x0, x1) x [y0, y1)`, clamped to the grid.
    #[cfg(test)]
    pub fn black_pixels_in(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> usize {
        let mut count = 0;
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                if self.get(x, y) == Some(Ink::Black) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count pixels inside `[x0, x1) x [y0, y1)` whose ink differs from `other`.
    #[cfg(test)]
    pub fn differing_pixels_in(&self, other: &Bitmap, x0: u32, y0: u32, x1: u32, y1: u32) -> usize {
        let mut count = 0;
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                if self.get(x, y) != other.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Pack rows MSB first, each row padded to a whole byte, 1 = white.
    pub fn to_packed_bytes(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8) as usize;
        let mut bytes = vec![0u8; stride * self.height as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) == Some(Ink::White) {
                    bytes[y as usize * stride + x as usize / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        bytes
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}
