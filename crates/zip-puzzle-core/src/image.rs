use crate::CellRect;

/// Borrowed 8-bit grayscale image.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

/// Owned 8-bit grayscale image.
#[derive(Clone, Debug)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    pub fn as_view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl GrayImageView<'_> {
    /// Copy the pixels of `rect`, clamped to the image, into an owned image.
    ///
    /// A rectangle entirely outside the image yields a zero-sized image.
    pub fn crop(&self, rect: CellRect) -> GrayImage {
        let x0 = rect.x0.clamp(0, self.width as i32) as usize;
        let x1 = rect.x1.clamp(0, self.width as i32) as usize;
        let y0 = rect.y0.clamp(0, self.height as i32) as usize;
        let y1 = rect.y1.clamp(0, self.height as i32) as usize;

        if x1 <= x0 || y1 <= y0 {
            return GrayImage {
                width: 0,
                height: 0,
                data: Vec::new(),
            };
        }

        let width = x1 - x0;
        let height = y1 - y0;
        let mut data = Vec::with_capacity(width * height);
        for y in y0..y1 {
            let row_start = y * self.width + x0;
            data.extend_from_slice(&self.data[row_start..row_start + width]);
        }

        GrayImage {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_image(width: usize, height: usize) -> GrayImage {
        GrayImage {
            width,
            height,
            data: (0..width * height).map(|i| i as u8).collect(),
        }
    }

    #[test]
    fn crop_copies_the_requested_region() {
        let img = ramp_image(4, 3);
        let cell = img.as_view().crop(CellRect {
            x0: 1,
            y0: 1,
            x1: 3,
            y1: 3,
        });

        assert_eq!(2, cell.width);
        assert_eq!(2, cell.height);
        assert_eq!(vec![5, 6, 9, 10], cell.data);
    }

    #[test]
    fn crop_clamps_to_image_extent() {
        let img = ramp_image(4, 3);
        let cell = img.as_view().crop(CellRect {
            x0: 2,
            y0: -5,
            x1: 100,
            y1: 2,
        });

        assert_eq!(2, cell.width);
        assert_eq!(2, cell.height);
        assert_eq!(vec![2, 3, 6, 7], cell.data);
    }

    #[test]
    fn degenerate_crop_is_empty() {
        let img = ramp_image(4, 3);
        let cell = img.as_view().crop(CellRect {
            x0: 10,
            y0: 10,
            x1: 20,
            y1: 20,
        });

        assert_eq!(0, cell.width);
        assert!(cell.data.is_empty());
    }
}
