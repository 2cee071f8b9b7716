#![allow(dead_code)]

use edge_detector::PixelBuffer;

/// Opaque gray pixel.
pub fn gray_px(v: u8) -> [u8; 4] {
    [v, v, v, 255]
}

/// Columns `< split_x` are black, the rest white.
pub fn vertical_step(width: u32, height: u32, split_x: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, _| {
        if x < split_x {
            gray_px(0)
        } else {
            gray_px(255)
        }
    })
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    PixelBuffer::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) & 1 == 0 {
            gray_px(32)
        } else {
            gray_px(220)
        }
    })
}

/// Deterministic colour noise from a small LCG.
pub fn noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    PixelBuffer::from_fn(width, height, |_, _| {
        let mut px = [0u8; 4];
        for c in &mut px {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            *c = (state >> 56) as u8;
        }
        px
    })
}
