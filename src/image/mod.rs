//! Pixel storage: the RGBA `PixelBuffer` exchanged between pipeline stages and
//! the scalar planes used internally for luminance and gradients.
pub mod io;
pub mod plane;
pub mod rgba;
pub mod traits;

pub use self::plane::{ImageBuf, ImageF32, ImageF64};
pub use self::rgba::{PixelBuffer, CHANNELS};
pub use self::traits::{ImageView, ImageViewMut};
