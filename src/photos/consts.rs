pub const PREVIEW_IMAGE_WIDTH: u32 = 256;
pub const PREVIEW_IMAGE_HEIGHT: u32 = 256;
