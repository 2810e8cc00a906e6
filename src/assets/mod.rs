/// Image decoding into raster buffers.
pub mod decode;
