/// Errors raised while decoding a framed reply or a file stream.
pub mod codec_error;
