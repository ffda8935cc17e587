mod decode;
mod target;

pub use decode::run_decode;
pub use target::run_target;
