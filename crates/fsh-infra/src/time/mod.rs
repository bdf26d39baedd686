mod frame;
mod system_clock;

pub use frame::TokioFrameYield;
pub use system_clock::SystemClock;
