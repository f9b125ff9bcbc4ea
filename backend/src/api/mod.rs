pub mod channel;
pub mod export;
pub mod video;

pub use channel::*;
pub use export::*;
pub use video::*;
