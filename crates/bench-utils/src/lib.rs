pub mod audio;
pub mod pt100;
pub mod solar;
pub mod temperature;


pub use audio::*;
pub use pt100::*;
pub use solar::*;
pub use temperature::*;
