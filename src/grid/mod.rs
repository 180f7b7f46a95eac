pub mod config;
pub mod constants;
pub mod engine;
pub mod gate;
pub mod highlight;
pub mod layout;
pub mod particles;
pub mod playback;
pub mod scale;

pub use config::*;
pub use engine::*;
pub use gate::*;
pub use highlight::*;
pub use layout::*;
pub use particles::*;
pub use playback::*;
pub use scale::*;
