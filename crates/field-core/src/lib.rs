pub mod cloud;
pub mod connectivity;
pub mod constants;
pub mod error;
pub mod field;
pub mod glyphs;
pub mod input;
pub mod rig;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use cloud::*;
pub use connectivity::*;
pub use constants::*;
pub use error::HostError;
pub use field::*;
pub use input::*;
pub use rig::*;
pub use scene::*;
pub use surface::*;
pub use viewport::*;
