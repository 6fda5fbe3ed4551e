pub mod crossfade;
pub mod flowers;
pub mod gradient;
pub mod hover;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod tap;

pub use crossfade::*;
pub use flowers::*;
pub use gradient::*;
pub use hover::*;
pub use reveal::*;
pub use scroll::*;
pub use sections::*;
pub use tap::*;
