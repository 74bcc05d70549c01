pub use status::*;
pub use winner::*;

mod status;
mod winner;
