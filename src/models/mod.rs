pub mod push_line;
pub mod record;
pub mod recommendation;

pub use push_line::*;
pub use record::*;
pub use recommendation::*;
