pub use self::{piece::*, shape::*, well::*};

pub(crate) mod piece;
pub(crate) mod shape;
pub(crate) mod well;
