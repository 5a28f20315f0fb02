//! Employment coverage pipeline:
//! extract → normalize → sweep → aggregate.

pub mod coverage;
pub mod extract;
pub mod normalize;
pub mod sweep;
