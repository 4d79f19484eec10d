//! Services orchestrating domain logic over the repository traits.

pub mod session;
