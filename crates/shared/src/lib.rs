//! Wire-level types shared between the screening core and the desktop frontend.

pub mod domain;
pub mod error;
pub mod protocol;
