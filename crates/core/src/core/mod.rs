//! The out-of-order core: reorder buffer, MSHR-coalesced non-blocking
//! reads, non-blocking writes, and an ordered response inbox.
//!
//! [`cpu::Core`] ties together [`rob::Rob`] and [`mshr::MshrTable`] into the
//! three-phase `tick` pipeline: retire, drain completed memory responses,
//! then issue.

pub mod cpu;
pub mod mshr;
pub mod rob;

pub use cpu::Core;
pub use mshr::{Mshr, MshrTable};
pub use rob::Rob;
