//! Memory request/response types and the narrow traits that connect the
//! [`Core`](crate::core::cpu::Core) to the [`Dram`](crate::dram::controller::Dram)
//! controller.
//!
//! Unlike the reference implementation this simulator is based on — which
//! attaches a receiver pointer to every request and lets the DRAM model call
//! back into it directly — requests here carry no callback. The
//! [`Driver`](crate::sim::driver::Driver) is the only consumer of DRAM
//! responses, so a request/response pair with plain data is simpler than a
//! `dyn` trait object threaded through both models for a topology with a
//! single producer and a single consumer.

pub mod request;

pub use request::{MemRequest, MemRequestKind, MemResponse, RequestSink, ResponseSink};
