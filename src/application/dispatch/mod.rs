//! In-process command/query dispatch.
//!
//! Both buses hold an immutable `TypeId -> handler` registry assembled once
//! at startup through a builder and injected into the HTTP state; nothing
//! registers handlers at runtime. Dispatch locates the single handler for the
//! message's concrete type and invokes it, propagating its result or error
//! untouched. A missing handler is a wiring defect and surfaces as
//! `ApplicationError::HandlerNotFound` carrying the message type name.

mod command;
mod query;

pub use command::{Command, CommandBus, CommandBusBuilder, CommandHandler};
pub use query::{Query, QueryBus, QueryBusBuilder, QueryHandler};
