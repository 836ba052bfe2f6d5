// src/application/dispatch/command.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

/// An instruction to perform one state-changing operation. `Output` is `()`
/// for plain mutations and a newly assigned id for creations.
pub trait Command: Send + 'static {
    type Output: Send + 'static;
}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(&self, command: C) -> ApplicationResult<C::Output>;
}

/// Routes each command to the one handler registered for its type.
pub struct CommandBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CommandBus {
    pub fn builder() -> CommandBusBuilder {
        CommandBusBuilder::default()
    }

    pub async fn dispatch<C: Command>(&self, command: C) -> ApplicationResult<C::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn CommandHandler<C>>>())
            .ok_or_else(|| ApplicationError::handler_not_found(type_name::<C>()))?;
        handler.handle(command).await
    }
}

#[derive(Default)]
pub struct CommandBusBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CommandBusBuilder {
    /// Pairs a command type with its handler. At most one handler per type;
    /// a duplicate registration is a startup wiring defect and aborts.
    pub fn register<C, H>(mut self, handler: H) -> Self
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let erased: Arc<dyn CommandHandler<C>> = Arc::new(handler);
        let previous = self.handlers.insert(TypeId::of::<C>(), Box::new(erased));
        assert!(
            previous.is_none(),
            "duplicate command handler registered for {}",
            type_name::<C>()
        );
        self
    }

    pub fn build(self) -> CommandBus {
        CommandBus {
            handlers: self.handlers,
        }
    }
}
