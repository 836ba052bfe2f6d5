// src/application/dispatch/query.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

/// A request for data with no side effects. Query handlers must not mutate.
pub trait Query: Send + 'static {
    type Output: Send + 'static;
}

#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    async fn handle(&self, query: Q) -> ApplicationResult<Q::Output>;
}

pub struct QueryBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl QueryBus {
    pub fn builder() -> QueryBusBuilder {
        QueryBusBuilder::default()
    }

    pub async fn dispatch<Q: Query>(&self, query: Q) -> ApplicationResult<Q::Output> {
        let handler = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn QueryHandler<Q>>>())
            .ok_or_else(|| ApplicationError::handler_not_found(type_name::<Q>()))?;
        handler.handle(query).await
    }
}

#[derive(Default)]
pub struct QueryBusBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl QueryBusBuilder {
    pub fn register<Q, H>(mut self, handler: H) -> Self
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let erased: Arc<dyn QueryHandler<Q>> = Arc::new(handler);
        let previous = self.handlers.insert(TypeId::of::<Q>(), Box::new(erased));
        assert!(
            previous.is_none(),
            "duplicate query handler registered for {}",
            type_name::<Q>()
        );
        self
    }

    pub fn build(self) -> QueryBus {
        QueryBus {
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl Query for Echo {
        type Output = String;
    }

    struct EchoHandler;

    #[async_trait]
    impl QueryHandler<Echo> for EchoHandler {
        async fn handle(&self, query: Echo) -> ApplicationResult<String> {
            Ok(query.0.to_string())
        }
    }

    #[tokio::test]
    async fn dispatch_returns_handler_output() {
        let bus = QueryBus::builder().register(EchoHandler).build();
        assert_eq!(bus.dispatch(Echo("hello")).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn unregistered_query_fails_with_handler_not_found() {
        struct Nobody;
        impl Query for Nobody {
            type Output = ();
        }

        let bus = QueryBus::builder().register(EchoHandler).build();
        let err = bus.dispatch(Nobody).await.unwrap_err();
        assert!(matches!(err, ApplicationError::HandlerNotFound(_)));
    }
}
