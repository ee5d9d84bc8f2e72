//! # Mock Framework
//!
//! Utilities for testing clients and controllers against a scripted store.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_query`] or [`expect_update`] to assert behavior,
//! and [`assert_no_request`] to prove a code path never touched the store.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Controller tests don't need a full `ResourceActor`. The mock client sends its
/// messages to a channel the test owns, so the test can inspect each request and
/// answer with success, failure or a crafted record set.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
#[allow(dead_code)]
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Panics if any request is waiting on the channel.
pub fn assert_no_request<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    if let Ok(request) = receiver.try_recv() {
        let kind = match request {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Query { .. } => "query",
        };
        panic!("Unexpected {kind} request on {}", T::COLLECTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Venue, VenueCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Venue>(10);

        let create_task = tokio::spawn(async move {
            client.create(VenueCreate { name: "Casa Verde".to_string() }).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Casa Verde");
        responder.send(Ok("venue_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("venue_1".to_string()));
        assert_no_request(&mut receiver);
    }

    #[tokio::test]
    async fn test_mock_client_failure() {
        let (client, mut receiver) = create_mock_client::<Venue>(10);

        let query_task = tokio::spawn(async move { client.query(()).await });

        let ((), responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        responder.send(Err(FrameworkError::ActorClosed)).unwrap();

        assert_eq!(query_task.await.unwrap(), Err(FrameworkError::ActorClosed));
    }
}
