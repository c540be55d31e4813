//! Background execution of API requests.
//!
//! The event loop never blocks on the network: controllers emit a [`Request`]
//! tagged with a [`Ticket`], an [`Executor`] runs it elsewhere, and the loop
//! later drains the finished [`Response`]s and hands them back to whichever
//! controller is waiting for that ticket.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::api::{ApiError, UserApi};
use crate::model::{Draft, User};

/// Identifies one dispatched request. Strictly increasing per application.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    CreateUser(Draft),
    ListUsers,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Created(Result<User, ApiError>),
    Listed(Result<Vec<User>, ApiError>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

impl Request {
    /// Perform the request against `api`, blocking the current thread.
    pub fn run(self, api: &dyn UserApi) -> Outcome {
        match self {
            Request::CreateUser(draft) => Outcome::Created(api.create_user(&draft)),
            Request::ListUsers => Outcome::Listed(api.get_users()),
        }
    }
}

/// Runs requests and reports their results later.
pub trait Executor {
    fn dispatch(&mut self, ticket: Ticket, request: Request);
    /// Responses finished since the previous call, in completion order.
    fn drain(&mut self) -> Vec<Response>;
}

/// One short-lived thread per request; results come back over a channel.
pub struct ThreadExecutor {
    api: Arc<dyn UserApi>,
    tx: Sender<Response>,
    rx: Receiver<Response>,
}

impl ThreadExecutor {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }
}

impl Executor for ThreadExecutor {
    fn dispatch(&mut self, ticket: Ticket, request: Request) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!(ticket, ?request, "dispatching request");
        let spawned = thread::Builder::new()
            .name(format!("api-{ticket}"))
            .spawn(move || {
                let outcome = request.run(api.as_ref());
                // The receiver only goes away when the app is shutting down.
                let _ = tx.send(Response { ticket, outcome });
            });
        if let Err(err) = spawned {
            warn!(ticket, error = %err, "could not spawn request thread");
        }
    }

    fn drain(&mut self) -> Vec<Response> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    struct StaticApi;

    impl UserApi for StaticApi {
        fn create_user(&self, draft: &Draft) -> Result<User, ApiError> {
            Ok(User {
                id: 42,
                full_name: draft.full_name.clone(),
                date_of_birth: draft.date_of_birth.clone(),
                preferred_location: draft.preferred_location.clone(),
                programming_skills: draft.programming_skills.clone(),
                resume_summary: draft.resume_summary.clone(),
            })
        }

        fn get_users(&self) -> Result<Vec<User>, ApiError> {
            Err(ApiError::new("Failed to fetch users"))
        }

        fn get_user_by_id(&self, _id: i64) -> Result<User, ApiError> {
            Err(ApiError::new("Failed to fetch user"))
        }
    }

    #[test]
    fn thread_executor_delivers_tagged_responses() {
        let mut exec = ThreadExecutor::new(Arc::new(StaticApi));
        exec.dispatch(7, Request::ListUsers);

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut got = Vec::new();
        while got.is_empty() && Instant::now() < deadline {
            got = exec.drain();
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(
            got,
            vec![Response {
                ticket: 7,
                outcome: Outcome::Listed(Err(ApiError::new("Failed to fetch users"))),
            }]
        );
    }

    #[test]
    fn create_request_passes_draft_through() {
        let draft = Draft {
            full_name: "Test User".into(),
            ..Draft::default()
        };
        match Request::CreateUser(draft).run(&StaticApi) {
            Outcome::Created(Ok(user)) => assert_eq!(user.full_name, "Test User"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
