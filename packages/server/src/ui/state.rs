//! Shared application state.

use std::{collections::HashMap, sync::Arc};

use chathub_shared::time::Clock;
use tokio::sync::Mutex;

use crate::{
    domain::{Presence, Store},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryPresenceRepository, InMemoryStoreRepository},
    },
    usecase::{
        ClearCommentsUseCase, CommitSequencer, ConnectClientUseCase, DisconnectClientUseCase,
        GetCommentsUseCase, GetPendingJobsUseCase, GetWorkersUseCase, RegisterWorkerUseCase,
        SubmitCommentUseCase, SubmitJobUseCase,
    },
};

/// Use cases injected into every handler via axum's `State` extractor.
///
/// Constructed once at startup; tests build their own isolated instance.
pub struct AppState {
    pub submit_comment_usecase: Arc<SubmitCommentUseCase>,
    pub submit_job_usecase: Arc<SubmitJobUseCase>,
    pub clear_comments_usecase: Arc<ClearCommentsUseCase>,
    pub get_comments_usecase: Arc<GetCommentsUseCase>,
    pub get_pending_jobs_usecase: Arc<GetPendingJobsUseCase>,
    pub get_workers_usecase: Arc<GetWorkersUseCase>,
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub register_worker_usecase: Arc<RegisterWorkerUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
}

impl AppState {
    /// Wire the in-memory store, presence map and WebSocket pusher into
    /// every use case.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        // 1. Repositories
        let store = Arc::new(InMemoryStoreRepository::new(Arc::new(Mutex::new(
            Store::new(),
        ))));
        let presence = Arc::new(InMemoryPresenceRepository::new(Arc::new(Mutex::new(
            Presence::new(),
        ))));

        // 2. MessagePusher
        let pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))));

        // 3. UseCases, all sharing one commit sequencer
        let sequencer = CommitSequencer::new();
        Self {
            submit_comment_usecase: Arc::new(SubmitCommentUseCase::new(
                store.clone(),
                pusher.clone(),
                clock.clone(),
                sequencer.clone(),
            )),
            submit_job_usecase: Arc::new(SubmitJobUseCase::new(
                store.clone(),
                pusher.clone(),
                clock.clone(),
                sequencer.clone(),
            )),
            clear_comments_usecase: Arc::new(ClearCommentsUseCase::new(
                store.clone(),
                pusher.clone(),
                sequencer.clone(),
            )),
            get_comments_usecase: Arc::new(GetCommentsUseCase::new(store.clone())),
            get_pending_jobs_usecase: Arc::new(GetPendingJobsUseCase::new(store.clone())),
            get_workers_usecase: Arc::new(GetWorkersUseCase::new(presence.clone())),
            connect_client_usecase: Arc::new(ConnectClientUseCase::new(
                store,
                presence.clone(),
                pusher.clone(),
                sequencer.clone(),
            )),
            register_worker_usecase: Arc::new(RegisterWorkerUseCase::new(
                presence.clone(),
                pusher.clone(),
                clock,
                sequencer.clone(),
            )),
            disconnect_client_usecase: Arc::new(DisconnectClientUseCase::new(
                presence, pusher, sequencer,
            )),
        }
    }
}
