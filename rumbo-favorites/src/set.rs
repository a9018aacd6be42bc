use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A remote mutation the caller must perform to bring the backend in line
/// with the local membership set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    Add(Uuid),
    Remove(Uuid),
}

impl SyncCommand {
    fn toward(flight_id: Uuid, favorited: bool) -> Self {
        if favorited {
            SyncCommand::Add(flight_id)
        } else {
            SyncCommand::Remove(flight_id)
        }
    }
}

/// Per-flight request bookkeeping while a sync is in flight.
#[derive(Debug)]
struct Inflight {
    /// Last state the server acknowledged.
    confirmed: bool,
    /// State the in-flight request is trying to set.
    requested: bool,
    /// Latest user intent; may move on while the request is pending.
    desired: bool,
}

/// The current user's favorite flights, mutated optimistically.
///
/// Toggles flip local membership immediately and emit at most one in-flight
/// sync request per flight: further toggles while a request is pending only
/// update the recorded intent, and `complete` reconciles by issuing a
/// follow-up when intent moved on, or rolling back to the server-confirmed
/// state when the request failed.
#[derive(Debug, Default)]
pub struct FavoriteSet {
    members: HashSet<Uuid>,
    inflight: HashMap<Uuid, Inflight>,
    hydrated: bool,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the backend's membership list. Called once per mount.
    pub fn hydrate(&mut self, flight_ids: Vec<Uuid>) {
        self.members = flight_ids.into_iter().collect();
        self.inflight.clear();
        self.hydrated = true;
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn is_favorite(&self, flight_id: Uuid) -> bool {
        self.members.contains(&flight_id)
    }

    /// Flip membership optimistically. Returns the sync request to issue,
    /// or `None` when one is already in flight for this flight (the new
    /// intent is coalesced into it).
    pub fn toggle(&mut self, flight_id: Uuid) -> Option<SyncCommand> {
        let desired = !self.members.contains(&flight_id);
        self.apply_local(flight_id, desired);

        if let Some(pending) = self.inflight.get_mut(&flight_id) {
            pending.desired = desired;
            return None;
        }

        self.inflight.insert(
            flight_id,
            Inflight {
                confirmed: !desired,
                requested: desired,
                desired,
            },
        );
        Some(SyncCommand::toward(flight_id, desired))
    }

    /// Settle the in-flight request for `flight_id`. On success, a follow-up
    /// command is returned if the user's intent changed while the request
    /// was pending. On failure, the optimistic flip is rolled back to the
    /// last server-confirmed state.
    pub fn complete(&mut self, flight_id: Uuid, success: bool) -> Option<SyncCommand> {
        let Some(pending) = self.inflight.remove(&flight_id) else {
            return None;
        };

        if !success {
            tracing::warn!(%flight_id, "Favorite sync failed, rolling back");
            self.apply_local(flight_id, pending.confirmed);
            return None;
        }

        if pending.desired != pending.requested {
            // Intent moved on mid-flight; chase it with one more request.
            self.inflight.insert(
                flight_id,
                Inflight {
                    confirmed: pending.requested,
                    requested: pending.desired,
                    desired: pending.desired,
                },
            );
            return Some(SyncCommand::toward(flight_id, pending.desired));
        }

        None
    }

    fn apply_local(&mut self, flight_id: Uuid, favorited: bool) {
        if favorited {
            self.members.insert(flight_id);
        } else {
            self.members.remove(&flight_id);
        }
    }
}
