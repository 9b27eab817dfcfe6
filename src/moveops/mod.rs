//! Moving items between repositories, one at a time or folder contents in
//! bulk.

mod batch;
mod item;

/// One message from the move endpoint's response.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct MoveMessage {
    pub level: String,
    pub message: String,
}

/// The payload returned by a successful move. The server may answer 200
/// with no body at all; [`MoveReport::empty`] stands in for that case.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct MoveReport {
    #[serde(default)]
    pub messages: Vec<MoveMessage>,
}

impl MoveReport {
    pub(crate) fn empty() -> Self {
        Self::default()
    }
}

/// The outcome of one file within a bulk move.
#[derive(Debug)]
pub struct MoveOutcome {
    /// Base file name of the moved child.
    pub name: String,
    pub result: crate::Result<MoveReport>,
}

/// The outcome of a bulk move.
///
/// Individual failures do not abort the batch; every attempted file gets
/// its own entry. Completed moves are never rolled back.
#[derive(Debug)]
pub enum MoveItemsResult {
    /// The source folder listed no children; no move was attempted.
    NoChildren,
    /// One entry per child that matched the filter, in listing order.
    Moved(Vec<MoveOutcome>),
}

impl MoveItemsResult {
    /// Returns `true` when every attempted move succeeded, including the
    /// no-children case.
    pub fn is_success(&self) -> bool {
        match self {
            Self::NoChildren => true,
            Self::Moved(outcomes) => outcomes.iter().all(|outcome| outcome.result.is_ok()),
        }
    }
}
