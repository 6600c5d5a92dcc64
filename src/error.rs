use thiserror::Error;

#[derive(Debug, Error)]
pub enum LastPassError {
    #[error("Error: item id is empty")]
    EmptyItemId,
    #[error("Error: listing failed for folder '{folder}': {reason}")]
    ListFailed { folder: String, reason: String },
    #[error("Error: show failed for id '{id}': {reason}")]
    ShowFailed { id: String, reason: String },
    #[error("Error: failed to list folders: {reason}")]
    FoldersFailed { reason: String },
}
