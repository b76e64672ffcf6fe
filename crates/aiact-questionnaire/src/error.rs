use thiserror::Error;

/// Errors raised by the catalog and the traversal engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    /// The engine was given an option that does not belong to the current
    /// question, or was asked to move after reaching the terminal state.
    #[error("invalid transition at question {question:?} with value {value:?}: {reason}")]
    InvalidTransition {
        /// The question the engine was positioned on.
        question: String,
        /// The value token that was submitted.
        value: String,
        /// Why the transition was rejected.
        reason: String,
    },

    /// A question id does not resolve in the catalog.
    #[error("unknown question id: {0:?}")]
    UnknownQuestionId(String),

    /// The catalog is structurally invalid (duplicate ids or values,
    /// unreachable questions).
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}
