//! Invocation lifecycle stages.

use strum::Display;

/// Where an invocation is in its lifecycle.
///
/// ```text
/// Created -> Validating -> Invalid
///                       -> Dispatching -> TransportFailed
///                                      -> Classifying -> Decoding -> Delivered | Failed
///                                                     -> ErrorMapping -> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    /// Invocation constructed, nothing run yet.
    Created,
    /// Checking the request.
    Validating,
    /// Request rejected; terminal.
    Invalid,
    /// Building the call and waiting on the transport.
    Dispatching,
    /// No response obtained; terminal.
    TransportFailed,
    /// Routing the response on its status.
    Classifying,
    /// Decoding a success body.
    Decoding,
    /// Decoding an error body.
    ErrorMapping,
    /// Value produced; terminal.
    Delivered,
    /// Error produced after a response arrived; terminal.
    Failed,
}

impl Stage {
    /// Returns `true` for stages that end an invocation.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Invalid | Self::TransportFailed | Self::Delivered | Self::Failed
        )
    }

    /// Returns `true` if moving from `self` to `next` is a legal transition.
    pub fn can_advance_to(&self, next: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, next),
            (Created, Validating)
                | (Validating, Invalid | Dispatching)
                | (Dispatching, TransportFailed | Classifying | Failed)
                | (Classifying, Decoding | ErrorMapping)
                | (Decoding, Delivered | Failed)
                | (ErrorMapping, Failed)
        )
    }
}
