/// Out-of-band notifications from the HTTP client.
///
/// The client never touches token storage or navigation itself; whoever
/// composes the application subscribes and reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
    /// An authenticated call came back 401, so the session is no longer valid
    Unauthorized,
}
