/// Events emitted by a handler registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and are also recorded through `tracing` at the `TRACE` level.
///
/// # Examples
///
/// ```rust
/// use request_mediator::RegistryEvent;
///
/// let event = RegistryEvent::Register {
///     request: "app::SumRequest",
///     handler: "app::SumHandler",
/// };
/// println!("{}", event);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A handler registration was attempted.
    Register {
        /// The request type name used as the key.
        request: &'static str,
        /// The handler type name associated with it.
        handler: &'static str,
    },

    /// A handler was looked up for a request instance.
    GetHandler {
        request: &'static str,
        /// Whether a handler was found.
        found: bool,
    },

    /// A request type existence check was performed.
    Contains { request: &'static str, found: bool },

    /// The registry was cleared.
    Clear,
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register { request, handler } => {
                write!(f, "register {{ request: {request}, handler: {handler} }}")
            }
            RegistryEvent::GetHandler { request, found } => {
                write!(f, "get_handler {{ request: {request}, found: {found} }}")
            }
            RegistryEvent::Contains { request, found } => {
                write!(f, "contains {{ request: {request}, found: {found} }}")
            }
            RegistryEvent::Clear => write!(f, "Clearing the Registry"),
        }
    }
}
