mod session;

pub use session::DEFAULT_MAX_PENDING;
pub use session::PENDING_TTL_SECS;
pub use session::Session;
pub use session::SessionManager;
