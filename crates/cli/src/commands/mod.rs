pub mod depot;
pub mod local;

pub use depot::DepotArgs;
pub use local::LocalArgs;

/// Common error type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;
