//! Quote provider implementations.

mod manual_provider;
mod remote_provider;

pub use manual_provider::ManualProvider;
pub use remote_provider::RemoteQuoteProvider;
