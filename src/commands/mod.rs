pub mod clear;
pub mod completions;
pub mod expiry;
pub mod export;

pub use clear::ClearCommand;
pub use completions::CompletionsCommand;
pub use expiry::ExpiryCommand;
pub use export::ExportCommand;
