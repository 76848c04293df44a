// App layer: the tool-invocation boundary in front of the query service.

pub mod stdio;
pub mod tools;

pub use stdio::{serve, serve_stdio, ServeStats, ToolResponse};
pub use tools::{Tool, ToolDescriptor, ToolDispatcher};
