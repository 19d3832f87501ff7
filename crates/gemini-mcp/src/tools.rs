//! Tool registry and dispatcher.

pub mod arguments;
pub mod dispatcher;
pub mod envelope;
pub mod invocation;
pub mod registry;
pub mod schema;

pub use arguments::Arguments;
pub use dispatcher::Dispatcher;
pub use envelope::{ContentItem, ResponseEnvelope};
pub use invocation::{InvocationRecord, InvocationStatus};
pub use registry::{RegisteredTool, ToolHandler, ToolRegistry};
pub use schema::{ArgumentSchema, ArgumentType, Schema, ToolDescriptor};
