//! Vulkan SC record layer: symbol tables, record structs, their field
//! mappings and the extension sum type.

mod extensions;
mod features;
mod pipeline;
mod render_pass;
mod reservation;
mod resources;
mod types;

pub use extensions::Extension;
pub use features::*;
pub use pipeline::*;
pub use render_pass::*;
pub use reservation::*;
pub use resources::*;
pub use types::*;

/// An extensible record with its chain of [`Extension`] links.
pub type Chained<T> = pcjson_core::Chained<T, Extension>;

/// A bare chain of [`Extension`] links.
pub type Chain = pcjson_core::Chain<Extension>;
