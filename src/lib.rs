#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod graph;
pub mod icon;
pub mod ident;
pub mod label;
pub mod resource;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{IconMode, RenderOptions, load_options};
pub use graph::{DotGraph, GraphError};
pub use icon::{IconError, IconResolver};
pub use ident::{ClusterId, NodeId, RankId, escape_name};
pub use label::{namespace_label, resource_label};
pub use resource::{Manifest, Resource, ResourceKind, ResourceRef};
