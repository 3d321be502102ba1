mod api;
mod config;
mod core;
mod query;
mod storage;
mod types;

pub use config::Config;
pub use storage::{NodeInfo, QuadTree};

pub(crate) use crate::error::{QuadtreeError, QuadtreeResult};
pub(crate) use storage::{Node, QuadTreeInner, ROOT_NODE};
pub(crate) use types::{quadrant_indices, InsertStack, QueryStack};
