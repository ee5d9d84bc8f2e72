//! Role-scoped dashboards built on the lifecycle controller, the catalog and the
//! statistics functions. They produce render models and notices, never errors.

pub mod admin;
pub mod cards;
pub mod notice;
pub mod owner;

pub use admin::*;
pub use notice::*;
pub use owner::*;
