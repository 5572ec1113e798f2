//! ProjectManager API model types.

mod integration;
mod notification;
mod project;
mod resource;
mod tag;
mod task;
mod timesheet;
mod workspace;

pub use integration::*;
pub use notification::*;
pub use project::*;
pub use resource::*;
pub use tag::*;
pub use task::*;
pub use timesheet::*;
pub use workspace::*;
