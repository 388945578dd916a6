mod compose;
mod error;
mod fields;
mod inquiry;
mod limits;
mod submission;

pub use compose::*;
pub use error::*;
pub use fields::*;
pub use inquiry::*;
pub use limits::*;
pub use submission::*;
