pub mod error;
pub mod feedback;
pub mod outlet;
pub mod profile;
pub mod scan;
pub mod session;

pub use error::*;
pub use feedback::*;
pub use outlet::*;
pub use profile::*;
pub use scan::*;
pub use session::*;
