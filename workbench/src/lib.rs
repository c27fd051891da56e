//! Interactive editing session for security architecture diagrams: place
//! components, connect them with classified edges, load starter templates,
//! score the posture and export the result.

pub mod error;
pub mod session;

pub use error::WorkbenchError;
pub use session::Workbench;
