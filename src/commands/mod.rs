pub mod extract;
pub mod registry;
pub mod response;
pub mod state;

pub use extract::{AppJson, AppPath, AppQuery};
pub use registry::build_router;
pub use response::MessageResponse;
pub use state::{AppState, Repositories};
