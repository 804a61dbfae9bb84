// ABOUTME: Command handlers for the dx CLI.
// ABOUTME: Each handler queries the runtime and returns rendered output.

mod containers;
mod examine;
mod images;
mod runtime_connection;
mod volumes;

pub use containers::list_containers;
pub use examine::{Found, examine, locate};
pub use images::list_images;
pub use runtime_connection::connect_to_runtime;
pub use volumes::list_volumes;
