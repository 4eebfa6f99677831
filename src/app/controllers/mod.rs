//! Application controllers, resolved under `App\Controllers\`

mod home;
mod posts;

pub use home::Home;
pub use posts::Posts;
