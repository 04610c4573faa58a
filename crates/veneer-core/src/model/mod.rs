pub mod file;
pub mod file_state;
pub mod user;

pub use file::File;
pub use file_state::FileState;
pub use user::User;
