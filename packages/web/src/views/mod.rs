mod home;
pub use home::Home;

mod users;
pub use users::Users;
