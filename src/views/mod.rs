pub mod admin;
pub mod chat;
pub mod login;
pub mod shared;
pub mod student;

pub use admin::AdminDashboard;
pub use chat::ChatPanel;
pub use login::LoginView;
pub use student::StudentDashboard;
