//! Application Pages
//!
//! Top-level views mounted by the router.

pub mod dashboard;
pub mod login;
pub mod member;
pub mod profile;
pub mod resource;
pub mod settings;

pub use dashboard::{AdminDashboard, EmployeeDashboard};
pub use login::Login;
pub use member::MemberDashboard;
pub use profile::Profile;
pub use resource::{resource_page, Access};
pub use settings::Settings;
