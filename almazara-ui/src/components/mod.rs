//! UI Components
//!
//! Reusable Leptos components for the dashboards and CRUD pages.

pub mod chart;
pub mod data_table;
pub mod entity_form;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::BarChart;
pub use data_table::{DataTable, TableRow};
pub use entity_form::EntityForm;
pub use loading::{CardSkeleton, ChartSkeleton, Loading};
pub use modal::{ConfirmDialog, Modal};
pub use nav::{Sidebar, Topbar};
pub use stat_card::StatCard;
pub use toast::Toast;
