//! View-models for the five screens. Each owns its fetched snapshot in a
//! [`DataBound`](crate::view::DataBound) and exposes the data the rendering
//! layer reads; none of them render anything themselves.

pub mod admin;
pub mod detail;
pub mod explore;
pub mod home;
pub mod profile;

pub use admin::AdminDashboard;
pub use detail::CollegeDetailScreen;
pub use explore::ExploreScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
