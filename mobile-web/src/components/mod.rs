//! UI Components

pub mod loading;
pub mod navbar;
pub mod protected_route;

pub use loading::LoadingScreen;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
