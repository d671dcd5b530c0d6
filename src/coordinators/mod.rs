// Coordinators layer - Workflow orchestration
// 
// Coordinators compose provider operations for specific API endpoints and
// CLI commands without containing business logic themselves.

pub mod login_coordinator;

pub use login_coordinator::{AuthenticatedUser, LoginCoordinator};
