pub mod auth;
pub mod task;
pub mod finance;
pub mod user;
pub mod profile;

pub use auth::{Credentials, LoginResponse, MessageResponse, SessionClaims};
pub use task::{NewTask, Quadrant, Task, TaskStatus, TaskUpdate};
pub use finance::{Transaction, TransactionInput, TransactionType};
pub use user::User;
pub use profile::UserProfile;
