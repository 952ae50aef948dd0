// Utils compartidos

pub mod constants;
pub mod storage;
pub mod jwt;
pub mod html;

pub use constants::*;
pub use storage::*;
pub use jwt::*;
pub use html::*;
