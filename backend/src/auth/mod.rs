//! Authentication module
//!
//! Provides session tokens, bcrypt password hashing and the authorization
//! middleware.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{authorize, require_token, AuthUser, TOKEN_HEADER};
pub use password::{PasswordService, BCRYPT_COST};
