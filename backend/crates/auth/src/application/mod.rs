//! Application Layer (Use Cases)

pub mod authenticate;
pub mod check_session;
pub mod config;
pub mod register;
pub mod session_token;
pub mod sign_out;
pub mod submit_secret;

pub use authenticate::{AuthOutput, AuthenticateUseCase, Credentials};
pub use check_session::CheckSessionUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_out::SignOutUseCase;
pub use submit_secret::SubmitSecretUseCase;
