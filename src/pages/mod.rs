//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its field signals and busy flag, builds its recovery flow
//! with browser capabilities, and delegates toast rendering to `components`.

pub mod forgot_password;
pub mod reset_password;
