//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only toast notifications outlive a single form submission; everything
//! else is scoped to the page that owns it.

pub mod toast;
