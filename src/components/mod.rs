//! Reusable UI components shared by the recovery pages.

pub mod toast_container;
