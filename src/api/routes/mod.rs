//! API Routes
//!
//! Route handlers organized by view.

pub mod countries;
pub mod health;
pub mod home;
