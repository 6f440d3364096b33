//! Core type definitions for EF agreement analysis
//!
//! This module provides the fundamental types used throughout the echocat
//! library:
//! - [`View`]: Elementary echocardiographic views (PLAX, AP2, AP4)
//! - [`ViewKey`]: A requested view or combination of views, with its fixed
//!   display title

mod view;

pub use view::{View, ViewKey, ALL_VIEWS};
