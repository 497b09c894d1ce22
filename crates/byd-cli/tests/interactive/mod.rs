//! Interactive mode tests.

mod menu;
mod quiz;
mod search;
