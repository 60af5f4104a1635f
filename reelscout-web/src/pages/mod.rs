//! Page handlers - one full HTML document per route

pub mod home;

pub use home::home_page;
