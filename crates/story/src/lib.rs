pub mod app_menus;
pub mod assets;
pub mod config;
pub mod gallery_page;
pub mod header;
pub mod http;
pub mod logging;
pub mod themes;
