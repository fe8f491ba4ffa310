mod config_controller;
mod export_controller;
mod generate;
mod lifecycle;
mod session;
mod sidebar;

pub use session::ViewerSession;
pub use sidebar::SidebarState;
