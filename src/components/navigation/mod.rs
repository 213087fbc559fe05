pub mod menu;
pub mod menu_item;
pub mod mobile_nav;
pub mod section;

pub use menu::MenuLevel;
pub use menu_item::{MenuIcon, MenuItem};
pub use mobile_nav::MobileNav;
pub use section::MenuSection;
