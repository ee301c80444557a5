//! Configuration module

mod site;

pub use site::HeroButton;
pub use site::HeroConfig;
pub use site::HeroImage;
pub use site::HeroStat;
pub use site::SiteConfig;
