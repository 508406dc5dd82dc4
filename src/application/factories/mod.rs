mod platform_factory;
mod presenter_factory;

pub use platform_factory::PlatformFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
