mod presenter_factory;

pub use presenter_factory::{OutputTarget, PresenterFactory};
