mod enricher_factory;
mod presenter_factory;

pub use enricher_factory::EnricherFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
