mod article;
mod category;
mod headlines;

pub use article::{Article, CardFields, Source, NO_DESCRIPTION};
#[cfg(test)]
pub(crate) use article::sample_article;
pub use category::Category;
pub use headlines::{partition, Headlines, SECONDARY_LIMIT, TRENDING_LIMIT};
